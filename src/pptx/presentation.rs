//! The in-progress output document: an ordered sequence of slides plus the
//! deck-level slide size.

use crate::error::Pdf2PptxError;
use crate::pptx::package;
use crate::pptx::slide::Slide;
use std::fmt::Write as FmtWrite;
use std::io::{Seek, Write};
use std::path::Path;

/// A mutable presentation for writing.
///
/// Slides are appended in order and serialized once at the end. The slide
/// width/height are whole-document properties: setting them affects the
/// deck's nominal slide size, not the placement of pictures already added to
/// earlier slides.
#[derive(Debug)]
pub struct Presentation {
    slides: Vec<Slide>,
    /// Slide width in EMU (914 400 EMU = 1 inch).
    slide_width: i64,
    /// Slide height in EMU.
    slide_height: i64,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,
            slide_height: 6_858_000,
        }
    }

    /// Append a new blank slide and return a mutable reference to it.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id));
        self.slides.last_mut().expect("just pushed")
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The slides, in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the deck-level slide width in EMU.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the deck-level slide width in EMU.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the deck-level slide height in EMU.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the deck-level slide height in EMU.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Generate the `ppt/presentation.xml` part.
    ///
    /// `slide_rel_ids` supplies the relationship ID for each slide in order
    /// (e.g. `["rId2", "rId3", ...]`); rId1 is reserved for the slide master.
    pub(crate) fn presentation_xml(&self, slide_rel_ids: &[String]) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = slide_rel_ids.get(index).map(|s| s.as_str()).unwrap_or("rId2");
                let _ = write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                );
            }
            xml.push_str("</p:sldIdLst>");
        }

        let _ = write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        );
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        xml
    }

    /// Serialize the presentation package into `writer`.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> std::io::Result<()> {
        package::write_package(self, writer)
    }

    /// Serialize the presentation to a file, overwriting silently if a file
    /// with the same name exists. Returns the written size in bytes.
    pub fn save(&self, path: &Path) -> Result<u64, Pdf2PptxError> {
        let map_io = |source: std::io::Error| Pdf2PptxError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::create(path).map_err(map_io)?;
        self.write_to(&file).map_err(map_io)?;
        file.sync_all().map_err(map_io)?;

        let len = std::fs::metadata(path).map_err(map_io)?.len();
        Ok(len)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
