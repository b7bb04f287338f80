//! Slide and picture-shape types.

use crate::error::Pdf2PptxError;
use crate::pptx::escape_xml;
use std::fmt::Write as FmtWrite;

/// Raster format of an embedded picture, detected from magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureFormat {
    Png,
    Jpeg,
}

impl PictureFormat {
    /// Sniff the format from the image data's leading bytes.
    pub fn detect_from_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(Self::Png)
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// File extension used for the media part name.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

/// A picture shape: image data plus its placement on the slide, in EMU.
#[derive(Debug, Clone)]
pub(crate) struct Picture {
    pub(crate) data: Vec<u8>,
    pub(crate) format: PictureFormat,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) description: String,
}

/// A slide holding zero or more pictures.
///
/// The converter only ever places a single full-bleed picture per slide, but
/// the type does not enforce that.
#[derive(Debug, Clone)]
pub struct Slide {
    pub(crate) slide_id: u32,
    pub(crate) pictures: Vec<Picture>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            pictures: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Number of pictures on this slide.
    pub fn picture_count(&self) -> usize {
        self.pictures.len()
    }

    /// Add a picture to the slide from encoded image bytes.
    ///
    /// Position and extent are in EMU. A full-bleed picture sits at
    /// `(0, 0)` with the slide's own dimensions.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: Option<String>,
    ) -> Result<(), Pdf2PptxError> {
        let format = PictureFormat::detect_from_bytes(&data).ok_or_else(|| {
            Pdf2PptxError::PresentationBuild("unknown picture format (expected PNG or JPEG)".into())
        })?;

        let description = description.unwrap_or_else(|| "Picture".to_string());
        self.pictures.push(Picture {
            data,
            format,
            x,
            y,
            width,
            height,
            description,
        });
        Ok(())
    }

    /// Generate the slide part XML.
    ///
    /// `picture_rel_ids` supplies the relationship ID for each picture, in
    /// picture order (e.g. `["rId2"]`); the IDs must match the slide's
    /// `.rels` part written by the packager.
    pub(crate) fn to_xml(&self, picture_rel_ids: &[String]) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

        // IDs: 1 = group, 2+ = picture shapes
        for (i, pic) in self.pictures.iter().enumerate() {
            let shape_id = i as u32 + 2;
            let rel_id = picture_rel_ids
                .get(i)
                .map(|s| s.as_str())
                .unwrap_or("rId2");
            pic.write_xml(&mut xml, shape_id, rel_id);
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        xml
    }
}

impl Picture {
    fn write_xml(&self, xml: &mut String, shape_id: u32, rel_id: &str) {
        xml.push_str("<p:pic>");
        xml.push_str("<p:nvPicPr>");
        let _ = write!(
            xml,
            r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
            shape_id,
            shape_id,
            escape_xml(&self.description)
        );
        xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        let _ = write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id);
        xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
        xml.push_str("</p:blipFill>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        let _ = write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y);
        let _ = write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height);
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");
        xml.push_str("</p:pic>");
    }
}
