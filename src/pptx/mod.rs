//! Minimal PPTX (PresentationML) writer.
//!
//! A .pptx file is a ZIP archive of OOXML parts. This module emits the small
//! fixed set of parts a one-picture-per-slide deck needs:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! ppt/presentation.xml            slide size + slide id list
//! ppt/_rels/presentation.xml.rels
//! ppt/slideMasters/slideMaster1.xml (+ rels)
//! ppt/slideLayouts/slideLayout1.xml (+ rels)   blank layout
//! ppt/theme/theme1.xml
//! ppt/slides/slideN.xml (+ rels)  one per page
//! ppt/media/imageN.png            one per page
//! ```
//!
//! Parts are built as strings and deflated into the archive; static parts
//! (master, layout, theme) live in [`template`]. This is a writer only — the
//! module does not read or model existing presentations.

mod package;
mod presentation;
mod slide;
mod template;

pub use presentation::Presentation;
pub use slide::{PictureFormat, Slide};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
