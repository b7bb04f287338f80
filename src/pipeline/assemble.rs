//! Presentation assembly: one blank slide per page image, each carrying a
//! full-bleed picture of that page.
//!
//! For every page, in order:
//!
//! 1. compute [`SlideDimensions`] from the image's pixel size,
//! 2. set the *deck-level* slide width/height to those dimensions,
//! 3. append a blank slide,
//! 4. place the PNG-encoded page image at the origin with the same
//!    dimensions, so it exactly fills that slide's own stated area.
//!
//! Step 2 mutates a whole-document property, so the deck's nominal slide size
//! ends up being whatever the *last* page computed even though every picture
//! is placed with its own page's dimensions. Decks produced since the first
//! release have this shape and consumers rely on it; see DESIGN.md before
//! changing it.

use crate::config::ConversionConfig;
use crate::error::Pdf2PptxError;
use crate::output::SlideRecord;
use crate::pipeline::encode;
use crate::pipeline::geometry::SlideDimensions;
use crate::pipeline::render::PageImage;
use crate::pptx::Presentation;
use tracing::debug;

/// Build the output presentation from rendered page images.
///
/// Returns the assembled document plus one [`SlideRecord`] per slide.
pub fn assemble_presentation(
    pages: &[PageImage],
    config: &ConversionConfig,
) -> Result<(Presentation, Vec<SlideRecord>), Pdf2PptxError> {
    let total_pages = pages.len();
    let mut pres = Presentation::new();
    let mut records = Vec::with_capacity(total_pages);

    for page in pages {
        let (width_px, height_px) = (page.image.width(), page.image.height());
        let dims = SlideDimensions::from_pixels(width_px, height_px, config.px_to_emu_ratio);

        let png = encode::encode_page(&page.image).map_err(|e| Pdf2PptxError::ImageEncodeFailed {
            page: page.page_num,
            source: e,
        })?;
        let image_bytes = png.len();

        pres.set_slide_width(dims.width_emu);
        pres.set_slide_height(dims.height_emu);

        let slide = pres.add_slide();
        slide.add_picture_from_bytes(
            png,
            0,
            0,
            dims.width_emu,
            dims.height_emu,
            Some(format!("Page {}", page.page_num)),
        )?;

        debug!(
            "Slide {} assembled: {}x{} px → {}x{} EMU",
            page.page_num, width_px, height_px, dims.width_emu, dims.height_emu
        );

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(page.page_num, total_pages, image_bytes);
        }

        records.push(SlideRecord {
            page_num: page.page_num,
            pixel_width: width_px,
            pixel_height: height_px,
            emu_width: dims.width_emu,
            emu_height: dims.height_emu,
            image_bytes,
        });
    }

    Ok((pres, records))
}
