//! Image encoding: `DynamicImage` → PNG bytes for embedding as deck media.
//!
//! PNG is chosen over JPEG because it is lossless — rendered text stays crisp
//! when the slide is projected at full size, and PowerPoint decodes PNG media
//! natively. The encoded bytes are written verbatim into the package's
//! `ppt/media/` directory.

use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// Encode a rasterised page as PNG bytes ready for the media part.
pub fn encode_page(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    debug!("Encoded page image → {} bytes PNG", buf.len());
    Ok(buf)
}
