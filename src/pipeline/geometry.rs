//! Pixel-to-EMU geometry mapping.
//!
//! PPTX sizes slides and shapes in English Metric Units (914 400 EMU per
//! inch). Page images are mapped to slide dimensions with a single fixed
//! multiplicative ratio — see
//! [`crate::config::DEFAULT_PX_TO_EMU_RATIO`] for why the ratio is not
//! derived from the rendering DPI.

use serde::{Deserialize, Serialize};

/// EMU per inch, the OOXML base length unit.
pub const EMU_PER_INCH: i64 = 914_400;

/// Map a pixel dimension to EMU. Pure integer multiplication; exact for all
/// inputs.
pub fn pixels_to_emu(pixels: u32, ratio: i64) -> i64 {
    pixels as i64 * ratio
}

/// Slide dimensions in EMU, computed per page from that page's pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDimensions {
    pub width_emu: i64,
    pub height_emu: i64,
}

impl SlideDimensions {
    /// Compute slide dimensions from a page image's pixel size.
    pub fn from_pixels(width_px: u32, height_px: u32, ratio: i64) -> Self {
        Self {
            width_emu: pixels_to_emu(width_px, ratio),
            height_emu: pixels_to_emu(height_px, ratio),
        }
    }
}
