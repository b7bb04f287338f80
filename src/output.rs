//! Output types returned by the conversion entry points.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Absolute or caller-relative path of the written .pptx file.
    ///
    /// Empty in simulate mode, where nothing is written.
    pub output_path: PathBuf,

    /// One record per slide, in slide (= page) order.
    pub slides: Vec<SlideRecord>,

    /// Metadata extracted from the source PDF.
    pub metadata: DocumentMetadata,

    /// Timing and size statistics.
    pub stats: ConversionStats,
}

/// Geometry of a single produced slide.
///
/// Each slide's picture is placed with the EMU dimensions computed from that
/// page's own pixel size. The deck-level slide size is whatever the *last*
/// page computed, so `emu_width`/`emu_height` here can differ from the
/// document's nominal slide size when pages vary in size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideRecord {
    /// 1-indexed source page number.
    pub page_num: usize,
    /// Rendered page width in pixels.
    pub pixel_width: u32,
    /// Rendered page height in pixels.
    pub pixel_height: u32,
    /// Picture (and per-page slide-size) width in EMU.
    pub emu_width: i64,
    /// Picture (and per-page slide-size) height in EMU.
    pub emu_height: i64,
    /// Encoded PNG size of the page image, in bytes.
    pub image_bytes: usize,
}

/// Statistics about the conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Slides written to the output deck.
    pub slide_count: usize,
    /// Wall-clock time spent rasterising pages.
    pub render_duration_ms: u64,
    /// Wall-clock time spent encoding images and assembling the package.
    pub assemble_duration_ms: u64,
    /// Total wall-clock time for the whole job.
    pub total_duration_ms: u64,
    /// Size of the written .pptx file in bytes (0 in simulate mode).
    pub output_bytes: u64,
}

/// PDF document metadata, extracted without rendering any pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}
