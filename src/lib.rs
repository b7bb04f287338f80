//! # pdf2pptx
//!
//! Convert PDF documents into full-bleed image slide decks (.pptx).
//!
//! ## Why this crate?
//!
//! Handing a PDF to an audience as a slide deck is a one-trick conversion,
//! but doing it by hand (export pages as images, drag each onto a slide,
//! resize) is tedious and lossy. This crate rasterises each page via pdfium
//! and emits a deck with exactly one slide per page, sized so the page image
//! covers the slide edge-to-edge.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     validate the source path and destination folder
//!  ├─ 2. Render    rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  ├─ 3. Geometry  pixel size → EMU slide size (fixed 3 000 EMU/px ratio)
//!  ├─ 4. Encode    page image → PNG media bytes
//!  ├─ 5. Assemble  one blank slide + full-bleed picture per page
//!  └─ 6. Output    OOXML package written atomically to <base-name>.pptx
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2pptx::{convert, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert("document.pdf", "/tmp/out", &config).await?;
//!     println!("{} slides → {}", output.stats.slide_count, output.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Front ends
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2pptx` binary (clap + indicatif) |
//! | `gui`   | on      | Enables the `pdf2pptx-gui` binary (eframe + rfd) |
//!
//! Disable both when using only the library:
//! ```toml
//! pdf2pptx = { version = "0.3", default-features = false }
//! ```
//!
//! ## PDF engine
//!
//! Rasterisation needs the pdfium shared library at runtime. Resolution
//! order: [`ConversionConfig::pdfium_path`] → the `PDFIUM_LIB_PATH`
//! environment variable → the executable's directory → the system library.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod platform;
pub mod pptx;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_DPI, DEFAULT_PX_TO_EMU_RATIO};
pub use convert::{convert, convert_from_bytes, convert_sync, inspect, output_path_for};
pub use error::Pdf2PptxError;
pub use output::{ConversionOutput, ConversionStats, DocumentMetadata, SlideRecord};
pub use pipeline::geometry::{pixels_to_emu, SlideDimensions, EMU_PER_INCH};
pub use pipeline::input::{validate_destination_path, validate_source_path};
pub use platform::open_in_file_browser;
pub use pptx::Presentation;
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
