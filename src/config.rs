//! Configuration types for PDF-to-PPTX conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across threads and to hand the exact same
//! settings to the GUI worker, the CLI, and tests.

use crate::error::Pdf2PptxError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// EMU (English Metric Units) per rendered pixel.
///
/// This is the fixed multiplicative factor that maps a page image's pixel
/// dimensions to the slide dimensions written into the deck. It is a
/// configuration constant, deliberately *not* derived from the rendering DPI:
/// at 96 DPI a pixel is 1/96 in = 9 525 EMU, but the produced decks have
/// always used 3 000 EMU per pixel and changing it would resize every
/// existing deck's slides.
pub const DEFAULT_PX_TO_EMU_RATIO: i64 = 3_000;

/// Default rasterization resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 96;

/// Configuration for a PDF-to-PPTX conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2pptx::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(150)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Rendering DPI used when rasterising each PDF page. Range: 72–400. Default: 96.
    ///
    /// 96 DPI matches the platform rendering convention the deck geometry was
    /// tuned against. Raising it sharpens the page images but does not change
    /// slide dimensions, which come from the pixel size times
    /// [`ConversionConfig::px_to_emu_ratio`].
    pub dpi: u32,

    /// EMU per pixel used to size slides and pictures. Default: 3 000.
    ///
    /// See [`DEFAULT_PX_TO_EMU_RATIO`] for why this is independent of `dpi`.
    pub px_to_emu_ratio: i64,

    /// Explicit directory containing the pdfium shared library.
    ///
    /// When `None`, binding falls back to the `PDFIUM_LIB_PATH` environment
    /// variable, then the executable's directory, then the system library.
    pub pdfium_path: Option<PathBuf>,

    /// Simulate mode: validate inputs, sleep briefly, and return without
    /// touching pdfium or writing any output. Default: false.
    ///
    /// Used to exercise the shell's Busy/Finished plumbing without a PDF
    /// engine installed.
    pub simulate: bool,

    /// How long simulate mode sleeps, in milliseconds. Default: 2 000.
    pub simulate_delay_ms: u64,

    /// Optional progress callback receiving per-page events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            px_to_emu_ratio: DEFAULT_PX_TO_EMU_RATIO,
            pdfium_path: None,
            simulate: false,
            simulate_delay_ms: 2_000,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("dpi", &self.dpi)
            .field("px_to_emu_ratio", &self.px_to_emu_ratio)
            .field("pdfium_path", &self.pdfium_path)
            .field("simulate", &self.simulate)
            .field("simulate_delay_ms", &self.simulate_delay_ms)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 400);
        self
    }

    pub fn px_to_emu_ratio(mut self, ratio: i64) -> Self {
        self.config.px_to_emu_ratio = ratio.max(1);
        self
    }

    pub fn pdfium_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_path = Some(path.into());
        self
    }

    pub fn simulate(mut self, v: bool) -> Self {
        self.config.simulate = v;
        self
    }

    pub fn simulate_delay_ms(mut self, ms: u64) -> Self {
        self.config.simulate_delay_ms = ms;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2PptxError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 400 {
            return Err(Pdf2PptxError::InvalidConfig(format!(
                "DPI must be 72–400, got {}",
                c.dpi
            )));
        }
        if c.px_to_emu_ratio < 1 {
            return Err(Pdf2PptxError::InvalidConfig(
                "px_to_emu_ratio must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
