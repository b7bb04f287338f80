//! Error types for the pdf2pptx library.
//!
//! A single fatal error enum: the conversion pipeline has no partial-success
//! mode. Either every page of the source PDF becomes a slide and the .pptx
//! lands on disk, or the job aborts at the first failure and nothing usable
//! is left behind (the serializer writes through a temp file + rename, so a
//! failed job never leaves a readable partial output).
//!
//! The GUI and CLI front ends render these errors to strings at the worker
//! boundary — the UI thread only ever sees a textual description, never a
//! raw error value.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2pptx library.
#[derive(Debug, Error)]
pub enum Pdf2PptxError {
    // ── Validation errors ─────────────────────────────────────────────────
    /// No source PDF was selected before starting the conversion.
    #[error("No source file selected. Please select a .pdf file.")]
    MissingSource,

    /// The selected source file does not end in ".pdf" (case-insensitive).
    #[error("Source file must have a .pdf extension: '{path}'")]
    InvalidExtension { path: PathBuf },

    /// No destination folder was selected before starting the conversion.
    #[error("No destination folder selected. Please select where to save the .pptx.")]
    MissingDestination,

    /// The selected destination exists but is not a directory.
    #[error("Destination is not a folder: '{path}'")]
    DestinationNotADirectory { path: PathBuf },

    // ── Input errors ──────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the source file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Rasterization errors ──────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' could not be opened: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// pdfium returned an error while rendering a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to the pdfium library: {0}\n\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium, pass --pdfium-path, or install\n\
pdfium as a system library."
    )]
    PdfiumBindingFailed(String),

    // ── Assembly / serialization errors ───────────────────────────────────
    /// Encoding a rendered page image to PNG failed.
    #[error("Image encoding failed for page {page}: {source}")]
    ImageEncodeFailed {
        page: usize,
        #[source]
        source: image::ImageError,
    },

    /// Assembling the presentation failed (unsupported picture data or an
    /// internal builder error).
    #[error("Failed to assemble presentation: {0}")]
    PresentationBuild(String),

    /// Could not create or write the output .pptx file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Platform errors ───────────────────────────────────────────────────
    /// Opening the destination folder was requested on an OS without a
    /// file-browser integration. The conversion itself may have succeeded;
    /// the job still reports this as an error.
    #[error("Unsupported operating system for opening the file browser: {os}")]
    UnsupportedPlatform { os: String },

    /// Launching the platform file browser failed.
    #[error("Failed to open file browser for '{path}': {source}")]
    FolderOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
