//! PDF rasterisation: render every page to a `DynamicImage` via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async contexts.
//! `tokio::task::spawn_blocking` moves the work onto a dedicated thread pool
//! thread designed for blocking operations, preventing the Tokio worker
//! threads from stalling during CPU-heavy rendering.
//!
//! ## Binding resolution
//!
//! pdfium is a shared library that must be located at runtime. Resolution
//! order: explicit configured directory → `PDFIUM_LIB_PATH` environment
//! variable → the current directory → the system library. Each failure falls
//! through to the next candidate; only when all fail does the job abort with
//! [`Pdf2PptxError::PdfiumBindingFailed`].

use crate::config::ConversionConfig;
use crate::error::Pdf2PptxError;
use crate::output::DocumentMetadata;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// An in-memory raster image of one PDF page.
pub struct PageImage {
    /// 1-indexed source page number.
    pub page_num: usize,
    /// The rendered page.
    pub image: DynamicImage,
}

/// Rasterise every page of a PDF into images, in page order.
///
/// This runs inside `spawn_blocking` since pdfium operations are CPU-bound.
pub async fn render_pages(
    pdf_path: &Path,
    config: &ConversionConfig,
) -> Result<Vec<PageImage>, Pdf2PptxError> {
    let path = pdf_path.to_path_buf();
    let dpi = config.dpi;
    let pdfium_path = config.pdfium_path.clone();
    let progress = config.progress_callback.clone();

    tokio::task::spawn_blocking(move || {
        let pdfium = bind_pdfium(pdfium_path.as_deref())?;
        let document = open_document(&pdfium, &path)?;

        let pages = document.pages();
        let total_pages = pages.len() as usize;
        info!("PDF loaded: {} pages", total_pages);

        if let Some(ref cb) = progress {
            cb.on_conversion_start(total_pages);
        }

        // Scale from PDF points (72/inch) to the requested resolution.
        let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / 72.0);

        let mut results = Vec::with_capacity(total_pages);
        for (idx, page) in pages.iter().enumerate() {
            let page_num = idx + 1;
            if let Some(ref cb) = progress {
                cb.on_page_start(page_num, total_pages);
            }

            let bitmap = page.render_with_config(&render_config).map_err(|e| {
                Pdf2PptxError::RasterisationFailed {
                    page: page_num,
                    detail: format!("{:?}", e),
                }
            })?;

            let image = bitmap.as_image();
            debug!(
                "Rendered page {} → {}x{} px",
                page_num,
                image.width(),
                image.height()
            );

            results.push(PageImage {
                page_num,
                image,
            });
        }

        Ok(results)
    })
    .await
    .map_err(|e| Pdf2PptxError::Internal(format!("Render task panicked: {}", e)))?
}

/// Extract document metadata from a PDF without rendering pages.
pub async fn extract_metadata(
    pdf_path: &Path,
    config: &ConversionConfig,
) -> Result<DocumentMetadata, Pdf2PptxError> {
    let path = pdf_path.to_path_buf();
    let pdfium_path = config.pdfium_path.clone();

    tokio::task::spawn_blocking(move || {
        let pdfium = bind_pdfium(pdfium_path.as_deref())?;
        extract_metadata_blocking(&pdfium, &path)
    })
    .await
    .map_err(|e| Pdf2PptxError::Internal(format!("Metadata task panicked: {}", e)))?
}

/// Bind to the pdfium shared library, trying the candidates in order.
fn bind_pdfium(explicit: Option<&Path>) -> Result<Pdfium, Pdf2PptxError> {
    // The explicit path may name the library file itself or its directory.
    if let Some(path) = explicit {
        return Pdfium::bind_to_library(path)
            .or_else(|_| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(path))
            })
            .map(Pdfium::new)
            .map_err(|e| Pdf2PptxError::PdfiumBindingFailed(format!("{:?}", e)));
    }

    if let Ok(env_path) = std::env::var("PDFIUM_LIB_PATH") {
        if !env_path.is_empty() {
            return Pdfium::bind_to_library(&env_path)
                .or_else(|_| {
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                        Path::new(&env_path),
                    ))
                })
                .map(Pdfium::new)
                .map_err(|e| Pdf2PptxError::PdfiumBindingFailed(format!("{:?}", e)));
        }
    }

    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| Pdf2PptxError::PdfiumBindingFailed(format!("{:?}", e)))
}

/// Open a PDF document, mapping pdfium's load errors onto ours.
fn open_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
) -> Result<PdfDocument<'a>, Pdf2PptxError> {
    pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| Pdf2PptxError::CorruptPdf {
            path: pdf_path.to_path_buf(),
            detail: format!("{:?}", e),
        })
}

/// Blocking implementation of metadata extraction.
fn extract_metadata_blocking(
    pdfium: &Pdfium,
    pdf_path: &Path,
) -> Result<DocumentMetadata, Pdf2PptxError> {
    let document = open_document(pdfium, pdf_path)?;

    let metadata = document.metadata();
    let pages = document.pages();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    Ok(DocumentMetadata {
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
        modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
        page_count: pages.len() as usize,
        pdf_version: format!("{:?}", document.version()),
    })
}
