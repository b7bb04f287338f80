//! Conversion entry points.
//!
//! [`convert`] runs the whole pipeline for one job: validate → metadata →
//! rasterise → assemble → serialize. The stages run strictly in sequence and
//! pages are processed in source order; any failure aborts the job. The GUI
//! worker thread calls [`convert_sync`], which wraps `convert` in a local
//! Tokio runtime.

use crate::config::ConversionConfig;
use crate::error::Pdf2PptxError;
use crate::output::{ConversionOutput, ConversionStats, DocumentMetadata};
use crate::pipeline::{assemble, input, render};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF file into a one-slide-per-page .pptx deck.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `source`   — Path to the source PDF (must end in `.pdf`, case-insensitive)
/// * `dest_dir` — Existing directory receiving `<source-base-name>.pptx`
/// * `config`   — Conversion configuration
///
/// # Errors
/// Any failure aborts the whole job: validation errors, an unreadable or
/// corrupt PDF, a missing pdfium library, image encoding failures, or an
/// unwritable destination. A same-named existing output file is overwritten
/// silently — that is not an error.
pub async fn convert(
    source: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2PptxError> {
    let total_start = Instant::now();
    let source = source.as_ref();
    let dest_dir = dest_dir.as_ref();
    info!(
        "Starting conversion: {} → {}",
        source.display(),
        dest_dir.display()
    );

    // ── Step 1: Validate inputs ──────────────────────────────────────────
    // The shell already ran these checks before dispatching; they run again
    // here so the library holds its own preconditions.
    input::validate_source_path(Some(source))?;
    input::validate_destination_path(Some(dest_dir))?;

    // ── Step 2: Simulate short-circuit ───────────────────────────────────
    if config.simulate {
        debug!("Simulate mode: sleeping {}ms", config.simulate_delay_ms);
        tokio::time::sleep(std::time::Duration::from_millis(config.simulate_delay_ms)).await;
        return Ok(simulated_output(total_start));
    }

    let pdf_path = input::resolve_source(source)?;

    // ── Step 3: Extract metadata ─────────────────────────────────────────
    let metadata = render::extract_metadata(&pdf_path, config).await?;
    let total_pages = metadata.page_count;
    info!("PDF has {} pages", total_pages);

    // ── Step 4: Rasterise pages ──────────────────────────────────────────
    let render_start = Instant::now();
    let pages = render::render_pages(&pdf_path, config).await?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    info!("Rendered {} pages in {}ms", pages.len(), render_duration_ms);

    // ── Step 5: Assemble and serialize ───────────────────────────────────
    // PNG encoding and the deflate pass are CPU-bound; keep them off the
    // async workers alongside the file write.
    let output_path = input::output_path_for(&pdf_path, dest_dir);
    let assemble_start = Instant::now();
    let (slides, output_bytes) = {
        let config = config.clone();
        let output_path = output_path.clone();
        tokio::task::spawn_blocking(move || {
            let (pres, records) = assemble::assemble_presentation(&pages, &config)?;
            let bytes = write_atomic(&pres, &output_path)?;
            Ok::<_, Pdf2PptxError>((records, bytes))
        })
        .await
        .map_err(|e| Pdf2PptxError::Internal(format!("Assemble task panicked: {}", e)))??
    };
    let assemble_duration_ms = assemble_start.elapsed().as_millis() as u64;

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total_pages, slides.len());
    }

    let stats = ConversionStats {
        total_pages,
        slide_count: slides.len(),
        render_duration_ms,
        assemble_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        output_bytes,
    };

    info!(
        "Conversion complete: {} slides, {} bytes, {}ms total → {}",
        stats.slide_count,
        stats.output_bytes,
        stats.total_duration_ms,
        output_path.display()
    );

    Ok(ConversionOutput {
        output_path,
        slides,
        metadata,
        stats,
    })
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally. This is what the GUI worker
/// thread calls.
pub fn convert_sync(
    source: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2PptxError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2PptxError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(source, dest_dir, config))
}

/// Extract PDF metadata without converting content.
pub async fn inspect(
    source: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<DocumentMetadata, Pdf2PptxError> {
    let path = input::resolve_source(source.as_ref())?;
    render::extract_metadata(&path, config).await
}

/// Compute the output file path for a source/destination pair.
///
/// Re-exported convenience over [`input::output_path_for`].
pub fn output_path_for(source: impl AsRef<Path>, dest_dir: impl AsRef<Path>) -> PathBuf {
    input::output_path_for(source.as_ref(), dest_dir.as_ref())
}

/// Convert PDF bytes in memory into a deck written to `dest_dir`.
///
/// pdfium needs a file-system path, so the bytes are spooled to a managed
/// [`tempfile`] (with a `.pdf` suffix, so validation and output naming work)
/// and cleaned up automatically on return or panic. The output file is named
/// after the temp file; callers who care about the deck's name should use
/// [`convert`] with a real file instead.
///
/// This is the right API when PDF data comes from a database or network
/// buffer rather than a file on disk.
pub async fn convert_from_bytes(
    bytes: &[u8],
    dest_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2PptxError> {
    let mut tmp = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| Pdf2PptxError::Internal(format!("tempfile: {e}")))?;
    std::io::Write::write_all(&mut tmp, bytes)
        .map_err(|e| Pdf2PptxError::Internal(format!("tempfile write: {e}")))?;
    // `tmp` is dropped (and the file deleted) when `convert` returns
    convert(tmp.path(), dest_dir, config).await
}

/// Write the deck through a temp file + rename so a failed job never leaves
/// a readable partial `.pptx` behind. The rename also overwrites an existing
/// same-named file silently.
fn write_atomic(
    pres: &crate::pptx::Presentation,
    output_path: &Path,
) -> Result<u64, Pdf2PptxError> {
    let tmp_path = output_path.with_extension("pptx.tmp");
    let bytes = match pres.save(&tmp_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e);
        }
    };

    std::fs::rename(&tmp_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        Pdf2PptxError::OutputWriteFailed {
            path: output_path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(bytes)
}

fn simulated_output(total_start: Instant) -> ConversionOutput {
    ConversionOutput {
        output_path: PathBuf::new(),
        slides: Vec::new(),
        metadata: DocumentMetadata {
            title: None,
            author: None,
            subject: None,
            creator: None,
            producer: None,
            creation_date: None,
            modification_date: None,
            page_count: 0,
            pdf_version: String::new(),
        },
        stats: ConversionStats {
            total_duration_ms: total_start.elapsed().as_millis() as u64,
            ..Default::default()
        },
    }
}
