//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline renders and assembles each page.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a channel, a GUI repaint request, or a terminal progress
//! bar — without the library knowing anything about how the host application
//! communicates. The trait is `Send + Sync` because the pipeline runs inside
//! `tokio::task::spawn_blocking`.

use std::sync::Arc;

/// Called by the conversion pipeline as it processes each page.
///
/// Pages are processed strictly in order, so events for page N always arrive
/// before events for page N+1. All methods have default no-op implementations
/// so callers only override what they care about.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after the PDF has been opened, before any page is rendered.
    ///
    /// # Arguments
    /// * `total_pages` — number of pages that will become slides
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called just before a page is rasterised.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    fn on_page_start(&self, page_num: usize, total_pages: usize) {
        let _ = (page_num, total_pages);
    }

    /// Called when a page has been rendered, encoded, and placed on a slide.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages
    /// * `image_bytes` — encoded PNG size of the page image
    fn on_page_complete(&self, page_num: usize, total_pages: usize, image_bytes: usize) {
        let _ = (page_num, total_pages, image_bytes);
    }

    /// Called once after the output file has been written.
    ///
    /// # Arguments
    /// * `total_pages` — total pages in the document
    /// * `slide_count` — slides written (equals `total_pages` on success)
    fn on_conversion_complete(&self, total_pages: usize, slide_count: usize) {
        let _ = (total_pages, slide_count);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;
