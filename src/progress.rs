//! Progress-callback trait for per-slide download events.
//!
//! Inject an [`Arc<dyn SlideProgressCallback>`] via
//! [`crate::config::DownloadConfigBuilder::progress_callback`] to receive
//! real-time events as the fetch stage retrieves each slide image.
//!
//! Callbacks are the least-invasive integration point: callers can forward
//! events to a terminal progress bar, a WebSocket, or a metrics counter
//! without the library knowing how the host application communicates. The
//! trait is `Send + Sync` because slides are fetched concurrently.

use std::sync::Arc;

/// Called by the pipeline as it extracts and downloads slides.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Slide events may arrive out of order and from
/// different tasks; implementations must synchronise their own state.
pub trait SlideProgressCallback: Send + Sync {
    /// Called once after extraction, when the slide count is known.
    fn on_manifest_ready(&self, total_slides: usize) {
        let _ = total_slides;
    }

    /// Called when one slide image has been downloaded.
    ///
    /// `slide` is 1-indexed; `bytes` is the payload size.
    fn on_slide_fetched(&self, slide: usize, total_slides: usize, bytes: usize) {
        let _ = (slide, total_slides, bytes);
    }

    /// Called when one slide download fails after its timeout or an HTTP
    /// error. The slide will be missing from the output.
    fn on_slide_failed(&self, slide: usize, total_slides: usize, error: &str) {
        let _ = (slide, total_slides, error);
    }

    /// Called once after the fetch round settles, before encoding.
    fn on_fetch_complete(&self, total_slides: usize, fetched: usize) {
        let _ = (total_slides, fetched);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl SlideProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::DownloadConfig`].
pub type ProgressCallback = Arc<dyn SlideProgressCallback>;
