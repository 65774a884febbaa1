//! Error types for the slides2doc library.
//!
//! One enum, two propagation classes:
//!
//! * **Fatal** variants abort the pipeline and surface to the caller:
//!   validation ([`SlidesError::InvalidInput`], [`SlidesError::UnsupportedHost`]),
//!   extraction ([`SlidesError::FetchTimeout`], [`SlidesError::FetchError`],
//!   [`SlidesError::NoSlidesFound`]), total fetch loss
//!   ([`SlidesError::AllDownloadsFailed`]) and synthesis
//!   ([`SlidesError::EmptyInput`], [`SlidesError::EncodeError`]).
//!
//! * **Absorbed** variants are produced per slide and swallowed by the
//!   orchestrator — logged, counted in [`crate::output::DownloadStats`], and
//!   never returned unless they eliminate every slide:
//!   [`SlidesError::DecodeError`] and the per-image fetch failures (which are
//!   logged as text rather than carried as values).
//!
//! [`SlidesError::MalformedManifest`] is a third thing: the structured
//! slideshow payload was present but unusable. The extractor logs it and
//! falls through to the heuristic strategies, so it only ever escapes this
//! crate through log output.

use thiserror::Error;

/// All errors produced by the slides2doc pipeline.
#[derive(Debug, Error)]
pub enum SlidesError {
    // ── Validation ────────────────────────────────────────────────────────
    /// The input string is empty, unparseable, or missing a presentation path.
    #[error("Invalid presentation URL: {reason}")]
    InvalidInput { reason: String },

    /// The URL parsed but its host is not a known SlideShare mirror.
    #[error("'{host}' is not a SlideShare host\nExpected www.slideshare.net or a language mirror (pt/de/es/fr).")]
    UnsupportedHost { host: String },

    // ── Extraction ────────────────────────────────────────────────────────
    /// The presentation page request exceeded its timeout.
    #[error("Request to '{url}' timed out after {secs}s")]
    FetchTimeout { url: String, secs: u64 },

    /// Network or HTTP failure fetching the presentation page.
    #[error("Failed to fetch '{url}': {reason}")]
    FetchError { url: String, reason: String },

    /// Every extraction strategy came back empty (or only noise survived
    /// filtering). The presentation may be private or the markup changed.
    #[error("No slide images found at '{url}'\nThe presentation may be private, removed, or served in a new page format.")]
    NoSlidesFound { url: String },

    /// The embedded slideshow JSON was present but missing required fields.
    /// Falls through to the heuristic strategies rather than aborting.
    #[error("Slideshow payload is malformed: {detail}")]
    MalformedManifest { detail: String },

    // ── Fetch stage ───────────────────────────────────────────────────────
    /// Not a single slide image could be downloaded.
    #[error("All {total} slide downloads failed")]
    AllDownloadsFailed { total: usize },

    // ── Normalization (per-slide, absorbed) ───────────────────────────────
    /// A fetched payload could not be decoded as an image. The slide is
    /// skipped; the batch continues.
    #[error("Slide {slide}: could not decode image: {detail}")]
    DecodeError { slide: usize, detail: String },

    // ── Synthesis ─────────────────────────────────────────────────────────
    /// An encoder was handed zero images.
    #[error("No images to encode")]
    EmptyInput,

    /// The underlying codec or container writer failed.
    #[error("Failed to encode {format} output: {detail}")]
    EncodeError {
        format: &'static str,
        detail: String,
    },

    // ── Config ────────────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SlidesError {
    /// HTTP-style status class for the out-of-scope web layer.
    ///
    /// Validation, extraction, and total-fetch failures are the caller's
    /// input being wrong or the source being unavailable (400); synthesis
    /// and internal failures are ours (500).
    pub fn status_class(&self) -> u16 {
        match self {
            SlidesError::InvalidInput { .. }
            | SlidesError::UnsupportedHost { .. }
            | SlidesError::FetchTimeout { .. }
            | SlidesError::FetchError { .. }
            | SlidesError::NoSlidesFound { .. }
            | SlidesError::MalformedManifest { .. }
            | SlidesError::AllDownloadsFailed { .. }
            | SlidesError::InvalidConfig(_) => 400,
            SlidesError::DecodeError { .. }
            | SlidesError::EmptyInput
            | SlidesError::EncodeError { .. }
            | SlidesError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_host_display() {
        let e = SlidesError::UnsupportedHost {
            host: "evil.com".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("evil.com"), "got: {msg}");
        assert!(msg.contains("slideshare"), "got: {msg}");
    }

    #[test]
    fn all_downloads_failed_display() {
        let e = SlidesError::AllDownloadsFailed { total: 12 };
        assert!(e.to_string().contains("12"));
    }

    #[test]
    fn validation_and_extraction_are_client_errors() {
        assert_eq!(
            SlidesError::InvalidInput {
                reason: "empty".into()
            }
            .status_class(),
            400
        );
        assert_eq!(
            SlidesError::NoSlidesFound {
                url: "https://www.slideshare.net/a/b".into()
            }
            .status_class(),
            400
        );
        assert_eq!(SlidesError::AllDownloadsFailed { total: 3 }.status_class(), 400);
    }

    #[test]
    fn synthesis_is_server_error() {
        assert_eq!(SlidesError::EmptyInput.status_class(), 500);
        assert_eq!(
            SlidesError::EncodeError {
                format: "pdf",
                detail: "stream".into()
            }
            .status_class(),
            500
        );
    }
}
