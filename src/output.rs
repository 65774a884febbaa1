//! Output types: the slide manifest, download statistics, and the final
//! assembled document.
//!
//! Entities flow strictly forward through the pipeline
//! (`SourceRef → SlideManifest → RawImage → NormalizedImage →
//! AssembledDocument`); none is mutated after the stage that creates it.
//! The types here are the ones that cross the library boundary.

use crate::config::OutputFormat;
use serde::{Deserialize, Serialize};

/// The ordered, deduplicated list of slide image URLs for one presentation.
///
/// Invariant: vector order is slide order. Returned by
/// [`crate::inspect`] and consumed by the fetch stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideManifest {
    /// Presentation title from the slideshow payload, when the structured
    /// extraction path produced the manifest. Heuristic paths leave it unset.
    pub title: Option<String>,
    /// One fetchable URL per slide, in slide order.
    pub slide_urls: Vec<String>,
}

impl SlideManifest {
    /// Number of slides in the manifest.
    pub fn len(&self) -> usize {
        self.slide_urls.len()
    }

    /// True when no slides were found.
    pub fn is_empty(&self) -> bool {
        self.slide_urls.is_empty()
    }
}

/// Timing and loss accounting for one pipeline run.
///
/// Slides can be lost at two points — the fetch stage (network) and the
/// normalization stage (undecodable payload). Both losses are non-fatal and
/// show up here rather than as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadStats {
    /// Slides in the extracted manifest.
    pub total_slides: usize,
    /// Slides that made it into the output document.
    pub encoded_slides: usize,
    /// Slides dropped by the fetch stage.
    pub failed_fetches: usize,
    /// Slides fetched but dropped as undecodable.
    pub failed_decodes: usize,
    /// Wall-clock time of the page fetch + manifest extraction.
    pub extract_duration_ms: u64,
    /// Wall-clock time of the concurrent image fetch round.
    pub fetch_duration_ms: u64,
    /// Wall-clock time of normalization + container encoding.
    pub encode_duration_ms: u64,
    /// End-to-end wall-clock time.
    pub total_duration_ms: u64,
}

/// The finished document: a byte stream plus everything the caller needs
/// to hand it to a user.
///
/// Ownership passes to the caller, who streams `bytes` to a response or
/// writes them to disk.
pub struct AssembledDocument {
    /// The encoded container, complete.
    pub bytes: Vec<u8>,
    /// Which container was produced.
    pub format: OutputFormat,
    /// MIME type matching `format`.
    pub mime_type: &'static str,
    /// Suggested filename without extension: the presentation title or the
    /// trailing URL path segment, sanitised and length-capped.
    pub filename_stem: String,
    /// Loss and timing accounting for the run.
    pub stats: DownloadStats,
}

impl AssembledDocument {
    /// Suggested filename including the container extension.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.filename_stem, self.format.extension())
    }
}

impl std::fmt::Debug for AssembledDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssembledDocument")
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("format", &self.format)
            .field("mime_type", &self.mime_type)
            .field("filename_stem", &self.filename_stem)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_len() {
        let m = SlideManifest {
            title: None,
            slide_urls: vec!["a".into(), "b".into()],
        };
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn filename_appends_extension() {
        let doc = AssembledDocument {
            bytes: vec![1, 2, 3],
            format: OutputFormat::Pptx,
            mime_type: OutputFormat::Pptx.mime_type(),
            filename_stem: "intro_to_rust".into(),
            stats: DownloadStats::default(),
        };
        assert_eq!(doc.filename(), "intro_to_rust.pptx");
    }
}
