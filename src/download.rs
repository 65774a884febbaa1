//! Top-level pipeline orchestration.
//!
//! ## Propagation policy
//!
//! Validation and extraction failures abort immediately and surface
//! verbatim. Per-slide fetch and decode failures are absorbed — logged,
//! counted in [`DownloadStats`], dropped from the output — unless they
//! eliminate every slide, in which case the run fails with
//! [`SlidesError::AllDownloadsFailed`] (fetch) or
//! [`SlidesError::EmptyInput`] (decode). Nothing is retried automatically;
//! the caller may re-run the whole pipeline.

use crate::config::{DownloadConfig, OutputFormat};
use crate::error::SlidesError;
use crate::output::{AssembledDocument, DownloadStats, SlideManifest};
use crate::pipeline::{extract, fetch, normalize, pdf, pptx, validate};
use crate::pipeline::validate::SourceRef;
use std::time::Instant;
use tracing::{info, warn};

/// Maximum length of the suggested filename stem.
const FILENAME_STEM_MAX: usize = 100;

/// Download a presentation and assemble it into the requested container.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input`  — presentation URL on an allow-listed host
/// * `format` — which container to produce
/// * `config` — pipeline configuration
///
/// # Returns
/// `Ok(AssembledDocument)` on success, even if some slides were lost
/// (check `document.stats`).
///
/// # Errors
/// See [`SlidesError`]; `status_class()` distinguishes caller errors (400)
/// from synthesis errors (500).
pub async fn download(
    input: impl AsRef<str>,
    format: OutputFormat,
    config: &DownloadConfig,
) -> Result<AssembledDocument, SlidesError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    info!("Starting download: {input} ({format})");

    // ── Step 1: Validate ─────────────────────────────────────────────────
    let source = validate::validate_url(input, &config.allowed_hosts)?;

    // ── Step 2: Build the HTTP client for this run ───────────────────────
    let client = fetch::build_client(config)?;

    // ── Step 3: Extract the slide manifest ───────────────────────────────
    let extract_start = Instant::now();
    let manifest = extract::extract_manifest(&client, &source, config).await?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;
    if let Some(cb) = &config.progress_callback {
        cb.on_manifest_ready(manifest.len());
    }

    // ── Step 4: Fetch slide images ───────────────────────────────────────
    let fetch_start = Instant::now();
    let raw_images = fetch::fetch_slides(&client, &manifest, config).await?;
    let fetch_duration_ms = fetch_start.elapsed().as_millis() as u64;
    let failed_fetches = manifest.len() - raw_images.len();

    // ── Step 5: Normalize, absorbing per-slide decode failures ───────────
    let encode_start = Instant::now();
    let mut normalized = Vec::with_capacity(raw_images.len());
    let mut failed_decodes = 0usize;
    for raw in &raw_images {
        match normalize::normalize(raw) {
            Ok(img) => normalized.push(img),
            Err(e) => {
                warn!("{e}; skipping slide");
                failed_decodes += 1;
            }
        }
    }

    // ── Step 6: Synthesize the container ─────────────────────────────────
    let bytes = match format {
        OutputFormat::Pdf => pdf::encode_pdf(&normalized)?,
        OutputFormat::Pptx => pptx::encode_pptx(&normalized)?,
    };
    let encode_duration_ms = encode_start.elapsed().as_millis() as u64;

    let stats = DownloadStats {
        total_slides: manifest.len(),
        encoded_slides: normalized.len(),
        failed_fetches,
        failed_decodes,
        extract_duration_ms,
        fetch_duration_ms,
        encode_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Assembled {} document: {}/{} slides, {} bytes, {}ms total",
        format,
        stats.encoded_slides,
        stats.total_slides,
        bytes.len(),
        stats.total_duration_ms
    );

    Ok(AssembledDocument {
        bytes,
        format,
        mime_type: format.mime_type(),
        filename_stem: filename_stem(manifest.title.as_deref(), &source),
        stats,
    })
}

/// Synchronous wrapper around [`download`].
///
/// Creates a temporary tokio runtime internally.
pub fn download_sync(
    input: impl AsRef<str>,
    format: OutputFormat,
    config: &DownloadConfig,
) -> Result<AssembledDocument, SlidesError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| SlidesError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(download(input, format, config))
}

/// Extract the slide manifest without downloading any images.
///
/// Useful for previewing the slide count and title before committing to a
/// full download.
pub async fn inspect(
    input: impl AsRef<str>,
    config: &DownloadConfig,
) -> Result<SlideManifest, SlidesError> {
    let source = validate::validate_url(input.as_ref(), &config.allowed_hosts)?;
    let client = fetch::build_client(config)?;
    extract::extract_manifest(&client, &source, config).await
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Suggested filename stem: the presentation title when the structured
/// extraction path supplied one, else the trailing URL path segment.
/// Characters outside `[A-Za-z0-9 _-]` become `_`; capped at
/// [`FILENAME_STEM_MAX`] characters.
fn filename_stem(title: Option<&str>, source: &SourceRef) -> String {
    let base = title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| source.last_path_segment())
        .unwrap_or("presentation");

    let sanitized: String = base
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ') {
                c
            } else {
                '_'
            }
        })
        .take(FILENAME_STEM_MAX)
        .collect();

    if sanitized.trim_matches('_').trim().is_empty() {
        "presentation".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ALLOWED_HOSTS;

    fn source(url: &str) -> SourceRef {
        let hosts: Vec<String> = DEFAULT_ALLOWED_HOSTS.iter().map(|s| s.to_string()).collect();
        validate::validate_url(url, &hosts).unwrap()
    }

    #[test]
    fn stem_prefers_title() {
        let s = source("https://www.slideshare.net/alice/talk-slug");
        assert_eq!(filename_stem(Some("My Great Talk"), &s), "My Great Talk");
    }

    #[test]
    fn stem_falls_back_to_path_segment() {
        let s = source("https://www.slideshare.net/alice/intro-to-rust-251234");
        assert_eq!(filename_stem(None, &s), "intro-to-rust-251234");
    }

    #[test]
    fn stem_sanitizes_special_characters() {
        let s = source("https://www.slideshare.net/alice/talk");
        assert_eq!(
            filename_stem(Some("C++ & Rust: a/b comparison?"), &s),
            "C__ _ Rust_ a_b comparison_"
        );
    }

    #[test]
    fn stem_is_length_capped() {
        let s = source("https://www.slideshare.net/alice/talk");
        let long = "x".repeat(500);
        assert_eq!(filename_stem(Some(&long), &s).len(), FILENAME_STEM_MAX);
    }

    #[test]
    fn stem_never_empty() {
        let s = source("https://www.slideshare.net/alice/talk");
        assert_eq!(filename_stem(Some("???"), &s), "presentation");
    }

    #[tokio::test]
    async fn download_rejects_bad_host_before_any_io() {
        let config = DownloadConfig::default();
        let err = download("https://evil.com/alice/talk", OutputFormat::Pdf, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, SlidesError::UnsupportedHost { .. }));
        assert_eq!(err.status_class(), 400);
    }
}
