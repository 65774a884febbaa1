//! Concurrent image fetch: ordered slide URLs → raw payloads.
//!
//! ## Shape of the stage
//!
//! A fixed-size pool drains the manifest as a work queue
//! (`stream::iter(..).buffer_unordered(cap)`) and the single collecting
//! task writes each outcome into a pre-sized, index-addressed slot vector.
//! Workers never touch a shared growable container, so no locks are needed
//! and the output order is the manifest order no matter which transfer
//! finishes first.
//!
//! One slide's failure costs exactly that slide: the error is logged,
//! surfaced through the progress callback, and the slot stays empty. The
//! stage fails wholesale only when *every* slot is empty.
//!
//! Cancellation is structural: dropping the future returned by
//! [`fetch_slides`] drops every in-flight transfer with it.

use crate::config::DownloadConfig;
use crate::error::SlidesError;
use crate::output::SlideManifest;
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Accept header for image transfers.
const IMAGE_ACCEPT: &str = "image/webp,image/apng,image/*,*/*;q=0.8";

/// One fetched slide payload, tagged with its manifest index.
///
/// Produced here, consumed exactly once by the normalizer.
#[derive(Debug)]
pub struct RawImage {
    /// 0-based position in the manifest.
    pub index: usize,
    /// Undecoded image bytes as served by the CDN.
    pub bytes: Vec<u8>,
}

/// Build the pooled HTTP client shared by the page fetch and all image
/// transfers. Constructed per pipeline run; connection reuse comes from
/// reqwest's internal pool.
pub fn build_client(config: &DownloadConfig) -> Result<reqwest::Client, SlidesError> {
    reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| SlidesError::Internal(format!("failed to build HTTP client: {e}")))
}

/// Download every slide in the manifest with bounded concurrency.
///
/// Returns the successful payloads in manifest order; failed slides are
/// omitted (not null-padded). Fails only with
/// [`SlidesError::AllDownloadsFailed`] when nothing was retrieved.
pub async fn fetch_slides(
    client: &reqwest::Client,
    manifest: &SlideManifest,
    config: &DownloadConfig,
) -> Result<Vec<RawImage>, SlidesError> {
    let total = manifest.len();
    let timeout_secs = config.image_timeout_secs;

    let slots = run_pool(total, config.concurrency, |index| {
        let client = client.clone();
        let url = manifest.slide_urls[index].clone();
        let callback = config.progress_callback.clone();
        async move {
            match fetch_one(&client, &url, timeout_secs).await {
                Ok(bytes) => {
                    debug!("Slide {}: {} bytes", index + 1, bytes.len());
                    if let Some(cb) = &callback {
                        cb.on_slide_fetched(index + 1, total, bytes.len());
                    }
                    Some(bytes)
                }
                Err(e) => {
                    warn!("Slide {}: dropped — {e}", index + 1);
                    if let Some(cb) = &callback {
                        cb.on_slide_failed(index + 1, total, &e.to_string());
                    }
                    None
                }
            }
        }
    })
    .await;

    let fetched: Vec<RawImage> = slots
        .into_iter()
        .enumerate()
        .filter_map(|(index, bytes)| bytes.map(|bytes| RawImage { index, bytes }))
        .collect();

    if fetched.is_empty() {
        return Err(SlidesError::AllDownloadsFailed { total });
    }

    let dropped = total - fetched.len();
    if dropped > 0 {
        warn!("{dropped} of {total} slides failed to download; continuing without them");
    }
    if let Some(cb) = &config.progress_callback {
        cb.on_fetch_complete(total, fetched.len());
    }

    Ok(fetched)
}

/// Fan out `total` jobs over at most `concurrency` in-flight futures and
/// fan the outcomes back into an index-addressed slot vector.
///
/// The job factory is called lazily as pool slots free up, so at most
/// `concurrency` transfers exist at any moment. The function returns only
/// after every dispatched job has settled.
async fn run_pool<F, Fut>(total: usize, concurrency: usize, job: F) -> Vec<Option<Vec<u8>>>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Option<Vec<u8>>>,
{
    let mut slots: Vec<Option<Vec<u8>>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);

    let mut inflight = stream::iter((0..total).map(|index| {
        let fut = job(index);
        async move { (index, fut.await) }
    }))
    .buffer_unordered(concurrency.max(1));

    while let Some((index, outcome)) = inflight.next().await {
        slots[index] = outcome;
    }

    slots
}

/// One image transfer with its own timeout, independent of the page fetch.
async fn fetch_one(
    client: &reqwest::Client,
    url: &str,
    timeout_secs: u64,
) -> Result<Vec<u8>, SlidesError> {
    let classify = |e: reqwest::Error| {
        if e.is_timeout() {
            SlidesError::FetchTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            SlidesError::FetchError {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    };

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, IMAGE_ACCEPT)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await
        .map_err(classify)?;

    if !response.status().is_success() {
        return Err(SlidesError::FetchError {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let bytes = response.bytes().await.map_err(classify)?;
    Ok(bytes.to_vec())
}
