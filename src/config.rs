//! Configuration types for presentation downloads.
//!
//! All pipeline behaviour is controlled through [`DownloadConfig`], built via
//! its [`DownloadConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across tasks and to diff two runs when their
//! outputs differ.
//!
//! There is deliberately no global session object: the HTTP client is
//! constructed per pipeline run from this config and passed down to the
//! stages that need it, so its lifetime is the lifetime of one download.

use crate::error::SlidesError;
use crate::progress::SlideProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Hosts accepted by the URL validator. `www.slideshare.net` plus the
/// bare domain and the language mirrors that serve identical markup.
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &[
    "www.slideshare.net",
    "slideshare.net",
    "pt.slideshare.net",
    "de.slideshare.net",
    "es.slideshare.net",
    "fr.slideshare.net",
];

/// Browser-like User-Agent. SlideShare serves a reduced page (without the
/// embedded slideshow payload) to clients that look like bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for a presentation download.
///
/// Built via [`DownloadConfig::builder()`] or [`DownloadConfig::default()`].
///
/// # Example
/// ```rust
/// use slides2doc::DownloadConfig;
///
/// let config = DownloadConfig::builder()
///     .concurrency(8)
///     .image_timeout_secs(15)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DownloadConfig {
    /// Hosts the validator accepts. Default: [`DEFAULT_ALLOWED_HOSTS`].
    pub allowed_hosts: Vec<String>,

    /// Maximum simultaneous image transfers. Default: 16.
    ///
    /// Slide images are small (50–300 KB) and the CDN is fast, so the fetch
    /// stage is latency-bound. A cap in the 10–20 range cuts wall-clock time
    /// by roughly the cap factor without hammering the host or exhausting
    /// local sockets.
    pub concurrency: usize,

    /// Timeout for the single presentation-page request in seconds. Default: 20.
    ///
    /// The HTML page is rendered server-side and can be slow; it gets a
    /// longer budget than the individual images.
    pub page_timeout_secs: u64,

    /// Per-image transfer timeout in seconds. Default: 10.
    ///
    /// Independent of the page timeout. A stalled image transfer only costs
    /// its own slide; the rest of the batch proceeds.
    pub image_timeout_secs: u64,

    /// User-Agent sent with every request. Default: [`DEFAULT_USER_AGENT`].
    pub user_agent: String,

    /// Which image-size tier to pick from the slideshow payload. Default:
    /// [`TierPolicy::Highest`].
    pub tier_policy: TierPolicy,

    /// Optional per-slide progress callback.
    pub progress_callback: Option<Arc<dyn SlideProgressCallback>>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: DEFAULT_ALLOWED_HOSTS.iter().map(|s| s.to_string()).collect(),
            concurrency: 16,
            page_timeout_secs: 20,
            image_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tier_policy: TierPolicy::default(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for DownloadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadConfig")
            .field("allowed_hosts", &self.allowed_hosts)
            .field("concurrency", &self.concurrency)
            .field("page_timeout_secs", &self.page_timeout_secs)
            .field("image_timeout_secs", &self.image_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("tier_policy", &self.tier_policy)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn SlideProgressCallback>"),
            )
            .finish()
    }
}

impl DownloadConfig {
    /// Create a new builder for `DownloadConfig`.
    pub fn builder() -> DownloadConfigBuilder {
        DownloadConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`DownloadConfig`].
#[derive(Debug)]
pub struct DownloadConfigBuilder {
    config: DownloadConfig,
}

impl DownloadConfigBuilder {
    /// Replace the host allow-list.
    pub fn allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.config.concurrency = n.max(1);
        self
    }

    pub fn page_timeout_secs(mut self, secs: u64) -> Self {
        self.config.page_timeout_secs = secs.max(1);
        self
    }

    pub fn image_timeout_secs(mut self, secs: u64) -> Self {
        self.config.image_timeout_secs = secs.max(1);
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    pub fn tier_policy(mut self, policy: TierPolicy) -> Self {
        self.config.tier_policy = policy;
        self
    }

    pub fn progress_callback(mut self, cb: Arc<dyn SlideProgressCallback>) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<DownloadConfig, SlidesError> {
        let c = &self.config;
        if c.allowed_hosts.is_empty() {
            return Err(SlidesError::InvalidConfig(
                "Host allow-list must not be empty".into(),
            ));
        }
        if c.concurrency == 0 {
            return Err(SlidesError::InvalidConfig("Concurrency must be ≥ 1".into()));
        }
        if c.user_agent.trim().is_empty() {
            return Err(SlidesError::InvalidConfig(
                "User-Agent must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Which output container to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Paginated image container: one full page per slide.
    Pdf,
    /// Slide-deck container: one 13.333″ × 7.5″ slide per image.
    Pptx,
}

impl OutputFormat {
    /// MIME type of the assembled byte stream.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Pptx => "pptx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Image-size tier selection policy.
///
/// The slideshow payload offers several size tiers per slide (e.g. 320, 638,
/// 2048 px wide). Different SlideShare front ends have been observed picking
/// different tiers; we make the choice explicit and configurable rather than
/// implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TierPolicy {
    /// Highest-quality tier — the last entry of the size list. (default)
    #[default]
    Highest,
    /// The middle entry. Smaller transfers, softer images.
    Midpoint,
}

impl TierPolicy {
    /// Index of the chosen tier for a size list of `len` entries.
    ///
    /// Returns `None` for an empty list.
    pub fn select(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match self {
            TierPolicy::Highest => len - 1,
            TierPolicy::Midpoint => len / 2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_concurrency() {
        let config = DownloadConfig::builder().concurrency(0).build().unwrap();
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn empty_allow_list_rejected() {
        let err = DownloadConfig::builder()
            .allowed_hosts(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, SlidesError::InvalidConfig(_)));
    }

    #[test]
    fn default_hosts_cover_mirrors() {
        let config = DownloadConfig::default();
        assert!(config.allowed_hosts.iter().any(|h| h == "www.slideshare.net"));
        assert!(config.allowed_hosts.iter().any(|h| h == "fr.slideshare.net"));
    }

    #[test]
    fn tier_policy_highest_picks_last() {
        assert_eq!(TierPolicy::Highest.select(4), Some(3));
        assert_eq!(TierPolicy::Highest.select(1), Some(0));
        assert_eq!(TierPolicy::Highest.select(0), None);
    }

    #[test]
    fn tier_policy_midpoint_picks_middle() {
        assert_eq!(TierPolicy::Midpoint.select(4), Some(2));
        assert_eq!(TierPolicy::Midpoint.select(3), Some(1));
        assert_eq!(TierPolicy::Midpoint.select(1), Some(0));
    }

    #[test]
    fn mime_types() {
        assert_eq!(OutputFormat::Pdf.mime_type(), "application/pdf");
        assert!(OutputFormat::Pptx.mime_type().contains("presentationml"));
    }
}
