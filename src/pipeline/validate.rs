//! URL validation: reject malformed or out-of-domain input before any
//! network I/O.
//!
//! A pure function over the input string and the configured allow-list.
//! SlideShare presentations live at `https://<mirror>/<author>/<slug>`, so
//! anything without a path beyond `/` cannot name a presentation and is
//! rejected up front rather than producing a confusing extraction failure.

use crate::error::SlidesError;
use reqwest::Url;

/// A validated presentation address. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SourceRef {
    url: Url,
}

impl SourceRef {
    /// The full parsed URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Host portion, guaranteed present and allow-listed.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Trailing path segment, used as a filename fallback when the page
    /// carries no title.
    pub fn last_path_segment(&self) -> Option<&str> {
        self.url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
    }
}

/// Validate a presentation URL against the host allow-list.
///
/// # Errors
/// * [`SlidesError::InvalidInput`] — empty input, unparseable URL,
///   non-HTTP scheme, or a path that names no presentation.
/// * [`SlidesError::UnsupportedHost`] — parseable URL on a host outside
///   the allow-list.
pub fn validate_url(input: &str, allowed_hosts: &[String]) -> Result<SourceRef, SlidesError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SlidesError::InvalidInput {
            reason: "no URL provided".into(),
        });
    }

    let url = Url::parse(input).map_err(|e| SlidesError::InvalidInput {
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SlidesError::InvalidInput {
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    let host = url.host_str().unwrap_or_default();
    if !allowed_hosts.iter().any(|allowed| allowed == host) {
        return Err(SlidesError::UnsupportedHost {
            host: host.to_string(),
        });
    }

    if url.path().is_empty() || url.path() == "/" {
        return Err(SlidesError::InvalidInput {
            reason: "URL names no presentation (path is empty)".into(),
        });
    }

    Ok(SourceRef { url })
}
