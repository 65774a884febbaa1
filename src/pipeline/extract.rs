//! Slide-manifest extraction: presentation HTML → ordered slide image URLs.
//!
//! SlideShare's markup is undocumented and changes without notice, so the
//! extractor is an ordered strategy cascade rather than a single parser:
//!
//! 1. **Structured path** — the Next.js `__NEXT_DATA__` script embeds a JSON
//!    slideshow payload (CDN host, image location, title, slide count, size
//!    tiers). When present and complete it yields an exact, gap-free
//!    manifest by templating one URL per slide index; no guessing.
//! 2. **Heuristics** — a fixed ordered list of pure functions
//!    `(document, raw html) -> Vec<String>`, tried in sequence. The first
//!    one whose output survives post-processing wins.
//!
//! Post-processing applies to every strategy's output: unescape, drop
//! non-HTTP and avatar/profile/logo URLs, dedupe on the query-stripped URL,
//! and sort by the slide index embedded in the filename. A payload that is
//! present but incomplete ([`SlidesError::MalformedManifest`]) falls through
//! to the heuristics instead of aborting.

use crate::config::{DownloadConfig, TierPolicy};
use crate::error::SlidesError;
use crate::output::SlideManifest;
use crate::pipeline::validate::SourceRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Accept header for the page fetch. The image-flavoured variant lives in
/// the fetch stage.
const PAGE_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// ── Entry point ──────────────────────────────────────────────────────────

/// Fetch the presentation page and extract its slide manifest.
///
/// One bounded request with browser-like headers (SlideShare serves reduced
/// markup to clients that look like bots), then the pure strategy cascade.
pub async fn extract_manifest(
    client: &reqwest::Client,
    source: &SourceRef,
    config: &DownloadConfig,
) -> Result<SlideManifest, SlidesError> {
    let html = fetch_page(client, source, config.page_timeout_secs).await?;
    debug!("Fetched presentation page: {} bytes", html.len());

    match parse_manifest(&html, config.tier_policy) {
        Some(manifest) => {
            info!("Found {} slides", manifest.len());
            Ok(manifest)
        }
        None => Err(SlidesError::NoSlidesFound {
            url: source.as_str().to_string(),
        }),
    }
}

/// Fetch the raw presentation HTML.
async fn fetch_page(
    client: &reqwest::Client,
    source: &SourceRef,
    timeout_secs: u64,
) -> Result<String, SlidesError> {
    let url = source.as_str();
    let to_fetch_error = |reason: String| SlidesError::FetchError {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(source.url().clone())
        .header(reqwest::header::ACCEPT, PAGE_ACCEPT)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SlidesError::FetchTimeout {
                    url: url.to_string(),
                    secs: timeout_secs,
                }
            } else {
                to_fetch_error(e.to_string())
            }
        })?;

    if !response.status().is_success() {
        return Err(to_fetch_error(format!("HTTP {}", response.status())));
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            SlidesError::FetchTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            to_fetch_error(e.to_string())
        }
    })
}

// ── Strategy cascade ─────────────────────────────────────────────────────

/// A fallback heuristic: pure function over the parsed document and the raw
/// HTML text. No trait objects, no state — just an ordered list.
type Strategy = fn(&Html, &str) -> Vec<String>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("picture-source", scan_picture_sources),
    ("img-attrs", scan_img_attrs),
    ("data-attrs", scan_data_attrs),
    ("json-fields", scan_json_fields),
    ("og-image", scan_meta_images),
    ("cdn-pattern", scan_cdn_urls),
];

/// Run the full cascade over one HTML document. Pure; `None` when nothing
/// survives filtering.
///
/// The structured path is preferred because it produces an exact, correctly
/// ordered manifest; the heuristics reconstruct one from whatever image
/// references the markup leaks.
pub fn parse_manifest(html: &str, policy: TierPolicy) -> Option<SlideManifest> {
    let doc = Html::parse_document(html);

    if let Some(script) = doc.select(&NEXT_DATA_SELECTOR).next() {
        let payload: String = script.text().collect();
        match structured_manifest(&payload, policy) {
            Ok(manifest) if !manifest.is_empty() => {
                debug!("Structured slideshow payload yielded {} slides", manifest.len());
                return Some(manifest);
            }
            Ok(_) => {}
            Err(e) => warn!("{e}; falling back to heuristics"),
        }
    }

    for (name, strategy) in STRATEGIES {
        let urls = postprocess_urls(strategy(&doc, html));
        if !urls.is_empty() {
            debug!("Strategy '{name}' yielded {} slides", urls.len());
            return Some(SlideManifest {
                title: None,
                slide_urls: urls,
            });
        }
    }

    None
}

// ── Structured-data path ─────────────────────────────────────────────────

static NEXT_DATA_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script#__NEXT_DATA__").unwrap());

#[derive(Deserialize)]
struct NextData {
    props: NextProps,
}

#[derive(Deserialize)]
struct NextProps {
    #[serde(rename = "pageProps")]
    page_props: PageProps,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PageProps {
    slideshow: Option<Slideshow>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Slideshow {
    slides: Option<SlideImages>,
    #[serde(rename = "totalSlides")]
    total_slides: u32,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SlideImages {
    host: String,
    #[serde(rename = "imageLocation")]
    image_location: String,
    title: String,
    #[serde(rename = "imageSizes")]
    image_sizes: Vec<ImageTier>,
}

#[derive(Deserialize, Default, Clone)]
#[serde(default)]
struct ImageTier {
    quality: Option<u32>,
    width: Option<u32>,
}

/// Build the manifest from the embedded slideshow JSON.
///
/// Every slide exists at
/// `{host}/{imageLocation}/{quality}/{title}-{index}-{width}.jpg` for one
/// quality/width tier; we pick the tier by policy and template one URL per
/// slide index, 1-based.
fn structured_manifest(payload: &str, policy: TierPolicy) -> Result<SlideManifest, SlidesError> {
    let malformed = |detail: &str| SlidesError::MalformedManifest {
        detail: detail.to_string(),
    };

    let data: NextData =
        serde_json::from_str(payload).map_err(|e| malformed(&format!("not JSON: {e}")))?;

    let slideshow = data
        .props
        .page_props
        .slideshow
        .ok_or_else(|| malformed("no slideshow object"))?;
    let slides = slideshow
        .slides
        .ok_or_else(|| malformed("no slides object"))?;

    if slideshow.total_slides == 0 {
        return Err(malformed("totalSlides is 0"));
    }
    if slides.host.is_empty() || slides.image_location.is_empty() || slides.title.is_empty() {
        return Err(malformed("missing host, imageLocation, or title"));
    }

    let tier_index = policy
        .select(slides.image_sizes.len())
        .ok_or_else(|| malformed("imageSizes is empty"))?;
    let tier = &slides.image_sizes[tier_index];
    let quality = tier.quality.unwrap_or(100);
    let width = tier.width.unwrap_or(1280);

    let slide_urls = (1..=slideshow.total_slides)
        .map(|i| {
            format!(
                "{}/{}/{}/{}-{}-{}.jpg",
                slides.host, slides.image_location, quality, slides.title, i, width
            )
        })
        .collect();

    Ok(SlideManifest {
        title: Some(slides.title),
        slide_urls: postprocess_keep_order(slide_urls),
    })
}

// ── Heuristic strategies ─────────────────────────────────────────────────

static PICTURE_SOURCE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("picture source").unwrap());
static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static DATA_ATTR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[data-full], [data-normal]").unwrap());
static META_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:image"], meta[name="og:image"]"#).unwrap()
});

/// `<picture>/<source>` srcset entries that look like slide renders.
/// The last srcset candidate is the widest, so prefer it per element.
fn scan_picture_sources(doc: &Html, _raw: &str) -> Vec<String> {
    doc.select(&PICTURE_SOURCE_SELECTOR)
        .filter_map(|el| el.value().attr("srcset"))
        .filter_map(|srcset| {
            srcset
                .split(',')
                .filter_map(|entry| entry.split_whitespace().next())
                .filter(|url| url.contains("slide"))
                .next_back()
                .map(str::to_string)
        })
        .collect()
}

/// `<img>` srcset/data-src/src attributes filtered by slide markers.
fn scan_img_attrs(doc: &Html, _raw: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for el in doc.select(&IMG_SELECTOR) {
        if let Some(srcset) = el.value().attr("srcset") {
            if let Some(url) = srcset
                .split(',')
                .filter_map(|entry| entry.split_whitespace().next())
                .filter(|url| url.contains("slide") || url.contains("image"))
                .next_back()
            {
                urls.push(url.to_string());
                continue;
            }
        }
        for attr in ["data-src", "src"] {
            if let Some(url) = el.value().attr(attr) {
                if url.contains("slide") || url.contains("image") {
                    urls.push(url.to_string());
                    break;
                }
            }
        }
    }
    urls
}

/// Explicit full-resolution data attributes some layouts carry.
fn scan_data_attrs(doc: &Html, _raw: &str) -> Vec<String> {
    doc.select(&DATA_ATTR_SELECTOR)
        .filter_map(|el| {
            el.value()
                .attr("data-full")
                .or_else(|| el.value().attr("data-normal"))
        })
        .map(str::to_string)
        .collect()
}

static JSON_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:slideImageUrl|imageUrl|full|normal)"\s*:\s*"([^"]+)""#).unwrap()
});

/// JSON-embedded image URL fields anywhere in the raw HTML. Catches inline
/// state blobs that are not `__NEXT_DATA__`.
fn scan_json_fields(_doc: &Html, raw: &str) -> Vec<String> {
    JSON_FIELD_RE
        .captures_iter(raw)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// `og:image` meta tags. Usually only the first slide, but better than
/// nothing.
fn scan_meta_images(doc: &Html, _raw: &str) -> Vec<String> {
    doc.select(&META_IMAGE_SELECTOR)
        .filter_map(|el| el.value().attr("content"))
        .map(str::to_string)
        .collect()
}

static CDN_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https://image\.slidesharecdn\.com/[^"'\s\\<>]+\.(?:jpe?g|png|webp|gif)"#)
        .unwrap()
});

/// Last resort: any image-extension URL on the slide CDN host.
fn scan_cdn_urls(_doc: &Html, raw: &str) -> Vec<String> {
    CDN_URL_RE
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ── Post-processing ──────────────────────────────────────────────────────

/// Substrings marking non-slide assets (case-insensitive).
const NOISE_MARKERS: &[&str] = &["avatar", "profile", "logo"];

static SLIDE_INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_](\d+)[-_]").unwrap());

/// Clean, dedupe, and order a strategy's raw URL list.
///
/// Idempotent: feeding the output back in yields the same list.
pub fn postprocess_urls(urls: Vec<String>) -> Vec<String> {
    let mut cleaned = postprocess_keep_order(urls);
    cleaned.sort_by_key(|url| slide_index(url));
    cleaned
}

/// The filtering half of [`postprocess_urls`], without the index sort.
/// The structured path's output is already in slide order.
fn postprocess_keep_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    urls.into_iter()
        .map(|url| url.replace("\\u002F", "/").replace("\\/", "/"))
        .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
        .filter(|url| {
            let lower = url.to_lowercase();
            !NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .filter(|url| {
            let base = url.split('?').next().unwrap_or(url).to_string();
            seen.insert(base)
        })
        .collect()
}

/// Parse the slide index from a `-<n>-` / `_<n>_` filename pattern.
///
/// The slide number sits directly before the width suffix
/// (`…/talk-12-1280.jpg`), so the last such group is the index. URLs
/// without one sort first, at index 0.
fn slide_index(url: &str) -> u32 {
    SLIDE_INDEX_RE
        .captures_iter(url)
        .last()
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
