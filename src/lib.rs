//! # slides2doc
//!
//! Download public SlideShare presentations as PDF or PPTX decks.
//!
//! ## Why this crate?
//!
//! SlideShare renders each slide as an image and offers no download button
//! for most decks. This crate reconstructs the presentation from those
//! per-slide images: it extracts the ordered image list from markup that is
//! undocumented and changes over time, downloads the images concurrently
//! with partial-failure tolerance, flattens them to opaque RGB, and
//! assembles either a paginated PDF or a 16:9 PPTX deck.
//!
//! ## Pipeline Overview
//!
//! ```text
//! URL
//!  │
//!  ├─ 1. Validate   allow-listed mirror host, presentation path
//!  ├─ 2. Extract    __NEXT_DATA__ payload, else heuristic cascade
//!  ├─ 3. Fetch      pooled concurrent image downloads (cap 16)
//!  ├─ 4. Normalize  decode, composite alpha over white, RGB8
//!  └─ 5. Assemble   PDF (page per slide) or PPTX (letterboxed 16:9)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slides2doc::{download, DownloadConfig, OutputFormat};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DownloadConfig::default();
//!     let doc = download(
//!         "https://www.slideshare.net/alice/intro-to-rust",
//!         OutputFormat::Pdf,
//!         &config,
//!     )
//!     .await?;
//!     std::fs::write(doc.filename(), &doc.bytes)?;
//!     eprintln!(
//!         "{}/{} slides in {}ms",
//!         doc.stats.encoded_slides, doc.stats.total_slides, doc.stats.total_duration_ms
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `slides2doc` binary (clap + anyhow + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! slides2doc = { version = "0.1", default-features = false }
//! ```
//!
//! ## Failure model
//!
//! Bad input and extraction failures abort with a typed
//! [`SlidesError`]; individual slide losses (network or decode) are
//! absorbed and reported through [`DownloadStats`]. A run only fails
//! outright when *no* slide survives.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod download;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{DownloadConfig, DownloadConfigBuilder, OutputFormat, TierPolicy};
pub use download::{download, download_sync, inspect};
pub use error::SlidesError;
pub use output::{AssembledDocument, DownloadStats, SlideManifest};
pub use progress::{NoopProgressCallback, ProgressCallback, SlideProgressCallback};
