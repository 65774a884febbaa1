//! CLI binary for slides2doc.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `DownloadConfig`, renders download progress, and writes the assembled
//! document to disk.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use slides2doc::{
    download, inspect, DownloadConfig, OutputFormat, SlideProgressCallback, TierPolicy,
};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a live bar that grows as slides download.
/// Slides complete out of order; the bar only counts, so that's fine.
struct CliProgressCallback {
    bar: ProgressBar,
    errors: AtomicUsize,
}

impl CliProgressCallback {
    /// Bar length is set by `on_manifest_ready` once the slide count is
    /// known; until then it spins.
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_prefix("Extracting");
        bar.set_message("Fetching presentation page…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            errors: AtomicUsize::new(0),
        })
    }
}

impl SlideProgressCallback for CliProgressCallback {
    fn on_manifest_ready(&self, total_slides: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} slides  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_slides as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Downloading");
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Found {total_slides} slides"))
        ));
    }

    fn on_slide_fetched(&self, slide: usize, _total: usize, bytes: usize) {
        self.bar.set_message(format!("slide {slide}"));
        let _ = bytes;
        self.bar.inc(1);
    }

    fn on_slide_failed(&self, slide: usize, _total: usize, error: &str) {
        self.errors.fetch_add(1, Ordering::SeqCst);
        let msg = if error.len() > 80 {
            format!("{}\u{2026}", &error[..79])
        } else {
            error.to_string()
        };
        self.bar
            .println(format!("  {} Slide {:>3}  {}", red("✗"), slide, red(&msg)));
        self.bar.inc(1);
    }

    fn on_fetch_complete(&self, total_slides: usize, fetched: usize) {
        self.bar.finish_and_clear();
        let failed = total_slides.saturating_sub(fetched);
        if failed == 0 {
            eprintln!(
                "{} {} slides downloaded",
                green("✔"),
                bold(&fetched.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} slides downloaded  ({} dropped)",
                cyan("⚠"),
                bold(&fetched.to_string()),
                total_slides,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Download as PDF into the current directory
  slides2doc https://www.slideshare.net/alice/intro-to-rust

  # Download as an editable PowerPoint deck
  slides2doc --format pptx https://www.slideshare.net/alice/intro-to-rust

  # Explicit output path
  slides2doc https://www.slideshare.net/alice/intro-to-rust -o rust.pdf

  # Preview the slide count without downloading images
  slides2doc --inspect-only https://www.slideshare.net/alice/intro-to-rust

  # Smaller transfers on a slow link
  slides2doc --tier midpoint --concurrency 4 https://www.slideshare.net/alice/intro-to-rust

NOTES:
  Only public presentations work; decks behind a login cannot be fetched.
  Individual slide downloads may fail without aborting the run — the final
  document simply omits those slides and the summary reports the loss.
"#;

/// Download SlideShare presentations as PDF or PPTX decks.
#[derive(Parser, Debug)]
#[command(
    name = "slides2doc",
    version,
    about = "Download SlideShare presentations as PDF or PPTX decks",
    long_about = "Download a public SlideShare presentation and reassemble its slide images \
into a paginated PDF or a 16:9 PowerPoint deck.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Presentation URL (https://www.slideshare.net/<author>/<slug>).
    url: String,

    /// Output container: pdf or pptx.
    #[arg(short, long, env = "SLIDES2DOC_FORMAT", value_enum, default_value = "pdf")]
    format: FormatArg,

    /// Write the document to this path instead of <title>.<ext> in the
    /// current directory.
    #[arg(short, long, env = "SLIDES2DOC_OUTPUT")]
    output: Option<PathBuf>,

    /// Maximum simultaneous image downloads.
    #[arg(short, long, env = "SLIDES2DOC_CONCURRENCY", default_value_t = 16)]
    concurrency: usize,

    /// Presentation-page timeout in seconds.
    #[arg(long, env = "SLIDES2DOC_PAGE_TIMEOUT", default_value_t = 20)]
    page_timeout: u64,

    /// Per-image timeout in seconds.
    #[arg(long, env = "SLIDES2DOC_IMAGE_TIMEOUT", default_value_t = 10)]
    image_timeout: u64,

    /// Image quality tier: highest or midpoint.
    #[arg(long, env = "SLIDES2DOC_TIER", value_enum, default_value = "highest")]
    tier: TierArg,

    /// Print the slide manifest and exit without downloading images.
    #[arg(long)]
    inspect_only: bool,

    /// Output stats (or the manifest with --inspect-only) as JSON.
    #[arg(long, env = "SLIDES2DOC_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "SLIDES2DOC_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "SLIDES2DOC_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "SLIDES2DOC_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Pdf,
    Pptx,
}

impl From<FormatArg> for OutputFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Pptx => OutputFormat::Pptx,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TierArg {
    Highest,
    Midpoint,
}

impl From<TierArg> for TierPolicy {
    fn from(v: TierArg) -> Self {
        match v {
            TierArg::Highest => TierPolicy::Highest,
            TierArg::Midpoint => TierPolicy::Midpoint,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar provides the feedback that matters; suppress
    // INFO-level library logs while it is active.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && !cli.inspect_only;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = DownloadConfig::builder()
        .concurrency(cli.concurrency)
        .page_timeout_secs(cli.page_timeout)
        .image_timeout_secs(cli.image_timeout)
        .tier_policy(cli.tier.into());

    if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        builder = builder.progress_callback(cb as Arc<dyn SlideProgressCallback>);
    }

    let config = builder.build().context("Invalid configuration")?;

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let manifest = inspect(&cli.url, &config)
            .await
            .context("Failed to extract slide manifest")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&manifest).context("Failed to serialise manifest")?
            );
        } else {
            if let Some(ref title) = manifest.title {
                println!("Title:   {title}");
            }
            println!("Slides:  {}", manifest.len());
            for (i, url) in manifest.slide_urls.iter().enumerate() {
                println!("  {:>3}  {}", i + 1, url);
            }
        }
        return Ok(());
    }

    // ── Run the pipeline ─────────────────────────────────────────────────
    let doc = download(&cli.url, cli.format.into(), &config)
        .await
        .context("Download failed")?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(doc.filename()));
    tokio::fs::write(&output_path, &doc.bytes)
        .await
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&doc.stats).context("Failed to serialise stats")?
        );
    } else if !cli.quiet {
        let lost = doc.stats.failed_fetches + doc.stats.failed_decodes;
        eprintln!(
            "{}  {}/{} slides  {}ms  →  {}",
            if lost == 0 { green("✔") } else { cyan("⚠") },
            doc.stats.encoded_slides,
            doc.stats.total_slides,
            doc.stats.total_duration_ms,
            bold(&output_path.display().to_string()),
        );
        eprintln!(
            "   {}  {}",
            dim(&format!("{} bytes", doc.bytes.len())),
            dim(doc.mime_type),
        );
    }

    Ok(())
}
