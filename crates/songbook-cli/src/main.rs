use anyhow::Result;
use clap::Parser;
use songbook_scrape::ScrapeOptions;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "songbook")]
#[command(about = "Scrape an artist's discography and lyrics into local text files")]
#[command(version)]
struct Cli {
    /// letras.mus.br artist slug (e.g., "taylor-swift")
    #[arg(short, long, default_value = "taylor-swift")]
    artist: String,

    /// Output directory for titles_list.txt, songs_dict.txt, and source.md
    #[arg(short = 'O', long, default_value = ".")]
    output_dir: String,

    /// Maximum simultaneous lyric fetches; 0 starts one task per song
    #[arg(short, long, default_value_t = 0)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Cache the raw discography HTML alongside the outputs
    #[arg(long)]
    cache_html: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-08-04 19:44:09.123 -03:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(
                time_format.to_string(),
            ))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                time_format.to_string(),
            ))
            .init();
    }

    let options = ScrapeOptions {
        concurrency: cli.concurrency,
        timeout: Duration::from_secs(cli.timeout),
        cache_html: cli.cache_html,
    };

    let started = Instant::now();
    tracing::info!(artist = %cli.artist, output_dir = %cli.output_dir, "Scraping discography and lyrics");

    songbook_scrape::scrape(&cli.artist, &options, &cli.output_dir).await?;

    tracing::info!(
        elapsed_secs = format!("{:.2}", started.elapsed().as_secs_f64()),
        "Scrape complete"
    );

    Ok(())
}
