use anyhow::Result;
use std::time::Duration;
use thiserror::Error;

pub mod collector;
pub mod discography;
pub mod fetch;
pub mod lyrics;
pub mod output;

pub const BASE_URL: &str = "https://www.letras.mus.br";
pub const SITE: &str = "letras.mus.br";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("song row is missing required attribute '{attr}'")]
    MissingSongAttribute { attr: &'static str },

    #[error("HTTP {status} for {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Options controlling a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Maximum simultaneous lyric fetches; 0 starts one task per song.
    pub concurrency: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Cache the raw discography HTML alongside the outputs.
    pub cache_html: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            concurrency: 0,
            timeout: Duration::from_secs(30),
            cache_html: false,
        }
    }
}

/// Scrape an artist's discography and every canonical lyric page, then
/// write the title list, the title→lyrics mapping, and provenance files
/// to `output_dir`.
///
/// `artist` should be the letras.mus.br artist slug (e.g., "taylor-swift").
///
/// The discography fetch and the output writes abort the run on failure;
/// individual lyric pages that fail are logged and recorded in the
/// catalog's `failed` list instead.
pub async fn scrape(artist: &str, options: &ScrapeOptions, output_dir: &str) -> Result<()> {
    let url = format!("{BASE_URL}/{artist}/discografia/");
    let client = fetch::build_client(options.timeout)?;

    tracing::info!(url = %url, "Fetching discography");
    let html = fetch::fetch_page(&client, &url).await?;
    tracing::info!(bytes = html.len(), "Received HTML");

    if options.cache_html {
        output::cache_html(output_dir, "raw_discography.html", &html)?;
    }

    let songs = discography::extract_songs(&html)?;
    tracing::info!(songs = songs.len(), "Extracted song entries");

    let catalog = collector::collect(&client, songs, &url, artist, options.concurrency).await;

    output::write_catalog(&catalog, output_dir)?;

    Ok(())
}
