use crate::{fetch, lyrics};
use anyhow::Result;
use reqwest::Client;
use songbook_model::{LyricsCatalog, SongCatalog, SourceInfo};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fetch one song's lyric page and extract its text.
pub async fn fetch_song_lyrics(client: &Client, url: &str) -> Result<String> {
    let html = fetch::fetch_page(client, url).await?;
    Ok(lyrics::extract_lyrics(&html))
}

/// Fetch every song's lyrics concurrently and assemble the catalog.
///
/// One task per song; each inserts its (title, lyrics) pair into a shared
/// map with the lock held only for the insert. `concurrency` > 0 caps
/// simultaneous fetches with a semaphore; 0 leaves the fan-out unbounded.
/// A failed fetch is logged and recorded in `failed`, not fatal to the
/// run. All tasks are joined before the catalog is returned.
pub async fn collect(
    client: &Client,
    songs: SongCatalog,
    discography_url: &str,
    artist: &str,
    concurrency: usize,
) -> LyricsCatalog {
    let fetched_at = chrono::Utc::now().to_rfc3339();
    let lyrics = Arc::new(Mutex::new(BTreeMap::new()));
    let failed = Arc::new(Mutex::new(Vec::new()));
    let semaphore = (concurrency > 0).then(|| Arc::new(Semaphore::new(concurrency)));

    let mut tasks = JoinSet::new();
    for (title, url) in songs {
        let client = client.clone();
        let lyrics = Arc::clone(&lyrics);
        let failed = Arc::clone(&failed);
        let semaphore = semaphore.clone();

        tasks.spawn(async move {
            let _permit = match semaphore {
                Some(s) => Some(s.acquire_owned().await.expect("semaphore never closed")),
                None => None,
            };

            match fetch_song_lyrics(&client, &url).await {
                Ok(text) => {
                    tracing::debug!(title = %title, chars = text.len(), "Fetched lyrics");
                    lyrics.lock().expect("lyrics lock poisoned").insert(title, text);
                }
                Err(e) => {
                    tracing::warn!(title = %title, url = %url, error = %e, "Failed to fetch lyrics");
                    failed.lock().expect("failed-list lock poisoned").push(title);
                }
            }
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "Lyric fetch task panicked");
        }
    }

    let lyrics = Arc::into_inner(lyrics)
        .expect("all fetch tasks joined")
        .into_inner()
        .expect("lyrics lock poisoned");
    let mut failed = Arc::into_inner(failed)
        .expect("all fetch tasks joined")
        .into_inner()
        .expect("failed-list lock poisoned");
    failed.sort();

    if !failed.is_empty() {
        tracing::warn!(failed = failed.len(), "Some lyric pages could not be fetched");
    }
    tracing::info!(songs = lyrics.len(), "Collected lyrics");

    LyricsCatalog {
        source: SourceInfo {
            url: discography_url.to_string(),
            site: crate::SITE.to_string(),
            artist: artist.to_string(),
            fetched_at,
        },
        lyrics,
        failed,
    }
}
