use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single song discovered on the discography page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    /// Song title as listed, surrounding whitespace trimmed.
    pub title: String,
    /// Absolute URL of the song's lyric page.
    pub lyric_url: String,
}

/// The set of songs scraped from a discography page, keyed by title.
///
/// Titles are unique: inserting an entry with an existing title replaces
/// the earlier URL, so the last occurrence in document order wins.
/// Iteration is in sorted title order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongCatalog {
    entries: BTreeMap<String, String>,
}

impl SongCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a song, replacing any earlier entry with the same title.
    pub fn insert(&mut self, entry: SongEntry) {
        self.entries.insert(entry.title, entry.lyric_url);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the lyric URL for a title.
    pub fn url_for(&self, title: &str) -> Option<&str> {
        self.entries.get(title).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, u)| (t.as_str(), u.as_str()))
    }
}

impl IntoIterator for SongCatalog {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Provenance information about a scrape run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub url: String,
    pub site: String,
    pub artist: String,
    pub fetched_at: String,
}

/// The finished product of a collection run: every successfully fetched
/// lyric keyed by title, plus the titles that failed.
///
/// Lyric text may be empty (a page without the lyric container yields ""),
/// and is stored verbatim as extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsCatalog {
    pub source: SourceInfo,
    pub lyrics: BTreeMap<String, String>,
    pub failed: Vec<String>,
}

impl LyricsCatalog {
    /// Titles in output order (sorted, matching `lyrics` iteration).
    pub fn titles(&self) -> Vec<&str> {
        self.lyrics.keys().map(String::as_str).collect()
    }

    /// Generate a source.md provenance file.
    pub fn source_md(&self) -> String {
        format!(
            "# Source\n\n\
             - **Site:** {}\n\
             - **URL:** {}\n\
             - **Artist:** {}\n\
             - **Fetched:** {}\n\
             - **Songs:** {}\n\
             - **Failed:** {}\n",
            self.source.site,
            self.source.url,
            self.source.artist,
            self.source.fetched_at,
            self.lyrics.len(),
            self.failed.len(),
        )
    }
}
