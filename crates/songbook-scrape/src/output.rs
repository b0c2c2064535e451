use anyhow::{Context, Result};
use songbook_model::LyricsCatalog;
use std::fs;
use std::path::Path;

/// Write all scrape output files to the given directory.
///
/// Creates the directory if it doesn't exist, then writes:
/// - `songs_dict.txt` — title→lyrics mapping as pretty-printed JSON
/// - `titles_list.txt` — one title per line, sorted
/// - `source.md` — provenance info
///
/// Existing files are overwritten in place.
pub fn write_catalog(catalog: &LyricsCatalog, output_dir: &str) -> Result<()> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(&catalog.lyrics)?;
    let path = dir.join("songs_dict.txt");
    fs::write(&path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), songs = catalog.lyrics.len(), "Wrote lyrics mapping");

    let titles: String = catalog.titles().iter().map(|t| format!("{t}\n")).collect();
    let path = dir.join("titles_list.txt");
    fs::write(&path, &titles).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), titles = catalog.lyrics.len(), "Wrote titles list");

    let path = dir.join("source.md");
    fs::write(&path, catalog.source_md())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote source provenance");

    Ok(())
}

/// Cache raw HTML to the output directory for archival/debugging.
pub fn cache_html(output_dir: &str, filename: &str, html: &str) -> Result<()> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Cached raw HTML");
    Ok(())
}
