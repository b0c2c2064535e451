use crate::ScrapeError;
use anyhow::Result;
use scraper::{Html, Selector};
use songbook_model::{SongCatalog, SongEntry};

/// Class attribute carried by song rows on the discography page.
const SONG_ROW_CLASS: &str = "songList-table-row --song isVisible";

/// Title substrings identifying alternate versions to skip.
const EXCLUDED_WORDS: &[&str] = &[
    "remix",
    "version",
    "live",
    "acoustic",
    "demo",
    "voice memo",
    "the vault",
    "long pond",
];

/// Extract the song catalog from the discography page HTML.
///
/// Scans `li` rows whose `class` attribute is exactly the song-row marker,
/// reads the `data-name` and `data-shareurl` attributes (trimmed), and
/// skips titles naming an alternate version. Duplicate titles keep the
/// last occurrence in document order. A marked row missing `data-name`,
/// or a surviving row missing `data-shareurl`, is a parse defect.
pub fn extract_songs(html: &str) -> Result<SongCatalog> {
    let document = Html::parse_document(html);

    let row_sel = Selector::parse(&format!(r#"li[class="{SONG_ROW_CLASS}"]"#))
        .expect("valid selector");

    let mut catalog = SongCatalog::new();

    for row in document.select(&row_sel) {
        let name = row
            .value()
            .attr("data-name")
            .ok_or(ScrapeError::MissingSongAttribute { attr: "data-name" })?
            .trim();

        if is_alternate_version(name) {
            tracing::debug!(title = name, "Skipping alternate version");
            continue;
        }

        let share_url = row
            .value()
            .attr("data-shareurl")
            .ok_or(ScrapeError::MissingSongAttribute {
                attr: "data-shareurl",
            })?
            .trim();

        catalog.insert(SongEntry {
            title: name.to_string(),
            lyric_url: share_url.to_string(),
        });
    }

    Ok(catalog)
}

/// Case-insensitive substring match against the exclusion vocabulary.
fn is_alternate_version(title: &str) -> bool {
    let lower = title.to_lowercase();
    EXCLUDED_WORDS.iter().any(|word| lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_row(name: &str, url: &str) -> String {
        format!(
            r#"<li class="songList-table-row --song isVisible" data-name="{name}" data-shareurl="{url}"></li>"#
        )
    }

    #[test]
    fn test_extracts_all_canonical_songs() {
        let html = format!(
            "<html><body><ol>{}{}{}</ol></body></html>",
            song_row("Love Story", "https://www.letras.mus.br/taylor-swift/love-story/"),
            song_row("Blank Space", "https://www.letras.mus.br/taylor-swift/blank-space/"),
            song_row("cardigan", "https://www.letras.mus.br/taylor-swift/cardigan/"),
        );

        let catalog = extract_songs(&html).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.url_for("Love Story"),
            Some("https://www.letras.mus.br/taylor-swift/love-story/")
        );
    }

    #[test]
    fn test_excludes_alternate_versions() {
        let html = format!(
            "<html><body><ol>{}{}{}{}{}</ol></body></html>",
            song_row("Love Story", "https://example.com/a"),
            song_row("Love Story (Taylor's Version)", "https://example.com/b"),
            song_row("All Too Well (10 Minute Version)", "https://example.com/c"),
            song_row("State Of Grace (Acoustic)", "https://example.com/d"),
            song_row("Forever Winter (demo recording)", "https://example.com/e"),
        );

        let catalog = extract_songs(&html).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.url_for("Love Story").is_some());
    }

    #[test]
    fn test_exclusion_is_case_insensitive_substring() {
        let html = format!(
            "<html><body><ol>{}{}</ol></body></html>",
            song_row("Teardrops On My Guitar (Pop REMIX)", "https://example.com/a"),
            // "live" matching as a substring is the preserved behavior
            song_row("Delivered", "https://example.com/b"),
        );

        let catalog = extract_songs(&html).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_title_keeps_last_url() {
        let html = format!(
            "<html><body><ol>{}{}</ol></body></html>",
            song_row("Mine", "https://example.com/first"),
            song_row("Mine", "https://example.com/second"),
        );

        let catalog = extract_songs(&html).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.url_for("Mine"), Some("https://example.com/second"));
    }

    #[test]
    fn test_trims_attribute_whitespace() {
        let html = concat!(
            r#"<html><body><ol><li class="songList-table-row --song isVisible" "#,
            r#"data-name="  Mine  " data-shareurl=" https://example.com/mine "></li></ol></body></html>"#,
        );

        let catalog = extract_songs(html).unwrap();
        assert_eq!(catalog.url_for("Mine"), Some("https://example.com/mine"));
    }

    #[test]
    fn test_ignores_rows_without_marker_class() {
        let html = concat!(
            "<html><body><ol>",
            r#"<li class="songList-table-row --song" data-name="Hidden" data-shareurl="https://example.com/h"></li>"#,
            r#"<li class="album-row" data-name="Fearless"></li>"#,
            "<li>plain item</li>",
            "</ol></body></html>",
        );

        let catalog = extract_songs(html).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_marked_row_missing_name_is_fatal() {
        let html = concat!(
            "<html><body><ol>",
            r#"<li class="songList-table-row --song isVisible" data-shareurl="https://example.com/x"></li>"#,
            "</ol></body></html>",
        );

        let err = extract_songs(html).unwrap_err();
        match err.downcast_ref::<ScrapeError>() {
            Some(ScrapeError::MissingSongAttribute { attr }) => assert_eq!(*attr, "data-name"),
            other => panic!("expected MissingSongAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_marked_row_missing_url_is_fatal() {
        let html = concat!(
            "<html><body><ol>",
            r#"<li class="songList-table-row --song isVisible" data-name="Mine"></li>"#,
            "</ol></body></html>",
        );

        let err = extract_songs(html).unwrap_err();
        match err.downcast_ref::<ScrapeError>() {
            Some(ScrapeError::MissingSongAttribute { attr }) => {
                assert_eq!(*attr, "data-shareurl");
            }
            other => panic!("expected MissingSongAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_excluded_row_missing_url_is_not_fatal() {
        // The exclusion check runs before the URL is read, so an alternate
        // version with no share URL is skipped rather than rejected.
        let html = concat!(
            "<html><body><ol>",
            r#"<li class="songList-table-row --song isVisible" data-name="Mine (Remix)"></li>"#,
            "</ol></body></html>",
        );

        let catalog = extract_songs(html).unwrap();
        assert!(catalog.is_empty());
    }
}
