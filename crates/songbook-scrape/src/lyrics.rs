use scraper::{Html, Node, Selector};
use std::ops::Deref;

/// Class attribute carried by the lyric container on a song page.
const LYRIC_BLOCK_CLASS: &str = "lyric-original";

/// Extract the lyric text from a song page.
///
/// Accumulates the contents of every container carrying the lyric marker
/// class, in document order: a `<br>` appends a newline, entering a `<p>`
/// appends a newline, and text nodes are appended verbatim (entities are
/// already decoded by the HTML parser; no trimming). A page without the
/// container yields an empty string rather than an error.
pub fn extract_lyrics(html: &str) -> String {
    let document = Html::parse_document(html);

    let block_sel = Selector::parse(&format!(r#"div[class="{LYRIC_BLOCK_CLASS}"]"#))
        .expect("valid selector");

    let mut lyrics = String::new();
    for block in document.select(&block_sel) {
        walk_node(block.id(), block.tree(), &mut lyrics);
    }

    lyrics
}

fn walk_node(node_id: ego_tree::NodeId, tree: &ego_tree::Tree<Node>, lyrics: &mut String) {
    let node = tree.get(node_id).expect("valid node id");

    match node.value() {
        Node::Text(text) => lyrics.push_str(text.deref()),
        Node::Element(elem) => match elem.name() {
            "br" => lyrics.push('\n'),
            "p" => {
                lyrics.push('\n');
                for child in node.children() {
                    walk_node(child.id(), tree, lyrics);
                }
            }
            _ => {
                for child in node.children() {
                    walk_node(child.id(), tree, lyrics);
                }
            }
        },
        _ => {}
    }
}
