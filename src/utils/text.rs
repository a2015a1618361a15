//! Document text extraction.

use scraper::{ElementRef, Html, Node};

/// Elements whose text content is code or markup rather than page copy.
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

fn is_non_visible_element(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|e| NON_VISIBLE_ELEMENTS.contains(&e.name()))
}

/// Every text node in the document, script and style bodies included.
pub fn all_text_nodes(document: &Html) -> impl Iterator<Item = &str> {
    document.root_element().text()
}

/// Concatenated text a reader would see: script, style, template and noscript
/// bodies are skipped.
pub fn visible_text(document: &Html) -> String {
    let root: ElementRef<'_> = document.root_element();
    let mut out = String::new();
    for node in root.descendants() {
        if let Some(text) = node.value().as_text() {
            if !node.ancestors().any(|a| is_non_visible_element(a.value())) {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
        }
    }
    out
}

/// Joins whitespace-separated words with single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
