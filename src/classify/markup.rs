//! Classifiers over the parsed document.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::fingerprint::PageEvidence;
use crate::models::{InteractiveCounts, ScriptStyleCounts};
use crate::utils::all_text_nodes;

use super::tables::SignatureTables;

// CSS selector strings
const ANY_ELEMENT_SELECTOR_STR: &str = "*";
const SCRIPT_SELECTOR_STR: &str = "script";
const SCRIPT_SRC_SELECTOR_STR: &str = "script[src]";
const STYLESHEET_SELECTOR_STR: &str = "link[rel~='stylesheet']";
const FORM_SELECTOR_STR: &str = "form";
const BUTTON_SELECTOR_STR: &str = "button";
const TYPED_INPUT_SELECTOR_STR: &str = "input[type]";
const TITLE_SELECTOR_STR: &str = "title";
const META_SELECTOR_STR: &str = "meta[name][content]";

static ANY_ELEMENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANY_ELEMENT_SELECTOR_STR)
        .expect("Failed to parse universal selector - this is a bug")
});

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SCRIPT_SELECTOR_STR).expect("Failed to parse script selector - this is a bug")
});

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SCRIPT_SRC_SELECTOR_STR)
        .expect("Failed to parse script src selector - this is a bug")
});

static STYLESHEET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(STYLESHEET_SELECTOR_STR)
        .expect("Failed to parse stylesheet selector - this is a bug")
});

static FORM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(FORM_SELECTOR_STR).expect("Failed to parse form selector - this is a bug")
});

static BUTTON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(BUTTON_SELECTOR_STR).expect("Failed to parse button selector - this is a bug")
});

static TYPED_INPUT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TYPED_INPUT_SELECTOR_STR)
        .expect("Failed to parse input selector - this is a bug")
});

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).expect("Failed to parse title selector - this is a bug")
});

static META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_SELECTOR_STR).expect("Failed to parse meta selector - this is a bug")
});

/// Platforms with at least one marker matching any text node, in table order.
pub fn detect_cms(document: &Html, tables: &SignatureTables) -> Vec<String> {
    let nodes: Vec<&str> = all_text_nodes(document).collect();
    tables
        .cms_platforms
        .iter()
        .filter(|platform| {
            platform
                .markers
                .iter()
                .any(|marker| nodes.iter().any(|node| marker.is_match(node)))
        })
        .map(|platform| platform.name.clone())
        .collect()
}

/// Deprecated elements plus occurrences of deprecated scripting APIs in the
/// document text.
///
/// API names are counted as plain substrings, so `eval` also counts inside
/// `medieval`. The count is an approximation.
pub fn count_deprecated_features(document: &Html, tables: &SignatureTables) -> usize {
    let deprecated_tags: HashSet<&str> =
        tables.deprecated_tags.iter().map(String::as_str).collect();
    let tag_count = document
        .select(&ANY_ELEMENT_SELECTOR)
        .filter(|el| deprecated_tags.contains(el.value().name()))
        .count();

    let text: String = all_text_nodes(document).collect();
    let api_count: usize = tables
        .deprecated_script_apis
        .iter()
        .map(|api| text.matches(api.as_str()).count())
        .sum();

    tag_count + api_count
}

pub fn count_scripts_and_styles(document: &Html) -> ScriptStyleCounts {
    ScriptStyleCounts {
        external_scripts: document.select(&SCRIPT_SRC_SELECTOR).count(),
        stylesheets: document.select(&STYLESHEET_SELECTOR).count(),
    }
}

pub fn count_interactive_elements(document: &Html, tables: &SignatureTables) -> InteractiveCounts {
    let typed_inputs = document
        .select(&TYPED_INPUT_SELECTOR)
        .filter(|el| {
            el.value().attr("type").is_some_and(|t| {
                tables
                    .tracked_input_types
                    .iter()
                    .any(|tracked| tracked.eq_ignore_ascii_case(t.trim()))
            })
        })
        .count();

    InteractiveCounts {
        forms: document.select(&FORM_SELECTOR).count(),
        buttons: document.select(&BUTTON_SELECTOR).count(),
        typed_inputs,
    }
}

/// `<script>` elements whose body mentions the AJAX marker.
pub fn count_ajax_usage(document: &Html, tables: &SignatureTables) -> usize {
    document
        .select(&SCRIPT_SELECTOR)
        .filter(|script| {
            script
                .text()
                .collect::<String>()
                .contains(tables.ajax_marker.as_str())
        })
        .count()
}

/// Distinct script sources whose network location differs from the page's.
///
/// The authority is taken from `src` as written, so relative sources have an
/// empty one and count as external. An explicit port is part of the
/// authority.
pub fn count_external_apis(document: &Html, page_url: &Url) -> usize {
    let page_netloc = netloc(page_url);

    document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|script| script.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .filter(|src| script_netloc(src) != page_netloc)
        .collect::<HashSet<_>>()
        .len()
}

fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Authority of a script reference; empty when the reference is relative.
fn script_netloc(src: &str) -> String {
    let parsed = if src.starts_with("//") {
        Url::parse(&format!("https:{src}"))
    } else {
        Url::parse(src)
    };
    parsed.map(|url| netloc(&url)).unwrap_or_default()
}

/// Text of the first `<title>`, trimmed; `None` when absent or blank.
pub fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Adds meta tags and script sources to header-derived fingerprint evidence.
pub fn collect_markup_evidence(document: &Html, body: &str, evidence: &mut PageEvidence) {
    let mut tags: HashMap<String, String> = HashMap::new();
    for el in document.select(&META_SELECTOR) {
        if let (Some(name), Some(content)) = (el.value().attr("name"), el.value().attr("content")) {
            tags.entry(name.to_ascii_lowercase())
                .or_insert_with(|| content.to_string());
        }
    }
    evidence.meta = tags;

    evidence.script_sources = document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|el| el.value().attr("src"))
        .map(str::to_string)
        .collect();
    evidence.html = body.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> SignatureTables {
        SignatureTables::default()
    }

    #[test]
    fn test_detect_cms_from_text_nodes() {
        let doc = Html::parse_document(
            "<html><body><p>Powered by WordPress</p>\
             <script>var base = '/wp-content/themes/x';</script></body></html>",
        );
        assert_eq!(detect_cms(&doc, &tables()), vec!["WordPress".to_string()]);
    }

    #[test]
    fn test_detect_cms_ignores_attributes() {
        let doc = Html::parse_document(r#"<link href="/wp-content/style.css" rel="stylesheet">"#);
        assert!(detect_cms(&doc, &tables()).is_empty());
    }

    #[test]
    fn test_detect_cms_is_monotonic() {
        let base = "<p>Built with Drupal and hosted on shopify.com</p>";
        let before = detect_cms(&Html::parse_document(base), &tables());

        let extended = format!("{base}<p>Joomla! site, Drupal again</p>");
        let after = detect_cms(&Html::parse_document(&extended), &tables());

        for platform in &before {
            assert!(after.contains(platform), "{platform} disappeared");
        }
        assert!(after.contains(&"Joomla".to_string()));
    }

    #[test]
    fn test_count_deprecated_features() {
        let doc = Html::parse_document(
            "<body><center>x</center><font>y</font><marquee>z</marquee>\
             <script>document.write('a'); alert(1);</script></body>",
        );
        // 3 tags + document.write + alert
        assert_eq!(count_deprecated_features(&doc, &tables()), 5);
    }

    #[test]
    fn test_count_scripts_and_styles() {
        let doc = Html::parse_document(
            r#"<head><script src="/a.js"></script><script>inline()</script>
               <link rel="stylesheet" href="/a.css"><link rel="icon" href="/f.ico">
               <link rel="alternate stylesheet" href="/b.css"></head>"#,
        );
        let counts = count_scripts_and_styles(&doc);
        assert_eq!(counts.external_scripts, 1);
        assert_eq!(counts.stylesheets, 2);
    }

    #[test]
    fn test_count_interactive_elements() {
        let doc = Html::parse_document(
            r#"<form><input type="text"><input type="PASSWORD"><input type="hidden">
               <input type="email"><input><button>Go</button></form>
               <form><input type="submit"></form>"#,
        );
        let counts = count_interactive_elements(&doc, &tables());
        assert_eq!(counts.forms, 2);
        assert_eq!(counts.buttons, 1);
        assert_eq!(counts.typed_inputs, 3);
    }

    #[test]
    fn test_count_ajax_usage() {
        let doc = Html::parse_document(
            "<script>var r = new XMLHttpRequest();</script>\
             <script>fetch('/api')</script>\
             <script>new XMLHttpRequest(); new XMLHttpRequest();</script>",
        );
        assert_eq!(count_ajax_usage(&doc, &tables()), 2);
    }

    #[test]
    fn test_count_external_apis() {
        let page = Url::parse("https://example.com/page").expect("valid url");
        let doc = Html::parse_document(
            r#"<script src="/local.js"></script>
               <script src="https://example.com/also-local.js"></script>
               <script src="https://cdn.example.net/lib.js"></script>
               <script src="https://cdn.example.net/lib.js"></script>
               <script src="//www.googletagmanager.com/gtm.js"></script>
               <script src="https://example.com:8443/other-port.js"></script>"#,
        );
        // /local.js, cdn.example.net, googletagmanager, :8443
        assert_eq!(count_external_apis(&doc, &page), 4);
    }

    #[test]
    fn test_relative_script_counts_as_external() {
        let page = Url::parse("https://example.com/").expect("valid url");
        let doc = Html::parse_document(
            r#"<script src="/a.js"></script><script src="https://cdn.other.net/x.js"></script>"#,
        );
        assert_eq!(count_external_apis(&doc, &page), 2);
    }

    #[test]
    fn test_same_authority_script_is_not_external() {
        let page = Url::parse("http://127.0.0.1:8080/shop").expect("valid url");
        let doc = Html::parse_document(
            r#"<script src="http://127.0.0.1:8080/app.js"></script>
               <script src="http://127.0.0.1/app.js"></script>"#,
        );
        assert_eq!(count_external_apis(&doc, &page), 1);
    }

    #[test]
    fn test_static_selectors_parse() {
        for selector in [
            &ANY_ELEMENT_SELECTOR,
            &SCRIPT_SELECTOR,
            &SCRIPT_SRC_SELECTOR,
            &STYLESHEET_SELECTOR,
            &FORM_SELECTOR,
            &BUTTON_SELECTOR,
            &TYPED_INPUT_SELECTOR,
            &TITLE_SELECTOR,
            &META_SELECTOR,
        ] {
            LazyLock::force(selector);
        }
    }

    #[test]
    fn test_extract_title() {
        let doc = Html::parse_document("<head><title>  Example Domain \n</title></head>");
        assert_eq!(extract_title(&doc), Some("Example Domain".to_string()));
        let untitled = Html::parse_document("<p>no title</p>");
        assert_eq!(extract_title(&untitled), None);
    }

    #[test]
    fn test_collect_markup_evidence() {
        let body = r#"<head><meta name="Generator" content="WordPress 6.4">
            <script src="/wp-includes/js/jquery.js"></script></head>"#;
        let doc = Html::parse_document(body);
        let mut evidence = PageEvidence::default();
        collect_markup_evidence(&doc, body, &mut evidence);
        assert_eq!(
            evidence.meta.get("generator").map(String::as_str),
            Some("WordPress 6.4")
        );
        assert_eq!(evidence.script_sources, vec!["/wp-includes/js/jquery.js"]);
        assert_eq!(evidence.html, body);
    }
}
