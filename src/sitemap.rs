//! Sitemap probe.
//!
//! Fetches `/sitemap.xml` at the site root and counts the distinct `<loc>`
//! entries. Works for plain sitemaps and sitemap indexes alike.

use std::collections::HashSet;

use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use url::Url;

use crate::config::{SITEMAP_PATH, SITEMAP_TIMEOUT};
use crate::error_handling::describe_reqwest_error;
use crate::models::{Probe, SitemapSummary};

/// Reason reported for a missing sitemap or a non-2xx answer.
pub const SITEMAP_NOT_FOUND: &str = "Sitemap not found or inaccessible";

// Local name, so <sm:loc> matches as well
fn is_loc(name: &[u8]) -> bool {
    name == b"loc"
}

/// Counts distinct `<loc>` values in a sitemap document.
///
/// The body must be a single well-formed XML element tree. Comments are
/// skipped and CDATA sections inside `<loc>` are read as text.
///
/// # Errors
///
/// Returns a description when the body is not XML or is malformed.
pub fn count_sitemap_locs(body: &str) -> Result<usize, String> {
    let trimmed = body.trim_start_matches('\u{feff}').trim_start();
    if !trimmed.starts_with('<') {
        return Err("document is not XML".to_string());
    }
    let head: String = trimmed.chars().take(64).collect::<String>().to_lowercase();
    if head.starts_with("<!doctype html") || head.starts_with("<html") {
        return Err("received an HTML page instead of XML".to_string());
    }

    let mut reader = Reader::from_str(trimmed);
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut current_loc: Option<String> = None;
    let mut locs: HashSet<String> = HashSet::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("malformed XML at byte {}: {e}", reader.buffer_position()))?;
        match event {
            Event::Start(start) => {
                if depth == 0 && root_seen {
                    return Err("content after the document element".to_string());
                }
                root_seen = true;
                depth += 1;
                if is_loc(start.local_name().as_ref()) {
                    current_loc = Some(String::new());
                }
            }
            Event::Empty(_) => {
                if depth == 0 {
                    if root_seen {
                        return Err("content after the document element".to_string());
                    }
                    root_seen = true;
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| format!("malformed XML: {e}"))?;
                if depth == 0 {
                    if !text.trim().is_empty() {
                        return Err("text outside the document element".to_string());
                    }
                } else if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                if is_loc(end.local_name().as_ref()) {
                    if let Some(loc) = current_loc.take() {
                        let loc = loc.trim();
                        if !loc.is_empty() {
                            locs.insert(loc.to_string());
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err("document has no root element".to_string());
    }
    if depth != 0 {
        return Err(format!("unexpected end of document with {depth} unclosed element(s)"));
    }
    Ok(locs.len())
}

/// `/sitemap.xml` on the same scheme, host and port as `page_url`.
pub fn sitemap_url(page_url: &Url) -> Result<Url, url::ParseError> {
    page_url.join(SITEMAP_PATH)
}

/// Fetches and summarizes the site's sitemap. Never fails the record.
pub async fn probe_sitemap(client: &reqwest::Client, page_url: &Url) -> Probe<SitemapSummary> {
    let url = match sitemap_url(page_url) {
        Ok(url) => url,
        Err(e) => return Probe::Unavailable(format!("Sitemap Error: {e}")),
    };
    debug!("Fetching sitemap {url}");

    let response = match client.get(url.clone()).timeout(SITEMAP_TIMEOUT).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Sitemap request to {url} failed: {}", describe_reqwest_error(&e));
            return Probe::Unavailable(format!("Sitemap Error: {}", describe_reqwest_error(&e)));
        }
    };

    if !response.status().is_success() {
        debug!("Sitemap {url} answered {}", response.status());
        return Probe::Unavailable(SITEMAP_NOT_FOUND.to_string());
    }

    let body = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Probe::Unavailable(format!("Sitemap Error: {}", describe_reqwest_error(&e)))
        }
    };

    match count_sitemap_locs(&String::from_utf8_lossy(&body)) {
        Ok(url_count) => Probe::Available(SitemapSummary {
            url_count,
            size_bytes: body.len(),
        }),
        Err(reason) => {
            debug!("Sitemap {url} unusable: {reason}");
            Probe::Unavailable(format!("Sitemap Error: {reason}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_distinct_locs() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
            <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
              <url><loc>https://example.com/</loc></url>
              <url><loc> https://example.com/about </loc></url>
              <url><loc>https://example.com/</loc></url>
            </urlset>"#;
        assert_eq!(count_sitemap_locs(body), Ok(2));
    }

    #[test]
    fn test_namespace_prefixed_locs() {
        let body = r#"<sm:sitemapindex xmlns:sm="http://www.sitemaps.org/schemas/sitemap/0.9">
            <sm:sitemap><sm:loc>https://example.com/a.xml</sm:loc></sm:sitemap>
            <sm:sitemap><sm:loc>https://example.com/b.xml</sm:loc></sm:sitemap>
            </sm:sitemapindex>"#;
        assert_eq!(count_sitemap_locs(body), Ok(2));
    }

    #[test]
    fn test_empty_urlset() {
        assert_eq!(count_sitemap_locs("<urlset></urlset>"), Ok(0));
    }

    #[test]
    fn test_truncated_document_is_rejected() {
        assert!(count_sitemap_locs("<urlset><url><loc>https://a.example/</loc></url>").is_err());
    }

    #[test]
    fn test_mismatched_tags_are_rejected() {
        assert!(count_sitemap_locs("<urlset><url><loc>https://a.example/</url></loc></urlset>")
            .is_err());
    }

    #[test]
    fn test_commented_locs_are_skipped() {
        let body = r#"<urlset>
            <!-- <url><loc>https://example.com/old</loc></url> -->
            <url><loc><![CDATA[https://example.com/new]]></loc></url>
            </urlset>"#;
        assert_eq!(count_sitemap_locs(body), Ok(1));
    }

    #[test]
    fn test_non_xml_body() {
        assert!(count_sitemap_locs("User-agent: *").is_err());
        assert!(count_sitemap_locs("<!DOCTYPE html><html><body>404</body></html>").is_err());
    }

    #[test]
    fn test_sitemap_url_uses_site_root() {
        let page = Url::parse("http://example.com:8080/blog/post?id=1").expect("valid url");
        assert_eq!(
            sitemap_url(&page).expect("joins").as_str(),
            "http://example.com:8080/sitemap.xml"
        );
    }
}
