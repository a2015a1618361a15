//! Signal extraction from a fetched page.
//!
//! Every classifier is a pure function of the parsed document, the response
//! headers or the page URL, plus the immutable [`SignatureTables`]. The two
//! classifiers that need network access live in [`crate::tls`] and
//! [`crate::sitemap`] and return [`Probe`] values instead.

mod content;
mod headers;
mod markup;
mod tables;

use scraper::Html;

use crate::fetch::FetchedPage;
use crate::fingerprint::{PageEvidence, TechDetector};
use crate::models::{
    HeaderFacts, InteractiveCounts, PerformanceMetrics, Probe, ScriptStyleCounts, SiteSignals,
    SitemapSummary, TechStack,
};
use crate::utils::{all_text_nodes, visible_text};

pub use content::{classify_content, detect_login_page, text_preview};
pub use headers::{count_cookies, detect_cloud_provider, extract_header_facts};
pub use markup::{
    collect_markup_evidence, count_ajax_usage, count_deprecated_features, count_external_apis,
    count_interactive_elements, count_scripts_and_styles, detect_cms, extract_title,
};
pub use tables::{KeywordSet, PlatformSignature, SignatureTables, DEFAULT_CONTENT_CATEGORY};

/// Every signal that can be computed from the page alone.
#[derive(Debug, Clone, PartialEq)]
pub struct PageClassification {
    pub title: Option<String>,
    pub technology_stack: TechStack,
    pub cms_platforms: Vec<String>,
    pub performance: PerformanceMetrics,
    pub login_page_detected: bool,
    pub script_and_style_counts: ScriptStyleCounts,
    pub interactive_elements: InteractiveCounts,
    pub ajax_usage_count: usize,
    pub external_api_count: usize,
    pub cloud_provider: Option<String>,
    pub headers: HeaderFacts,
    pub content_categories: Vec<String>,
    pub deprecated_feature_count: usize,
    pub cookie_count: usize,
    pub text_preview: String,
    pub html_size_bytes: usize,
}

impl PageClassification {
    /// Completes the record with the results of the network probes.
    pub fn into_signals(
        self,
        ssl_certificate_age_years: Probe<i64>,
        sitemap: Probe<SitemapSummary>,
    ) -> SiteSignals {
        SiteSignals {
            title: self.title,
            technology_stack: self.technology_stack,
            cms_platforms: self.cms_platforms,
            ssl_certificate_age_years,
            performance: self.performance,
            login_page_detected: self.login_page_detected,
            script_and_style_counts: self.script_and_style_counts,
            interactive_elements: self.interactive_elements,
            ajax_usage_count: self.ajax_usage_count,
            external_api_count: self.external_api_count,
            cloud_provider: self.cloud_provider,
            headers: self.headers,
            sitemap,
            content_categories: self.content_categories,
            deprecated_feature_count: self.deprecated_feature_count,
            cookie_count: self.cookie_count,
            text_preview: self.text_preview,
            html_size_bytes: self.html_size_bytes,
        }
    }
}

/// Parses the page and runs every pure classifier over it.
///
/// The parsed document is dropped before returning; `scraper::Html` is not
/// `Send` and must not be held across an await point.
pub fn classify_page(
    page: &FetchedPage,
    tables: &SignatureTables,
    detector: &dyn TechDetector,
) -> PageClassification {
    let document = Html::parse_document(&page.body);
    let text = visible_text(&document);
    let full_text = all_text_nodes(&document).collect::<Vec<_>>().join(" ");

    let mut evidence = PageEvidence::from_headers(&page.headers);
    collect_markup_evidence(&document, &page.body, &mut evidence);

    PageClassification {
        title: extract_title(&document),
        technology_stack: detector.detect(&evidence),
        cms_platforms: detect_cms(&document, tables),
        performance: PerformanceMetrics {
            elapsed_seconds: page.elapsed.as_secs_f64(),
            http_status: page.status.as_u16(),
        },
        login_page_detected: detect_login_page(&page.body, tables),
        script_and_style_counts: count_scripts_and_styles(&document),
        interactive_elements: count_interactive_elements(&document, tables),
        ajax_usage_count: count_ajax_usage(&document, tables),
        external_api_count: count_external_apis(&document, &page.url),
        cloud_provider: detect_cloud_provider(&page.headers, tables),
        headers: extract_header_facts(&page.headers),
        content_categories: classify_content(&full_text, tables),
        deprecated_feature_count: count_deprecated_features(&document, tables),
        cookie_count: count_cookies(&page.headers),
        text_preview: text_preview(&text),
        html_size_bytes: page.body.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::RulesetDetector;
    use reqwest::header::{HeaderMap, HeaderValue, SERVER};
    use reqwest::StatusCode;
    use std::time::Duration;
    use url::Url;

    fn page(body: &str) -> FetchedPage {
        let url = Url::parse("https://shop.example.com/").expect("valid url");
        let mut headers = HeaderMap::new();
        headers.insert(SERVER, HeaderValue::from_static("cloudflare"));
        FetchedPage {
            url: url.clone(),
            final_url: url,
            status: StatusCode::OK,
            headers,
            body: body.to_string(),
            elapsed: Duration::from_millis(250),
        }
    }

    #[test]
    fn test_classify_page_populates_every_signal() {
        let body = r#"<html><head><title>Example Shop</title>
            <script src="https://cdn.jsdelivr.net/npm/vue.min.js"></script>
            <link rel="stylesheet" href="/main.css"></head>
            <body><form><input type="password"><button>Log in</button></form>
            <p>Visit our store</p></body></html>"#;
        let detector = RulesetDetector::builtin();
        let result = classify_page(&page(body), &SignatureTables::default(), &detector);

        assert_eq!(result.title.as_deref(), Some("Example Shop"));
        assert_eq!(result.cloud_provider.as_deref(), Some("Cloudflare"));
        assert!(result.login_page_detected);
        assert_eq!(result.script_and_style_counts.external_scripts, 1);
        assert_eq!(result.script_and_style_counts.stylesheets, 1);
        assert_eq!(result.interactive_elements.typed_inputs, 1);
        assert_eq!(result.external_api_count, 1);
        assert_eq!(result.content_categories, vec!["E-commerce".to_string()]);
        assert_eq!(result.cookie_count, 1);
        assert_eq!(result.performance.http_status, 200);
        assert_eq!(result.html_size_bytes, body.len());
        assert!(result.text_preview.starts_with("Example Shop"));
        assert_eq!(
            result.technology_stack.get("cdn"),
            Some(&vec!["Cloudflare".to_string(), "jsDelivr".to_string()])
        );
        assert!(result.technology_stack.contains_key("javascript-frameworks"));
    }

    #[test]
    fn test_content_categories_read_script_text() {
        let detector = RulesetDetector::builtin();
        let result = classify_page(
            &page("<p>plain</p><script>var cart = [];</script>"),
            &SignatureTables::default(),
            &detector,
        );
        assert_eq!(result.content_categories, vec!["E-commerce".to_string()]);
        assert_eq!(result.text_preview, "plain");
    }

    #[test]
    fn test_external_apis_use_requested_url() {
        let mut redirected = page(r#"<script src="https://shop.example.com/app.js"></script>"#);
        redirected.final_url = Url::parse("https://www.example.com/").expect("valid url");
        let detector = RulesetDetector::builtin();
        let result = classify_page(&redirected, &SignatureTables::default(), &detector);
        assert_eq!(result.external_api_count, 0);
    }

    #[test]
    fn test_into_signals_carries_probes() {
        let detector = RulesetDetector::builtin();
        let classification = classify_page(
            &page("<p>plain</p>"),
            &SignatureTables::default(),
            &detector,
        );
        let signals = classification.into_signals(
            Probe::Available(4),
            Probe::Unavailable("Sitemap not found or inaccessible".to_string()),
        );
        assert_eq!(signals.ssl_certificate_age_years, Probe::Available(4));
        assert!(!signals.sitemap.is_available());
        assert_eq!(signals.content_categories, vec!["General Information".to_string()]);
    }
}
