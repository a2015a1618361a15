//! Plain-text report rendering.
//!
//! One block per record, in input order. A failure block holds the URL and
//! the error line; a success block holds four labelled sections. Every block
//! ends with the divider line.

use std::fmt::Write as _;

use crate::config::{NOT_AVAILABLE, REPORT_DIVIDER};
use crate::models::{Outcome, Probe, SiteRecord, SiteSignals, SitemapSummary, TechStack};

const NO_TITLE: &str = "No title found";
const NO_CLOUD_PROVIDER: &str = "Cloud Provider Not Detected";
const NONE: &str = "None";

/// `category: a, b; category2: c`, or `None` for an empty stack.
pub fn format_tech_stack(stack: &TechStack) -> String {
    if stack.is_empty() {
        return NONE.to_string();
    }
    stack
        .iter()
        .map(|(category, products)| format!("{}: {}", category, products.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_sitemap(sitemap: &Probe<SitemapSummary>) -> String {
    match sitemap {
        Probe::Available(summary) => format!(
            "Number of URLs in Sitemap: {} ({} bytes)",
            summary.url_count, summary.size_bytes
        ),
        Probe::Unavailable(reason) => reason.clone(),
    }
}

fn format_ssl_age(age: &Probe<i64>) -> String {
    match age {
        Probe::Available(years) => format!("{years} years"),
        Probe::Unavailable(_) => NOT_AVAILABLE.to_string(),
    }
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn sections(url: &str, s: &SiteSignals) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    vec![
        (
            "Basics",
            vec![
                ("URL", url.to_string()),
                ("Title", s.title.clone().unwrap_or_else(|| NO_TITLE.to_string())),
                ("Website Purpose Analysis", s.content_categories.join(", ")),
                ("First 250 Characters", s.text_preview.clone()),
                ("HTML Size in Bytes", s.html_size_bytes.to_string()),
            ],
        ),
        (
            "Tech",
            vec![
                ("Tech Stack", format_tech_stack(&s.technology_stack)),
                (
                    "Cloud Provider",
                    s.cloud_provider
                        .clone()
                        .unwrap_or_else(|| NO_CLOUD_PROVIDER.to_string()),
                ),
                ("External APIs Count", s.external_api_count.to_string()),
                (
                    "Detected CMS/SaaS Platforms",
                    if s.cms_platforms.is_empty() {
                        NONE.to_string()
                    } else {
                        s.cms_platforms.join(", ")
                    },
                ),
            ],
        ),
        (
            "Features",
            vec![
                (
                    "Login Page Detected",
                    if s.login_page_detected { "Yes" } else { "No" }.to_string(),
                ),
                ("Auth-required", or_na(&s.headers.www_authenticate)),
                ("Sitemap Size Estimate", format_sitemap(&s.sitemap)),
            ],
        ),
        (
            "Jank",
            vec![
                ("SSL Age Start", format_ssl_age(&s.ssl_certificate_age_years)),
                ("Performance Metrics", s.performance.to_string()),
                (
                    "Script and Stylesheet Count",
                    s.script_and_style_counts.to_string(),
                ),
                (
                    "Interactive Elements Count",
                    s.interactive_elements.to_string(),
                ),
                ("AJAX Requests Count", s.ajax_usage_count.to_string()),
                ("Server Header", or_na(&s.headers.server)),
                (
                    "X-Powered-By (server-side-framework)",
                    or_na(&s.headers.powered_by),
                ),
                ("Via Header (proxies-gateways)", or_na(&s.headers.via)),
                ("Proxy-Authorization", or_na(&s.headers.proxy_authorization)),
                ("Deprecated Features", s.deprecated_feature_count.to_string()),
                ("Cookies Count", s.cookie_count.to_string()),
            ],
        ),
    ]
}

/// Renders one record as a report block, divider included.
pub fn render_record(record: &SiteRecord) -> String {
    let mut out = format!("URL: {}\n", record.url);
    match &record.outcome {
        Outcome::Failure(error) => {
            out.push_str(error);
            out.push('\n');
        }
        Outcome::Success(signals) => {
            let mut body = String::new();
            for (section, fields) in sections(&record.url, signals) {
                let _ = writeln!(body, "{section}:");
                for (label, value) in fields {
                    let _ = writeln!(body, "\t{label}: {value}");
                }
                body.push('\n');
            }
            out.push_str(body.trim());
            out.push_str("\n\n");
        }
    }
    out.push_str(REPORT_DIVIDER);
    out.push('\n');
    out
}

/// Renders every record in order.
pub fn render_report(records: &[SiteRecord]) -> String {
    records.iter().map(render_record).collect()
}
