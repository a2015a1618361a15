//! Per-site record types.
//!
//! A `SiteRecord` is either a full success or a failure; the `Outcome` enum makes
//! a partially populated record unrepresentable.

use std::collections::BTreeMap;
use std::fmt;

/// Result of a classifier that performs I/O.
///
/// `Unavailable` carries the reason, so "the site has no sitemap" and "the
/// sitemap request timed out" stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe<T> {
    /// The probe succeeded.
    Available(T),
    /// The probe failed; the string explains why.
    Unavailable(String),
}

impl<T> Probe<T> {
    /// Returns the value if the probe succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Probe::Available(v) => Some(v),
            Probe::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Probe::Available(_))
    }
}

/// Technology fingerprint: category (e.g. "web-servers") to product names.
pub type TechStack = BTreeMap<String, Vec<String>>;

/// Wall-clock fetch time paired with the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetrics {
    pub elapsed_seconds: f64,
    pub http_status: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStyleCounts {
    /// `<script>` elements with a `src` attribute
    pub external_scripts: usize,
    /// `<link rel="stylesheet">` elements
    pub stylesheets: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveCounts {
    pub forms: usize,
    pub buttons: usize,
    /// `<input>` elements whose type is one of the tracked input types
    pub typed_inputs: usize,
}

/// Response headers reported verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFacts {
    pub server: Option<String>,
    pub proxy_authorization: Option<String>,
    pub powered_by: Option<String>,
    pub via: Option<String>,
    pub www_authenticate: Option<String>,
}

/// What the sitemap probe found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitemapSummary {
    /// Distinct `<loc>` values
    pub url_count: usize,
    pub size_bytes: usize,
}

/// Every fact extracted from a successfully fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSignals {
    pub title: Option<String>,
    pub technology_stack: TechStack,
    pub cms_platforms: Vec<String>,
    pub ssl_certificate_age_years: Probe<i64>,
    pub performance: PerformanceMetrics,
    pub login_page_detected: bool,
    pub script_and_style_counts: ScriptStyleCounts,
    pub interactive_elements: InteractiveCounts,
    pub ajax_usage_count: usize,
    pub external_api_count: usize,
    pub cloud_provider: Option<String>,
    pub headers: HeaderFacts,
    pub sitemap: Probe<SitemapSummary>,
    pub content_categories: Vec<String>,
    pub deprecated_feature_count: usize,
    pub cookie_count: usize,
    pub text_preview: String,
    pub html_size_bytes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Box<SiteSignals>),
    Failure(String),
}

/// The result of processing one input URL.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRecord {
    /// Normalized URL (scheme included); identity of the record
    pub url: String,
    pub outcome: Outcome,
}

impl SiteRecord {
    pub fn success(url: impl Into<String>, signals: SiteSignals) -> Self {
        Self {
            url: url.into(),
            outcome: Outcome::Success(Box::new(signals)),
        }
    }

    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: Outcome::Failure(error.into()),
        }
    }

    pub fn signals(&self) -> Option<&SiteSignals> {
        match &self.outcome {
            Outcome::Success(signals) => Some(signals),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }
}

impl fmt::Display for PerformanceMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Response Time: {:.2} seconds, Status Code: {}",
            self.elapsed_seconds, self.http_status
        )
    }
}

impl fmt::Display for ScriptStyleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scripts: {}, Styles: {}",
            self.external_scripts, self.stylesheets
        )
    }
}

impl fmt::Display for InteractiveCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Forms: {}, Buttons: {}, Inputs: {}",
            self.forms, self.buttons, self.typed_inputs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_record_has_no_signals() {
        let record = SiteRecord::failure("https://example.invalid", "dns error");
        assert!(record.signals().is_none());
        assert_eq!(record.error(), Some("dns error"));
    }

    #[test]
    fn test_probe_value() {
        let ok: Probe<i64> = Probe::Available(3);
        let failed: Probe<i64> = Probe::Unavailable("refused".into());
        assert_eq!(ok.value(), Some(&3));
        assert!(failed.value().is_none());
        assert!(!failed.is_available());
    }

    #[test]
    fn test_display_of_counts() {
        let perf = PerformanceMetrics {
            elapsed_seconds: 0.456,
            http_status: 200,
        };
        assert_eq!(
            perf.to_string(),
            "Response Time: 0.46 seconds, Status Code: 200"
        );
        let inputs = InteractiveCounts {
            forms: 1,
            buttons: 2,
            typed_inputs: 3,
        };
        assert_eq!(inputs.to_string(), "Forms: 1, Buttons: 2, Inputs: 3");
    }
}
