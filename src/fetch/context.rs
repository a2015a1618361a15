//! Processing context for URL processing operations.

use std::sync::Arc;
use std::time::Duration;

use crate::classify::SignatureTables;
use crate::error_handling::ProcessingStats;
use crate::fingerprint::TechDetector;

/// Shared resources needed to turn a URL into a `SiteRecord`.
#[derive(Clone)]
pub struct ProcessingContext {
    /// HTTP client for page and sitemap requests
    pub client: Arc<reqwest::Client>,
    /// Lookup tables for the classifiers
    pub tables: Arc<SignatureTables>,
    pub detector: Arc<dyn TechDetector>,
    pub stats: Arc<ProcessingStats>,
    /// Configured fetch timeout, also the threshold of the late size check
    pub timeout: Duration,
}

impl ProcessingContext {
    pub fn new(
        client: Arc<reqwest::Client>,
        tables: Arc<SignatureTables>,
        detector: Arc<dyn TechDetector>,
        stats: Arc<ProcessingStats>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            tables,
            detector,
            stats,
            timeout,
        }
    }
}
