//! site_recon library: per-site reconnaissance reports
//!
//! Fetches each input URL once, extracts a fixed set of signals from the page
//! (platform, hosting provider, content category, login forms, deprecated
//! markup, timing, certificate age, sitemap size, ...) and writes one plain-text
//! report per run.
//!
//! # Example
//!
//! ```no_run
//! use site_recon::{run_recon_for, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     timeout_seconds: 30,
//!     ..Default::default()
//! };
//! let report = run_recon_for(&config, vec!["example.com".to_string()]).await?;
//! println!("{} sites, report at {}", report.total_urls, report.report_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. URLs are processed one after the
//! other, in input order.

mod app;
pub mod classify;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod fingerprint;
pub mod initialization;
pub mod models;
pub mod sitemap;
pub mod tls;
mod utils;

// Re-export public API
pub use app::{normalize_url, read_interactive_lines};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, ErrorType, FetchError, InitializationError, ProcessingStats,
    ReportError,
};
pub use fetch::{fetch_page, process_url, FetchedPage, ProcessingContext};
pub use models::{Outcome, Probe, SiteRecord, SiteSignals};
pub use run::{run_recon, run_recon_for, scan_urls, RunReport};

// Internal run module (contains the main processing loop)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use chrono::Local;
    use log::{debug, info};

    use crate::app::{prompt_for_urls, read_url_file};
    use crate::classify::SignatureTables;
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::export::write_report;
    use crate::fetch::{process_url, ProcessingContext};
    use crate::fingerprint::RulesetDetector;
    use crate::initialization::init_client;
    use crate::models::SiteRecord;

    /// Results of a run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of input URLs
        pub total_urls: usize,
        /// Records with a full set of signals
        pub successful: usize,
        /// Records holding only an error
        pub failed: usize,
        /// Path of the written report
        pub report_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Processes the URLs one by one, in order.
    pub async fn scan_urls(ctx: &ProcessingContext, urls: &[String]) -> Vec<SiteRecord> {
        let total = urls.len();
        let mut records = Vec::with_capacity(total);
        for (i, url) in urls.iter().enumerate() {
            println!("Processing {}/{}: {}", i + 1, total, url);
            let record = process_url(ctx, url).await;
            debug!(
                "Finished {} ({})",
                record.url,
                if record.signals().is_some() { "ok" } else { "failed" }
            );
            records.push(record);
        }
        records
    }

    /// Reads the input URLs (from `--file` or interactively) and runs them.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the HTTP client cannot
    /// be built, or the report cannot be written. Per-URL failures never end
    /// the run; they become failure records.
    pub async fn run_recon(config: Config) -> Result<RunReport> {
        let urls = match &config.file {
            Some(path) => read_url_file(path).await?,
            None => prompt_for_urls().await?,
        };
        run_recon_for(&config, urls).await
    }

    /// Runs the given URLs and writes the report into `config.output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the report
    /// cannot be written.
    pub async fn run_recon_for(config: &Config, urls: Vec<String>) -> Result<RunReport> {
        let started_at = Local::now();
        let start = Instant::now();

        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let stats = Arc::new(ProcessingStats::new());
        let ctx = ProcessingContext::new(
            Arc::new(client),
            Arc::new(SignatureTables::default()),
            Arc::new(RulesetDetector::builtin()),
            Arc::clone(&stats),
            Duration::from_secs(config.timeout_seconds),
        );

        println!("Processing {} URLs...", urls.len());
        let records = scan_urls(&ctx, &urls).await;

        let report_path = write_report(&records, &config.output_dir, started_at)
            .await
            .context("Failed to write report")?;

        let successful = records.iter().filter(|r| r.signals().is_some()).count();
        let report = RunReport {
            total_urls: records.len(),
            successful,
            failed: records.len() - successful,
            report_path,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        };
        info!(
            "Processed {} URLs ({} succeeded, {} failed) in {:.1}s",
            report.total_urls, report.successful, report.failed, report.elapsed_seconds
        );
        stats.log_summary();
        Ok(report)
    }
}
