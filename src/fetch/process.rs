//! Per-URL pipeline: normalize, fetch, classify, probe.

use log::{debug, info, warn};

use crate::app::{ensure_scheme, normalize_url};
use crate::classify::classify_page;
use crate::config::SIZE_THRESHOLD_MESSAGE;
use crate::error_handling::{update_error_stats, ErrorType, InfoType, WarningType};
use crate::models::{SiteRecord, SiteSignals};
use crate::sitemap::probe_sitemap;
use crate::tls::ssl_certificate_age;

use super::context::ProcessingContext;
use super::page::{fetch_page, FetchedPage};

/// Builds the record for one input URL.
///
/// Fetch failures produce a failure record; probe failures stay inside the
/// record as `Probe::Unavailable`. Nothing here aborts the run.
///
/// After classification the fetch time is compared with the configured
/// timeout. A page that took longer is relabeled with the size-threshold
/// message even though all signals were already computed.
pub async fn process_url(ctx: &ProcessingContext, raw_url: &str) -> SiteRecord {
    let url = match normalize_url(raw_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Skipping {raw_url}: {e}");
            update_error_stats(&ctx.stats, &e);
            return SiteRecord::failure(ensure_scheme(raw_url), e.to_string());
        }
    };
    let record_url = url.to_string();

    let page = match fetch_page(&ctx.client, &url).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Failed to fetch {record_url}: {e}");
            update_error_stats(&ctx.stats, &e);
            return SiteRecord::failure(record_url, e.to_string());
        }
    };
    if page.final_url != page.url {
        ctx.stats.increment_info(InfoType::HttpRedirect);
    }

    let signals = gather_signals(ctx, &page).await;
    record_probe_warnings(ctx, &signals);

    if page.elapsed > ctx.timeout {
        info!(
            "{record_url} took {:.2}s (limit {}s); marking as too large",
            page.elapsed.as_secs_f64(),
            ctx.timeout.as_secs()
        );
        ctx.stats.increment_error(ErrorType::SizeThresholdExceeded);
        return SiteRecord::failure(record_url, SIZE_THRESHOLD_MESSAGE);
    }

    SiteRecord::success(record_url, signals)
}

async fn gather_signals(ctx: &ProcessingContext, page: &FetchedPage) -> SiteSignals {
    // The parsed document lives only inside classify_page
    let classification = classify_page(page, &ctx.tables, ctx.detector.as_ref());
    if !classification.cms_platforms.is_empty() {
        ctx.stats.increment_info(InfoType::CmsDetected);
    }

    let host = page.url.host_str().unwrap_or_default();
    let ssl_age = ssl_certificate_age(host).await;
    let sitemap = probe_sitemap(&ctx.client, &page.final_url).await;
    debug!("Probes for {host}: ssl={ssl_age:?} sitemap={sitemap:?}");

    classification.into_signals(ssl_age, sitemap)
}

fn record_probe_warnings(ctx: &ProcessingContext, signals: &SiteSignals) {
    if !signals.ssl_certificate_age_years.is_available() {
        ctx.stats
            .increment_warning(WarningType::SslCertificateUnavailable);
    }
    if !signals.sitemap.is_available() {
        ctx.stats.increment_warning(WarningType::SitemapUnavailable);
    }
    if signals.title.is_none() {
        ctx.stats.increment_warning(WarningType::MissingTitle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::classify::SignatureTables;
    use crate::error_handling::ProcessingStats;
    use crate::fingerprint::RulesetDetector;

    fn context_with_timeout(timeout: Duration) -> ProcessingContext {
        ProcessingContext::new(
            Arc::new(reqwest::Client::new()),
            Arc::new(SignatureTables::default()),
            Arc::new(RulesetDetector::builtin()),
            Arc::new(ProcessingStats::new()),
            timeout,
        )
    }

    fn context() -> ProcessingContext {
        context_with_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_invalid_url_becomes_failure_record() {
        let ctx = context();
        let record = process_url(&ctx, "exa mple.com").await;
        assert_eq!(record.url, "https://exa mple.com");
        assert!(record.signals().is_none());
        assert!(record
            .error()
            .is_some_and(|e| e.starts_with("Invalid URL")));
        assert_eq!(ctx.stats.get_error_count(ErrorType::InvalidUrl), 1);
    }

    #[tokio::test]
    async fn test_unreachable_host_becomes_failure_record() {
        let ctx = context();
        let record = process_url(&ctx, "http://127.0.0.1:1").await;
        assert!(record.signals().is_none());
        assert!(record.error().is_some_and(|e| !e.is_empty()));
        assert_eq!(ctx.stats.total_errors(), 1);
    }

    #[tokio::test]
    async fn test_slow_page_is_relabeled_after_classification() {
        use httptest::{matchers::*, responders::*, Expectation, Server};

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/")).respond_with(
                status_code(200).body("<html><title>Slow</title><p>shop</p></html>"),
            ),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/sitemap.xml"))
                .respond_with(status_code(404)),
        );

        let ctx = context_with_timeout(Duration::ZERO);
        let record = process_url(&ctx, &format!("http://{}/", server.addr())).await;

        assert!(record.signals().is_none());
        assert_eq!(record.error(), Some(SIZE_THRESHOLD_MESSAGE));
        assert_eq!(
            ctx.stats.get_error_count(ErrorType::SizeThresholdExceeded),
            1
        );
        // Probes still ran before the relabel
        assert_eq!(
            ctx.stats.get_warning_count(WarningType::SitemapUnavailable),
            1
        );
    }
}
