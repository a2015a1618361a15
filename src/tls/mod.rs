//! SSL certificate age probe.
//!
//! Connects to port 443 of the host, completes a rustls handshake against the
//! webpki root store and reads `notBefore` from the leaf certificate with
//! `x509-parser`. Every failure ends up as `Probe::Unavailable`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use log::{debug, warn};
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS, TLS_PROBE_PORT};
use crate::models::Probe;

/// Whole years from `issued` to `today`, one less if this year's
/// anniversary has not been reached.
pub fn certificate_age_years(issued: NaiveDate, today: NaiveDate) -> i64 {
    let before_anniversary = (today.month(), today.day()) < (issued.month(), issued.day());
    i64::from(today.year() - issued.year()) - i64::from(before_anniversary)
}

fn client_config() -> Result<ClientConfig> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()
    .context("Unsupported TLS protocol configuration")?
    .with_root_certificates(root_store)
    .with_no_client_auth();
    Ok(config)
}

/// Issue date (`notBefore`) of the leaf certificate served by `host:port`.
async fn fetch_certificate_issue_date(host: &str, port: u16) -> Result<NaiveDate> {
    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| anyhow!("Invalid server name {host}: {e}"))?;

    let sock = tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((host, port)),
    )
    .await
    .map_err(|_| {
        anyhow!("TCP connection timeout for {host}:{port} ({TCP_CONNECT_TIMEOUT_SECS}s)")
    })?
    .with_context(|| format!("Failed to connect to {host}:{port}"))?;

    let connector = TlsConnector::from(Arc::new(client_config()?));
    let tls_stream = tokio::time::timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    .map_err(|_| anyhow!("TLS handshake timeout for {host} ({TLS_HANDSHAKE_TIMEOUT_SECS}s)"))?
    .with_context(|| format!("TLS connection failed for {host}"))?;

    let leaf = tls_stream
        .get_ref()
        .1
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| anyhow!("No certificate presented by {host}"))?;

    let (_, cert) = x509_parser::parse_x509_certificate(leaf.as_ref())
        .map_err(|e| anyhow!("Failed to parse certificate for {host}: {e}"))?;
    let not_before = cert.validity().not_before.timestamp();
    let issued = DateTime::from_timestamp(not_before, 0)
        .ok_or_else(|| anyhow!("Certificate notBefore out of range: {not_before}"))?;
    Ok(issued.date_naive())
}

/// Probes `host:port` and returns the certificate age in whole years.
pub async fn certificate_age_at(host: &str, port: u16) -> Probe<i64> {
    debug!("Probing certificate of {host}:{port}");
    match fetch_certificate_issue_date(host, port).await {
        Ok(issued) => {
            let age = certificate_age_years(issued, Local::now().date_naive());
            debug!("Certificate of {host} issued {issued} ({age} years)");
            Probe::Available(age)
        }
        Err(e) => {
            warn!("SSL certificate unavailable for {host}: {e:#}");
            Probe::Unavailable(format!("{e:#}"))
        }
    }
}

/// Certificate age of `host` on the standard HTTPS port.
///
/// The probe always targets port 443, also for pages fetched over plain http.
pub async fn ssl_certificate_age(host: &str) -> Probe<i64> {
    certificate_age_at(host, TLS_PROBE_PORT).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_age_on_and_after_anniversary() {
        assert_eq!(certificate_age_years(date(2020, 3, 15), date(2023, 3, 15)), 3);
        assert_eq!(certificate_age_years(date(2020, 3, 15), date(2023, 12, 1)), 3);
    }

    #[test]
    fn test_age_before_anniversary() {
        assert_eq!(certificate_age_years(date(2020, 3, 15), date(2023, 3, 14)), 2);
        assert_eq!(certificate_age_years(date(2024, 11, 2), date(2025, 1, 10)), 0);
    }

    #[test]
    fn test_age_same_day_issue() {
        assert_eq!(certificate_age_years(date(2025, 6, 1), date(2025, 6, 1)), 0);
    }

    #[tokio::test]
    async fn test_invalid_host_is_unavailable() {
        let probe = certificate_age_at("", 443).await;
        assert!(!probe.is_available());
    }
}
