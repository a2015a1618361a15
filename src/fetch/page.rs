//! Page download.

use std::time::{Duration, Instant};

use log::debug;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;

use super::request::RequestHeaders;

/// A successfully downloaded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: Url,
    /// URL after redirects
    pub final_url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Body decoded as text, truncated to `MAX_RESPONSE_BODY_SIZE` bytes
    pub body: String,
    /// Time from sending the request to the end of the body
    pub elapsed: Duration,
}

/// Fetches `url` with a single GET.
///
/// Non-2xx responses are errors. The body is read chunk by chunk and cut off
/// at `MAX_RESPONSE_BODY_SIZE`; an oversized body is truncated, not rejected.
///
/// # Errors
///
/// Returns `FetchError::Request` for connection, timeout, status and body
/// read failures.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<FetchedPage, FetchError> {
    let start = Instant::now();
    let request = RequestHeaders::apply_to_request_builder(client.get(url.clone()));
    let mut response = request.send().await?.error_for_status()?;

    let final_url = response.url().clone();
    if &final_url != url {
        debug!("Final url after redirects: {final_url}");
    }
    let status = response.status();
    let headers = response.headers().clone();

    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = MAX_RESPONSE_BODY_SIZE - buf.len();
        if chunk.len() > remaining {
            buf.extend_from_slice(&chunk[..remaining]);
            debug!(
                "Body of {} exceeds {} bytes; truncating",
                final_url, MAX_RESPONSE_BODY_SIZE
            );
            break;
        }
        buf.extend_from_slice(&chunk);
    }
    let elapsed = start.elapsed();

    Ok(FetchedPage {
        url: url.clone(),
        final_url,
        status,
        headers,
        body: String::from_utf8_lossy(&buf).into_owned(),
        elapsed,
    })
}
