//! URL validation and normalization.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Prefixes `https://` unless the input already names http or https.
pub fn ensure_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validates and normalizes a URL.
///
/// Adds the `https://` prefix if missing, then checks the length limit, the
/// syntax and that a host is present.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` with the reason when the URL is too long,
/// does not parse, or has no host.
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let normalized = ensure_scheme(raw);

    if normalized.len() > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(&normalized)
        .map_err(|e| FetchError::InvalidUrl(format!("{normalized}: {e}")))?;

    if parsed.host_str().unwrap_or_default().is_empty() {
        return Err(FetchError::InvalidUrl(format!("{normalized}: missing host")));
    }

    Ok(parsed)
}
