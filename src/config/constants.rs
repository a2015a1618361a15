//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including timeouts, size limits, and the layout of the text report.

use std::time::Duration;

/// Default page fetch timeout in seconds.
///
/// This is also the threshold used by the late size check: a fetch whose own
/// elapsed time exceeds it is relabeled as "too large" after classification.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Network operation timeouts for the certificate probe
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 30;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 30;
/// Port used for the direct certificate probe
pub const TLS_PROBE_PORT: u16 = 443;

/// Timeout for the sitemap fetch.
pub const SITEMAP_TIMEOUT: Duration = Duration::from_secs(30);
/// Path of the sitemap relative to the site root.
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (10MB)
/// Bodies larger than this are truncated before parsing
pub const MAX_RESPONSE_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Number of characters of page text kept for the report preview.
pub const TEXT_PREVIEW_CHARS: usize = 250;

// Report layout
/// Prefix of the report file name; a `YYYYMMDD_HHMMSS` timestamp and `.txt` follow.
pub const REPORT_FILE_PREFIX: &str = "website_info_output_";
/// Timestamp format embedded in the report file name.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Divider written after every record (`-*` repeated 16 times).
pub const REPORT_DIVIDER: &str = "-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*";
/// Placeholder rendered for absent header values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Error text used when the late size check relabels a record.
pub const SIZE_THRESHOLD_MESSAGE: &str =
    "Sorry, this website is too large for this script. Please assess manually.";

/// Prompt printed before reading URLs interactively.
pub const INTERACTIVE_PROMPT: &str =
    "Enter URLs separated by line. Submit an empty line to run the script.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_is_sixteen_pairs() {
        assert_eq!(REPORT_DIVIDER.len(), 32);
        assert_eq!(REPORT_DIVIDER, "-*".repeat(16));
    }
}
