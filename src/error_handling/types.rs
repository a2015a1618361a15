//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fetch-fatal errors: any of these aborts classification for a URL and turns
/// its record into a failure.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input could not be turned into an http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, timeout, non-2xx status or body read failure.
    #[error("{}", describe_reqwest_error(.0))]
    Request(#[from] ReqwestError),
}

/// Errors raised while writing the report file.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The output directory does not exist or is not a directory.
    #[error("Output directory {0} does not exist")]
    MissingOutputDir(String),

    /// Writing the report failed.
    #[error("Failed to write report {path}: {source}")]
    Io {
        /// Path of the report file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Renders a reqwest error together with its underlying cause.
///
/// reqwest's own `Display` omits the source (e.g. the DNS or TLS failure), which
/// is usually the most informative part for the report.
pub fn describe_reqwest_error(error: &ReqwestError) -> String {
    use std::error::Error as _;

    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Types of errors that can occur during URL processing.
///
/// Every failure record is counted under exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestUnauthorized,      // 401 Unauthorized
    HttpRequestNotFound,          // 404 Not Found
    HttpRequestServerError,       // any 5xx
    // Input errors
    InvalidUrl,
    // Late relabel of an otherwise successful record
    SizeThresholdExceeded,
}

/// Types of warnings that can occur during URL processing.
///
/// Warnings indicate a probe or optional field that could not be filled in
/// without failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    SslCertificateUnavailable,
    SitemapUnavailable,
    MissingTitle,
}

/// Types of informational metrics that can occur during URL processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// The page was served from a different URL than requested
    HttpRedirect,
    /// At least one content-management platform was detected
    CmsDetected,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::SizeThresholdExceeded => "Fetch exceeded size threshold",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::SslCertificateUnavailable => "SSL certificate unavailable",
            WarningType::SitemapUnavailable => "Sitemap unavailable",
            WarningType::MissingTitle => "Missing title",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::CmsDetected => "CMS detected",
        }
    }
}
