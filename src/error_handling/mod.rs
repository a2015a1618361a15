//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`thiserror`) and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Error types are categorized into:
//! - **Errors**: Fetch-fatal failures that turn a record into an error record
//! - **Warnings**: Probes that fell back to an "unavailable" value
//! - **Info**: Informational metrics (redirects, detected platforms)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{
    describe_reqwest_error, ErrorType, FetchError, InfoType, InitializationError, ReportError,
    WarningType,
};
