//! Input handling for the main application.
//!
//! This module provides URL normalization and the readers for the interactive
//! prompt and URL files.

pub mod input;
pub mod url;

// Re-export public API
pub use input::{prompt_for_urls, read_interactive_lines, read_url_file};
pub use url::{ensure_scheme, normalize_url};
