//! HTTP fetching and per-URL processing.
//!
//! This module handles:
//! - Page download with browser-like headers and a capped body
//! - The per-URL pipeline that turns an input line into a `SiteRecord`

mod context;
mod page;
mod process;
mod request;

pub use context::ProcessingContext;
pub use page::{fetch_page, FetchedPage};
pub use process::process_url;
