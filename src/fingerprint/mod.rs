//! Technology fingerprinting.
//!
//! Detects the server software, frameworks, CMS and third-party services a
//! page is built with, from its response headers, cookies, meta tags, script
//! sources and markup. Detection goes through the [`TechDetector`] trait; the
//! crate ships a rule-based [`RulesetDetector`] with a built-in ruleset.

mod builtin;
mod detector;
mod models;
mod patterns;

pub use detector::{RulesetDetector, TechDetector};
pub use models::{PageEvidence, Technology};
pub use patterns::Marker;
