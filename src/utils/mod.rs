//! Document text extraction helpers shared by the classifiers.

mod text;

pub use text::{all_text_nodes, collapse_whitespace, visible_text};
