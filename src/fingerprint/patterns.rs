//! Marker matching for classifier and fingerprint tables.
//!
//! A marker is either a literal substring or a regular expression. Table
//! entries are written as plain strings; anything that looks like regex
//! syntax is compiled once when the table is built.

use regex::Regex;

/// A literal or pattern string whose presence is evidence for a classification.
#[derive(Debug, Clone)]
pub enum Marker {
    Literal(String),
    Pattern(Regex),
}

/// Heuristic used for table entries: anchors, escapes, classes, groups and
/// quantifiers mean the entry was written as a regex.
fn looks_like_regex(raw: &str) -> bool {
    raw.starts_with('^')
        || raw.contains('$')
        || raw.contains('\\')
        || raw.contains('[')
        || raw.contains('(')
        || raw.contains('*')
        || raw.contains('+')
        || raw.contains('?')
        || raw.contains('|')
}

impl Marker {
    /// Builds a marker from a table entry.
    ///
    /// Entries that look like regex but fail to compile fall back to a literal
    /// match so one bad entry never disables the whole table.
    pub fn new(raw: &str) -> Self {
        if looks_like_regex(raw) {
            match Regex::new(raw) {
                Ok(re) => return Marker::Pattern(re),
                Err(e) => log::debug!("Marker '{raw}' is not a valid regex ({e}); matching literally"),
            }
        }
        Marker::Literal(raw.to_string())
    }

    /// An empty literal matches anything (used for "header is present" rules).
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Marker::Literal(lit) => text.contains(lit.as_str()),
            Marker::Pattern(re) => re.is_match(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_marker() {
        let m = Marker::new("wp-content");
        assert!(matches!(m, Marker::Literal(_)));
        assert!(m.is_match("/wp-content/themes/x.css"));
        assert!(!m.is_match("/static/x.css"));
    }

    #[test]
    fn test_punctuation_is_not_regex() {
        // "Joomla!" and "exp:" are plain literals
        assert!(matches!(Marker::new("Joomla!"), Marker::Literal(_)));
        assert!(matches!(Marker::new("exp:"), Marker::Literal(_)));
    }

    #[test]
    fn test_regex_marker() {
        let m = Marker::new(r"^nginx(/[\d.]+)?$");
        assert!(matches!(m, Marker::Pattern(_)));
        assert!(m.is_match("nginx/1.18.0"));
        assert!(!m.is_match("apache nginx"));
    }

    #[test]
    fn test_invalid_regex_falls_back_to_literal() {
        let m = Marker::new("broken(");
        assert!(matches!(m, Marker::Literal(_)));
        assert!(m.is_match("this is broken( text"));
    }

    #[test]
    fn test_empty_marker_matches_anything() {
        assert!(Marker::new("").is_match("whatever"));
    }
}
