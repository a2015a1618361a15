//! Data structures for technology fingerprints.

use std::collections::HashMap;

use super::patterns::Marker;

/// A single technology fingerprint rule.
///
/// A technology is detected when any of its markers matches the page
/// evidence. Header, cookie and meta rules are keyed by lower-case name; an
/// empty marker means "present with any value".
#[derive(Debug, Clone)]
pub struct Technology {
    pub name: String,
    /// builtwith-style category, e.g. `web-servers` or `javascript-frameworks`
    pub category: String,
    pub headers: HashMap<String, Marker>,
    pub cookies: HashMap<String, Marker>,
    pub meta: HashMap<String, Marker>,
    pub script_src: Vec<Marker>,
    pub html: Vec<Marker>,
    /// Technologies reported alongside this one (e.g. WordPress implies PHP)
    pub implies: Vec<String>,
}

impl Technology {
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            headers: HashMap::new(),
            cookies: HashMap::new(),
            meta: HashMap::new(),
            script_src: Vec::new(),
            html: Vec::new(),
            implies: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, pattern: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), Marker::new(pattern));
        self
    }

    pub fn cookie(mut self, name: &str, pattern: &str) -> Self {
        self.cookies.insert(name.to_string(), Marker::new(pattern));
        self
    }

    pub fn meta(mut self, name: &str, pattern: &str) -> Self {
        self.meta
            .insert(name.to_ascii_lowercase(), Marker::new(pattern));
        self
    }

    pub fn script(mut self, pattern: &str) -> Self {
        self.script_src.push(Marker::new(pattern));
        self
    }

    pub fn html(mut self, pattern: &str) -> Self {
        self.html.push(Marker::new(pattern));
        self
    }

    pub fn implies(mut self, other: &str) -> Self {
        self.implies.push(other.to_string());
        self
    }
}

/// Everything a detector may look at for one page.
#[derive(Debug, Clone, Default)]
pub struct PageEvidence {
    /// Lower-case header name to value; repeated headers joined with ", "
    pub headers: HashMap<String, String>,
    /// Cookie name to value, taken from `Set-Cookie`
    pub cookies: HashMap<String, String>,
    /// Lower-case `<meta name>` to `content`
    pub meta: HashMap<String, String>,
    pub script_sources: Vec<String>,
    pub html: String,
}

impl PageEvidence {
    /// Collects headers and cookies from a response header map.
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut evidence = Self::default();
        for name in headers.keys() {
            let joined = headers
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect::<Vec<_>>()
                .join(", ");
            evidence.headers.insert(name.as_str().to_string(), joined);
        }
        for value in headers
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
        {
            if let Some((name, rest)) = value.split_once('=') {
                let cookie_value = rest.split(';').next().unwrap_or_default();
                evidence
                    .cookies
                    .insert(name.trim().to_string(), cookie_value.trim().to_string());
            }
        }
        evidence
    }
}
