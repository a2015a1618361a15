//! Matching of fingerprint rules against page evidence.

use std::collections::{BTreeSet, HashMap};

use crate::models::TechStack;

use super::builtin::builtin_technologies;
use super::models::{PageEvidence, Technology};
use super::patterns::Marker;

/// Produces a technology stack from the evidence of one page.
///
/// The default implementation is a local ruleset; alternative detectors (for
/// example a remote fingerprinting service) plug in behind the same trait.
pub trait TechDetector: Send + Sync {
    fn detect(&self, evidence: &PageEvidence) -> TechStack;
}

/// Rule-based detector over a fixed set of technologies.
pub struct RulesetDetector {
    technologies: Vec<Technology>,
}

impl RulesetDetector {
    pub fn new(technologies: Vec<Technology>) -> Self {
        Self { technologies }
    }

    /// Detector with the built-in ruleset.
    pub fn builtin() -> Self {
        Self::new(builtin_technologies())
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }
}

fn any_keyed_match(rules: &HashMap<String, Marker>, observed: &HashMap<String, String>) -> bool {
    rules.iter().any(|(name, marker)| {
        observed
            .get(name)
            .is_some_and(|value| marker.is_match(value))
    })
}

fn matches(tech: &Technology, evidence: &PageEvidence) -> bool {
    any_keyed_match(&tech.headers, &evidence.headers)
        || any_keyed_match(&tech.cookies, &evidence.cookies)
        || any_keyed_match(&tech.meta, &evidence.meta)
        || tech.script_src.iter().any(|marker| {
            evidence
                .script_sources
                .iter()
                .any(|src| marker.is_match(src))
        })
        || tech.html.iter().any(|marker| marker.is_match(&evidence.html))
}

impl TechDetector for RulesetDetector {
    fn detect(&self, evidence: &PageEvidence) -> TechStack {
        let by_name: HashMap<&str, &Technology> = self
            .technologies
            .iter()
            .map(|t| (t.name.as_str(), t))
            .collect();

        let mut detected: BTreeSet<&str> = self
            .technologies
            .iter()
            .filter(|tech| matches(tech, evidence))
            .map(|tech| tech.name.as_str())
            .collect();

        // Follow implications until nothing new is added
        let mut pending: Vec<&str> = detected.iter().copied().collect();
        while let Some(name) = pending.pop() {
            let Some(tech) = by_name.get(name) else {
                continue;
            };
            for implied in &tech.implies {
                if let Some(implied_tech) = by_name.get(implied.as_str()) {
                    if detected.insert(implied_tech.name.as_str()) {
                        pending.push(implied_tech.name.as_str());
                    }
                } else {
                    log::debug!("{} implies unknown technology {}", tech.name, implied);
                }
            }
        }

        let mut stack = TechStack::new();
        for name in detected {
            if let Some(tech) = by_name.get(name) {
                stack
                    .entry(tech.category.clone())
                    .or_default()
                    .push(tech.name.clone());
            }
        }
        stack
    }
}
