//! The configured rule set: pattern → key specification, in fixed order.
//!
//! Rules live in a `Vec`, never a hash map: resolution order is part of the
//! engine's determinism contract, so ties between patterns resolve to the
//! first configured rule.

use serde::{Deserialize, Serialize};

use vdiff_types::Path;

use crate::pattern::PathPattern;
use crate::spec::KeySpec;

/// One configured rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRule {
    /// Where the rule applies.
    pub pattern: PathPattern,
    /// Which field(s) identify an element of the matched array.
    pub spec: KeySpec,
}

/// An ordered collection of primary-key rules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct KeyMap {
    rules: Vec<KeyRule>,
}

impl KeyMap {
    /// An empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of configured rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Append a rule. Both strings are parsed immediately; a malformed
    /// spec still registers (it extracts no values, see the spec module).
    pub fn insert(&mut self, pattern: &str, spec: &str) {
        self.rules.push(KeyRule {
            pattern: PathPattern::parse(pattern),
            spec: KeySpec::parse(spec),
        });
    }

    /// The configured rules, in insertion order.
    pub fn rules(&self) -> &[KeyRule] {
        &self.rules
    }

    /// Resolve the rule for the array at `path`.
    ///
    /// An exact literal match wins over wildcard matches; within each
    /// class, the first configured rule wins.
    pub fn resolve(&self, path: &Path) -> Option<&KeySpec> {
        for rule in &self.rules {
            if rule.pattern.is_literal() && rule.pattern.matches(path) {
                return Some(&rule.spec);
            }
        }
        for rule in &self.rules {
            if rule.pattern.matches(path) {
                return Some(&rule.spec);
            }
        }
        None
    }
}

impl From<Vec<(String, String)>> for KeyMap {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut map = Self::new();
        for (pattern, spec) in &pairs {
            map.insert(pattern, spec);
        }
        map
    }
}

impl From<KeyMap> for Vec<(String, String)> {
    fn from(map: KeyMap) -> Self {
        map.rules
            .into_iter()
            .map(|rule| (rule.pattern.to_pointer(), rule.spec.source().to_string()))
            .collect()
    }
}
