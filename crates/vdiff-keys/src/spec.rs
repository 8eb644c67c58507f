//! Key specifications: the mini-language naming which field(s) identify an
//! array element.
//!
//! A specification is parsed once at configuration-load time into a small
//! AST; extraction walks the parsed steps instead of re-splitting strings.
//!
//! Grammar, informally:
//!
//! - `name` — a single field
//! - `a/b` — field `b` of the object at field `a` (numeric segments index
//!   into arrays directly)
//! - `k1&&k2` — compound key; every component must resolve independently
//! - `arr/*/field='value'` — within array `arr`, the element whose `field`
//!   equals `value`; resolution continues from that element
//! - `arr/*/field` — collect `field` from every element of `arr`, sorted
//!   ascending by text; terminal
//!
//! A component that does not fit the grammar is kept as
//! [`KeyComponent::Invalid`]: it never extracts a value but never aborts
//! the comparison either.

/// One resolution step inside a component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyStep {
    /// Walk into a child field, or a direct index when the current node is
    /// an array.
    Segment(String),
    /// Within an array, select the first element whose `field` renders
    /// equal to `value`, then continue from it.
    Filter {
        /// Field compared against the literal.
        field: String,
        /// Expected textual value (the quoted literal, unquoted).
        value: String,
    },
    /// Within an array, collect `field` from every element. Always the
    /// last step of its component.
    Collect {
        /// Field collected across elements.
        field: String,
    },
}

/// One independently resolved component of a (possibly compound) key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyComponent {
    /// A parsed step sequence.
    Steps(Vec<KeyStep>),
    /// A component that failed to parse; extraction always yields nothing.
    Invalid,
}

/// A parsed key specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySpec {
    source: String,
    components: Vec<KeyComponent>,
}

/// Separator between compound-key components.
const COMPOUND_SEPARATOR: &str = "&&";

impl KeySpec {
    /// Parse a specification string.
    ///
    /// Parsing never fails: malformed components degrade to
    /// [`KeyComponent::Invalid`] and extraction treats the affected element
    /// as having no key value.
    pub fn parse(source: &str) -> Self {
        let components = source
            .split(COMPOUND_SEPARATOR)
            .map(|component| parse_component(component.trim()))
            .collect();
        Self {
            source: source.to_string(),
            components,
        }
    }

    /// The original specification text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed components.
    pub fn components(&self) -> &[KeyComponent] {
        &self.components
    }
}

fn parse_component(text: &str) -> KeyComponent {
    if text.is_empty() {
        return KeyComponent::Invalid;
    }
    let raw: Vec<&str> = text.split('/').collect();
    let mut steps = Vec::new();
    let mut i = 0;
    while i < raw.len() {
        let segment = raw[i];
        if segment.is_empty() {
            return KeyComponent::Invalid;
        }
        if segment == "*" {
            // A wildcard needs a follow-up segment: either a filter clause
            // or a terminal bare field to collect.
            let Some(next) = raw.get(i + 1) else {
                return KeyComponent::Invalid;
            };
            match parse_wildcard_follow_up(next) {
                Some(FollowUp::Filter { field, value }) => {
                    steps.push(KeyStep::Filter { field, value });
                }
                Some(FollowUp::Bare(field)) => {
                    // Collect is terminal; a bare field mid-component has
                    // no defined meaning.
                    if i + 2 != raw.len() {
                        return KeyComponent::Invalid;
                    }
                    steps.push(KeyStep::Collect { field });
                }
                None => return KeyComponent::Invalid,
            }
            i += 2;
        } else {
            steps.push(KeyStep::Segment(segment.to_string()));
            i += 1;
        }
    }
    KeyComponent::Steps(steps)
}

enum FollowUp {
    Filter { field: String, value: String },
    Bare(String),
}

/// Parse the segment after a wildcard: `field='value'` or a bare field
/// name. Returns `None` for a malformed filter clause.
fn parse_wildcard_follow_up(segment: &str) -> Option<FollowUp> {
    if segment.is_empty() || segment == "*" {
        return None;
    }
    let Some(eq) = segment.find('=') else {
        return Some(FollowUp::Bare(segment.to_string()));
    };
    let field = &segment[..eq];
    let literal = &segment[eq + 1..];
    if field.is_empty() {
        return None;
    }
    // The value must be a complete single-quoted literal. A lone opening
    // quote fails the suffix strip, so `f='` is rejected while `f=''` is an
    // empty-string match.
    let quoted = literal.strip_prefix('\'')?;
    let value = quoted.strip_suffix('\'')?;
    Some(FollowUp::Filter {
        field: field.to_string(),
        value: value.to_string(),
    })
}
