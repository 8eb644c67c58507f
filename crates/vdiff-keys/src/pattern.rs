//! Path patterns: pointer-notation paths with wildcard segments.
//!
//! A pattern addresses the arrays a primary-key rule applies to. Any
//! segment may be the wildcard `*`, which matches exactly one array index
//! at that position. Literal segments match the textual form of the path
//! segment at their position.

use vdiff_types::{escape_segment, unescape_segment, Path, PathSegment};

/// One segment of a configured path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSegment {
    /// Matches a path segment with exactly this text.
    Literal(String),
    /// Matches any single array index.
    Wildcard,
}

/// A pointer-notation path where any segment may be `*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<PatternSegment>,
}

impl PathPattern {
    /// Parse a pattern from pointer-ish notation.
    ///
    /// A missing leading `/` is tolerated and normalized away. `*` becomes
    /// a wildcard; every other segment is unescaped and kept literal.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.strip_prefix('/').unwrap_or(text);
        if trimmed.is_empty() {
            return Self { segments: Vec::new() };
        }
        let segments = trimmed
            .split('/')
            .map(|raw| {
                if raw == "*" {
                    PatternSegment::Wildcard
                } else {
                    PatternSegment::Literal(unescape_segment(raw))
                }
            })
            .collect();
        Self { segments }
    }

    /// The segment list.
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Returns `true` if the pattern contains no wildcard segments.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, PatternSegment::Literal(_)))
    }

    /// Test the pattern against a literal traversal path.
    ///
    /// Segment counts must agree. A literal pattern segment must equal the
    /// textual form of the path segment at its position; a wildcard must
    /// align with an array index.
    pub fn matches(&self, path: &Path) -> bool {
        if self.segments.len() != path.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(path.segments())
            .all(|(pattern, segment)| match pattern {
                PatternSegment::Literal(text) => *text == segment.text(),
                PatternSegment::Wildcard => matches!(segment, PathSegment::Index(_)),
            })
    }

    /// Render back to pointer notation (canonical, with leading `/`).
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                PatternSegment::Literal(text) => out.push_str(&escape_segment(text)),
                PatternSegment::Wildcard => out.push('*'),
            }
        }
        out
    }
}
