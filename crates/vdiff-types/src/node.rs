//! Node classification for value trees.
//!
//! The engine compares already-parsed `serde_json::Value` trees and never
//! mutates them. Classification assigns every node one of seven closed
//! kinds; two nodes are comparable at depth only when their kinds agree.

use std::fmt;

use serde_json::Value;

/// Prefix marking a string leaf as a pattern placeholder rather than a
/// literal expected value.
///
/// The engine never evaluates the pattern itself; the prefix only controls
/// type-mismatch suppression when the lenient-regexp flag is set.
pub const REGEXP_PREFIX: &str = "regexp:";

/// The semantic kind of a value-tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An order-preserving field-name to node mapping.
    Object,
    /// An ordered sequence of nodes.
    Array,
    /// A string leaf.
    String,
    /// A whole-number leaf.
    Integer,
    /// A fractional-number leaf.
    Float,
    /// A boolean leaf.
    Boolean,
    /// The null leaf.
    Null,
}

impl NodeKind {
    /// Classify a node.
    ///
    /// Numbers representable as `i64`/`u64` are [`NodeKind::Integer`];
    /// everything else numeric is [`NodeKind::Float`].
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Self::Integer
                } else {
                    Self::Float
                }
            }
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }

    /// Returns `true` for kinds that contain child nodes.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// Returns `true` if the node is a string leaf carrying the
/// [`REGEXP_PREFIX`] marker.
pub fn is_pattern_leaf(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.starts_with(REGEXP_PREFIX))
}

/// Textual rendering of a node.
///
/// Strings render as their raw text (no quotes); every other kind,
/// containers included, renders as its JSON serialization.
pub fn node_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_scalars() {
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Null);
        assert_eq!(NodeKind::of(&json!(true)), NodeKind::Boolean);
        assert_eq!(NodeKind::of(&json!("text")), NodeKind::String);
    }

    #[test]
    fn classify_containers() {
        assert_eq!(NodeKind::of(&json!({})), NodeKind::Object);
        assert_eq!(NodeKind::of(&json!([])), NodeKind::Array);
        assert!(NodeKind::of(&json!({})).is_container());
        assert!(!NodeKind::of(&json!(1)).is_container());
    }

    #[test]
    fn integer_and_float_are_distinct_kinds() {
        assert_eq!(NodeKind::of(&json!(42)), NodeKind::Integer);
        assert_eq!(NodeKind::of(&json!(-7)), NodeKind::Integer);
        assert_eq!(NodeKind::of(&json!(u64::MAX)), NodeKind::Integer);
        assert_eq!(NodeKind::of(&json!(1.5)), NodeKind::Float);
        assert_ne!(NodeKind::of(&json!(1)), NodeKind::of(&json!(1.5)));
    }

    #[test]
    fn pattern_leaf_detection() {
        assert!(is_pattern_leaf(&json!("regexp:\\d+")));
        assert!(!is_pattern_leaf(&json!("plain text")));
        assert!(!is_pattern_leaf(&json!(42)));
        assert!(!is_pattern_leaf(&json!({"regexp:": 1})));
    }

    #[test]
    fn text_rendering() {
        assert_eq!(node_text(&json!("abc")), "abc");
        assert_eq!(node_text(&json!(42)), "42");
        assert_eq!(node_text(&json!(null)), "null");
        assert_eq!(node_text(&json!({"a": 1})), "{\"a\":1}");
        assert_eq!(node_text(&json!([1, 2])), "[1,2]");
    }
}
