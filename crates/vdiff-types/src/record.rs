//! Diff operations and the path-addressed change records the engine emits.
//!
//! Records are produced in traversal order and never reordered; callers may
//! rely on that order when rendering expected/actual trees side by side.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::Path;

/// The kind of change a diff record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffOp {
    /// Present only on the target side.
    Add,
    /// Present only on the source side.
    Remove,
    /// Present on both sides with the same kind but different values.
    Replace,
    /// Relocated from `path` to the destination path.
    Move,
    /// Present on both sides with different kinds.
    TypeMismatch,
}

impl DiffOp {
    /// The lower-case wire name of the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Replace => "replace",
            Self::Move => "move",
            Self::TypeMismatch => "type_mismatch",
        }
    }
}

impl fmt::Display for DiffOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single path-addressed difference between the source and target trees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// What changed.
    pub op: DiffOp,
    /// Primary location. For [`DiffOp::Move`] this is the source location.
    pub path: Path,
    /// The target-side node for add/replace/move/mismatch records, the
    /// removed source node for remove records.
    pub value: Value,
    /// Destination location. Present for [`DiffOp::Move`] and for records
    /// produced while comparing a relocated element pair, where source and
    /// target live at different paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_path: Option<Path>,
}

impl DiffRecord {
    /// A record with no destination path.
    pub fn new(op: DiffOp, path: Path, value: Value) -> Self {
        Self {
            op,
            path,
            value,
            to_path: None,
        }
    }

    /// Attach a destination path, turning this into a dual-location record.
    pub fn with_destination(mut self, to_path: Path) -> Self {
        self.to_path = Some(to_path);
        self
    }
}

/// The complete result of comparing two value trees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueDiff {
    /// The change records, in traversal order.
    pub records: Vec<DiffRecord>,
}

impl ValueDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the trees compared equal.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of change records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over the records in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffRecord> {
        self.records.iter()
    }

    /// Number of added locations.
    pub fn additions(&self) -> usize {
        self.count(DiffOp::Add)
    }

    /// Number of removed locations.
    pub fn removals(&self) -> usize {
        self.count(DiffOp::Remove)
    }

    /// Number of value replacements.
    pub fn replacements(&self) -> usize {
        self.count(DiffOp::Replace)
    }

    /// Number of kind mismatches.
    pub fn mismatches(&self) -> usize {
        self.count(DiffOp::TypeMismatch)
    }

    fn count(&self, op: DiffOp) -> usize {
        self.records.iter().filter(|r| r.op == op).count()
    }
}

impl<'a> IntoIterator for &'a ValueDiff {
    type Item = &'a DiffRecord;
    type IntoIter = std::slice::Iter<'a, DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn op_wire_names() {
        assert_eq!(DiffOp::Add.as_str(), "add");
        assert_eq!(DiffOp::TypeMismatch.as_str(), "type_mismatch");
        assert_eq!(DiffOp::Move.to_string(), "move");
    }

    #[test]
    fn op_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&DiffOp::TypeMismatch).unwrap(),
            "\"type_mismatch\""
        );
        let op: DiffOp = serde_json::from_str("\"replace\"").unwrap();
        assert_eq!(op, DiffOp::Replace);
    }

    #[test]
    fn record_destination_is_optional() {
        let record = DiffRecord::new(DiffOp::Replace, Path::root().field("a"), json!(1));
        assert!(record.to_path.is_none());

        let relocated = record.with_destination(Path::root().field("b"));
        assert_eq!(relocated.to_path.unwrap().to_pointer(), "/b");
    }

    #[test]
    fn record_serde_omits_missing_destination() {
        let record = DiffRecord::new(DiffOp::Add, Path::root().field("x"), json!(true));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["op"], "add");
        assert_eq!(json["path"], "/x");
        assert!(json.get("to_path").is_none());
    }

    #[test]
    fn diff_counters() {
        let diff = ValueDiff {
            records: vec![
                DiffRecord::new(DiffOp::Add, Path::root().field("a"), json!(1)),
                DiffRecord::new(DiffOp::Remove, Path::root().field("b"), json!(2)),
                DiffRecord::new(DiffOp::Replace, Path::root().field("c"), json!(3)),
                DiffRecord::new(DiffOp::Replace, Path::root().field("d"), json!(4)),
            ],
        };
        assert_eq!(diff.len(), 4);
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.removals(), 1);
        assert_eq!(diff.replacements(), 2);
        assert_eq!(diff.mismatches(), 0);
        assert!(!diff.is_empty());
    }
}
