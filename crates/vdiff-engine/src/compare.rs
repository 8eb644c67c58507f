//! The recursive comparator: walks source and target in lock-step by path
//! and accumulates change records.
//!
//! The walk carries two paths. They are equal for ordinary descent; they
//! diverge when the array matcher pairs elements that live at different
//! indices, and any record produced below such a pair keeps both locations.

use serde_json::{Map, Value};
use tracing::debug;

use vdiff_types::{
    is_pattern_leaf, DiffError, DiffOp, DiffRecord, DiffResult, NodeKind, Path, ValueDiff,
};

use crate::config::DiffConfig;

/// Compare two value trees and produce the ordered change list.
///
/// `source` is the expected-result tree, `target` the actual-result tree.
/// Neither tree is mutated. The only failure mode is the recursion guard
/// (`config.max_depth`); every configuration problem degrades softly
/// instead of erroring.
pub fn diff_values(source: &Value, target: &Value, config: &DiffConfig) -> DiffResult<ValueDiff> {
    let mut comparator = Comparator {
        config,
        records: Vec::new(),
    };
    let root = Path::root();
    comparator.compare(&root, source, &root, target, 0)?;
    let diff = ValueDiff {
        records: comparator.records,
    };
    debug!(records = diff.len(), "computed value diff");
    Ok(diff)
}

/// Walk state: the immutable configuration and the write-once record list.
pub(crate) struct Comparator<'a> {
    pub(crate) config: &'a DiffConfig,
    pub(crate) records: Vec<DiffRecord>,
}

impl<'a> Comparator<'a> {
    /// Compare one node pair.
    pub(crate) fn compare(
        &mut self,
        src_path: &Path,
        source: &Value,
        tgt_path: &Path,
        target: &Value,
        depth: usize,
    ) -> DiffResult<()> {
        if depth > self.config.max_depth {
            return Err(DiffError::DepthLimitExceeded {
                limit: self.config.max_depth,
                path: src_path.clone(),
            });
        }

        if NodeKind::of(source) != NodeKind::of(target) {
            // A pattern leaf stands in for a value of unknown kind; with
            // leniency enabled the mismatch is suppressed outright. Deep
            // comparison never continues past a kind mismatch.
            if self.config.disable_type_check_if_regexp && is_pattern_leaf(source) {
                return Ok(());
            }
            self.emit_pair(DiffOp::TypeMismatch, src_path, tgt_path, target.clone());
            return Ok(());
        }

        if source == target {
            return Ok(());
        }

        match (source, target) {
            (Value::Array(src_items), Value::Array(tgt_items)) => {
                self.compare_arrays(src_path, src_items, tgt_path, tgt_items, depth)
            }
            (Value::Object(src_map), Value::Object(tgt_map)) => {
                self.compare_objects(src_path, src_map, tgt_path, tgt_map, depth)
            }
            _ => {
                self.emit_pair(DiffOp::Replace, src_path, tgt_path, target.clone());
                Ok(())
            }
        }
    }

    /// Compare two objects field by field.
    ///
    /// Source fields are visited first (removals and recursions), then
    /// target-only fields (additions); within each side the tree's own
    /// field order is preserved.
    fn compare_objects(
        &mut self,
        src_path: &Path,
        source: &Map<String, Value>,
        tgt_path: &Path,
        target: &Map<String, Value>,
        depth: usize,
    ) -> DiffResult<()> {
        for (name, src_value) in source {
            match target.get(name) {
                Some(tgt_value) => {
                    self.compare(
                        &src_path.field(name),
                        src_value,
                        &tgt_path.field(name),
                        tgt_value,
                        depth + 1,
                    )?;
                }
                None => {
                    self.records.push(DiffRecord::new(
                        DiffOp::Remove,
                        src_path.field(name),
                        src_value.clone(),
                    ));
                }
            }
        }
        for (name, tgt_value) in target {
            if !source.contains_key(name) {
                self.records.push(DiffRecord::new(
                    DiffOp::Add,
                    tgt_path.field(name),
                    tgt_value.clone(),
                ));
            }
        }
        Ok(())
    }

    /// Emit a record at the source location, carrying the target location
    /// as destination when the two differ.
    fn emit_pair(&mut self, op: DiffOp, src_path: &Path, tgt_path: &Path, value: Value) {
        let mut record = DiffRecord::new(op, src_path.clone(), value);
        if src_path != tgt_path {
            record = record.with_destination(tgt_path.clone());
        }
        self.records.push(record);
    }
}
