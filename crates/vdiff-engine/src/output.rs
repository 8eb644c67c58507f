//! Output encoding: diff records rendered into the entries downstream
//! highlighting consumes.
//!
//! Every entry carries its location in two notations: pointer notation
//! (rendered here) and the hosting platform's display notation (rendered
//! by a caller-supplied [`PathFormatter`]). Values are rendered textually,
//! containers included; the structured node stays available on the
//! underlying record for callers that need it.

use serde::{Deserialize, Serialize};

use vdiff_types::{node_text, DiffOp, Path, PathSegment, ValueDiff};

/// Converts an internal path into the platform's display notation.
///
/// The display notation belongs to the surrounding system; the engine only
/// needs a path-to-string function for it.
pub trait PathFormatter {
    /// Render `path` in the display notation.
    fn format(&self, path: &Path) -> String;
}

/// Plain dotted/bracketed notation: `a.b[0].c`, the root as the empty
/// string. Used where the platform supplies no formatter of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct DottedFormatter;

impl PathFormatter for DottedFormatter {
    fn format(&self, path: &Path) -> String {
        let mut out = String::new();
        for segment in path.segments() {
            match segment {
                PathSegment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

/// A render-ready change entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    /// The operation, serialized to its lower-case name.
    pub op: DiffOp,
    /// Primary location, pointer notation. For dual-location records this
    /// is the destination side.
    pub path: String,
    /// Primary location, display notation.
    pub display_path: String,
    /// Textual rendering of the changed node.
    pub value: String,
    /// Origin location for dual-location records, pointer notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Origin location for dual-location records, display notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_from: Option<String>,
}

/// Encode a diff into output entries, in record order.
///
/// Records carrying a destination swap locations on the way out: the
/// destination is reported as the entry's `path` and the stored primary
/// location as its `from`.
pub fn render_diff(diff: &ValueDiff, formatter: &dyn PathFormatter) -> Vec<OutputEntry> {
    diff.iter()
        .map(|record| {
            let (primary, origin) = match &record.to_path {
                Some(destination) => (destination, Some(&record.path)),
                None => (&record.path, None),
            };
            OutputEntry {
                op: record.op,
                path: primary.to_pointer(),
                display_path: formatter.format(primary),
                value: node_text(&record.value),
                from: origin.map(Path::to_pointer),
                display_from: origin.map(|path| formatter.format(path)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::diff_values;
    use crate::config::DiffConfig;
    use serde_json::json;
    use vdiff_types::DiffRecord;

    fn render(diff: &ValueDiff) -> Vec<OutputEntry> {
        render_diff(diff, &DottedFormatter)
    }

    #[test]
    fn dotted_notation() {
        let path = Path::root().field("a").element(0).field("b").element(2);
        assert_eq!(DottedFormatter.format(&path), "a[0].b[2]");
        assert_eq!(DottedFormatter.format(&Path::root()), "");
    }

    #[test]
    fn single_location_entry() {
        let diff = diff_values(&json!({"a": 1}), &json!({"a": 2}), &DiffConfig::new()).unwrap();
        let entries = render(&diff);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.op, DiffOp::Replace);
        assert_eq!(entry.path, "/a");
        assert_eq!(entry.display_path, "a");
        assert_eq!(entry.value, "2");
        assert!(entry.from.is_none());
        assert!(entry.display_from.is_none());
    }

    #[test]
    fn dual_location_entry_swaps_sides() {
        let config = DiffConfig::unordered().with_primary_key("/items", "id");
        let diff = diff_values(
            &json!({"items": [{"id": 1, "v": "a"}, {"id": 2}]}),
            &json!({"items": [{"id": 2}, {"id": 1, "v": "x"}]}),
            &config,
        )
        .unwrap();
        let entries = render(&diff);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        // Destination reported as the entry path, origin as `from`.
        assert_eq!(entry.path, "/items/1/v");
        assert_eq!(entry.display_path, "items[1].v");
        assert_eq!(entry.from.as_deref(), Some("/items/0/v"));
        assert_eq!(entry.display_from.as_deref(), Some("items[0].v"));
    }

    #[test]
    fn container_values_render_textually() {
        let diff = diff_values(
            &json!({"a": {"x": 1}}),
            &json!({"b": {"y": [1, 2]}}),
            &DiffConfig::new(),
        )
        .unwrap();
        let entries = render(&diff);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "{\"x\":1}");
        assert_eq!(entries[1].value, "{\"y\":[1,2]}");
    }

    #[test]
    fn string_values_render_unquoted() {
        let diff = diff_values(&json!({"a": "x"}), &json!({"a": "y"}), &DiffConfig::new()).unwrap();
        assert_eq!(render(&diff)[0].value, "y");
    }

    #[test]
    fn escaped_pointer_with_plain_display() {
        let diff = diff_values(&json!({"a/b~c": 1}), &json!({"a/b~c": 2}), &DiffConfig::new())
            .unwrap();
        let entries = render(&diff);
        assert_eq!(entries[0].path, "/a~1b~0c");
        assert_eq!(entries[0].display_path, "a/b~c");
    }

    #[test]
    fn move_record_swaps_like_any_dual_location() {
        // The matcher does not synthesize moves today, but the encoder
        // contract covers them for callers that do.
        let diff = ValueDiff {
            records: vec![DiffRecord::new(
                DiffOp::Move,
                Path::root().field("old"),
                json!(1),
            )
            .with_destination(Path::root().field("new"))],
        };
        let entry = &render(&diff)[0];
        assert_eq!(entry.op, DiffOp::Move);
        assert_eq!(entry.path, "/new");
        assert_eq!(entry.from.as_deref(), Some("/old"));
    }

    #[test]
    fn entry_serde_shape() {
        let diff = diff_values(&json!([1]), &json!([2]), &DiffConfig::new()).unwrap();
        let entries = render(&diff);
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["op"], "replace");
        assert_eq!(json[0]["path"], "/0");
        assert_eq!(json[0]["value"], "2");
        assert!(json[0].get("from").is_none());
    }
}
