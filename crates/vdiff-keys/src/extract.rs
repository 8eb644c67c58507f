//! Key extraction: resolve a parsed specification against one array
//! element.
//!
//! Extraction is best-effort. Any component that fails to resolve (missing
//! field, null value, filter with no match, malformed component) makes the
//! whole element yield no key value; the matcher then falls back to its
//! add/remove finalization for that element.

use serde_json::Value;

use vdiff_types::node_text;

use crate::spec::{KeyComponent, KeySpec, KeyStep};

/// The comparable key material one component resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyValue {
    /// A scalar (or nested node) rendered to text.
    Text(String),
    /// A sorted collection produced by a collect step.
    List(Vec<String>),
}

/// The full key of an element: one value per compound component, in
/// specification order.
pub type ElementKey = Vec<KeyValue>;

/// Extract the key of `element` under `spec`, or `None` if any component
/// fails to resolve.
pub fn extract_key(element: &Value, spec: &KeySpec) -> Option<ElementKey> {
    let mut key = Vec::with_capacity(spec.components().len());
    for component in spec.components() {
        key.push(resolve_component(element, component)?);
    }
    Some(key)
}

fn resolve_component(element: &Value, component: &KeyComponent) -> Option<KeyValue> {
    let KeyComponent::Steps(steps) = component else {
        return None;
    };
    let mut current = element;
    for step in steps {
        match step {
            KeyStep::Segment(name) => {
                current = match current {
                    Value::Object(map) => map.get(name)?,
                    Value::Array(items) => {
                        let index: usize = name.parse().ok()?;
                        items.get(index)?
                    }
                    _ => return None,
                };
                if current.is_null() {
                    return None;
                }
            }
            KeyStep::Filter { field, value } => {
                let Value::Array(items) = current else {
                    return None;
                };
                current = items.iter().find(|item| {
                    item.get(field)
                        .is_some_and(|v| !v.is_null() && node_text(v) == *value)
                })?;
            }
            KeyStep::Collect { field } => {
                let Value::Array(items) = current else {
                    return None;
                };
                let mut values: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get(field))
                    .filter(|v| !v.is_null())
                    .map(node_text)
                    .collect();
                if values.is_empty() {
                    return None;
                }
                values.sort();
                // The parser guarantees collect is the final step.
                return Some(KeyValue::List(values));
            }
        }
    }
    Some(KeyValue::Text(node_text(current)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(element: &Value, spec: &str) -> Option<ElementKey> {
        extract_key(element, &KeySpec::parse(spec))
    }

    #[test]
    fn single_field_key() {
        let element = json!({"id": 7, "name": "x"});
        assert_eq!(key(&element, "id"), Some(vec![KeyValue::Text("7".to_string())]));
    }

    #[test]
    fn missing_field_yields_nothing() {
        let element = json!({"name": "x"});
        assert_eq!(key(&element, "id"), None);
    }

    #[test]
    fn null_field_yields_nothing() {
        let element = json!({"id": null});
        assert_eq!(key(&element, "id"), None);
    }

    #[test]
    fn nested_reference() {
        let element = json!({"meta": {"uuid": "ab-12"}});
        assert_eq!(
            key(&element, "meta/uuid"),
            Some(vec![KeyValue::Text("ab-12".to_string())])
        );
    }

    #[test]
    fn numeric_segment_indexes_into_array() {
        let element = json!({"parts": ["head", "tail"]});
        assert_eq!(
            key(&element, "parts/1"),
            Some(vec![KeyValue::Text("tail".to_string())])
        );
        assert_eq!(key(&element, "parts/5"), None);
    }

    #[test]
    fn compound_key_requires_all_components() {
        let element = json!({"type": "disk", "name": "sda"});
        assert_eq!(
            key(&element, "type&&name"),
            Some(vec![
                KeyValue::Text("disk".to_string()),
                KeyValue::Text("sda".to_string()),
            ])
        );
        assert_eq!(key(&element, "type&&missing"), None);
    }

    #[test]
    fn filter_selects_matching_element() {
        let element = json!({
            "attrs": [
                {"name": "color", "value": "red"},
                {"name": "serial", "value": "s-99"},
            ]
        });
        assert_eq!(
            key(&element, "attrs/*/name='serial'/value"),
            Some(vec![KeyValue::Text("s-99".to_string())])
        );
    }

    #[test]
    fn filter_without_match_yields_nothing() {
        let element = json!({"attrs": [{"name": "color", "value": "red"}]});
        assert_eq!(key(&element, "attrs/*/name='serial'/value"), None);
    }

    #[test]
    fn filter_takes_first_of_several_matches() {
        let element = json!({
            "attrs": [
                {"name": "serial", "value": "first"},
                {"name": "serial", "value": "second"},
            ]
        });
        assert_eq!(
            key(&element, "attrs/*/name='serial'/value"),
            Some(vec![KeyValue::Text("first".to_string())])
        );
    }

    #[test]
    fn filter_compares_numbers_textually() {
        let element = json!({"attrs": [{"name": 1, "value": "one"}]});
        assert_eq!(
            key(&element, "attrs/*/name='1'/value"),
            Some(vec![KeyValue::Text("one".to_string())])
        );
    }

    #[test]
    fn collect_sorts_by_text() {
        let element = json!({"tags": [{"label": "zeta"}, {"label": "alpha"}, {"label": "mid"}]});
        assert_eq!(
            key(&element, "tags/*/label"),
            Some(vec![KeyValue::List(vec![
                "alpha".to_string(),
                "mid".to_string(),
                "zeta".to_string(),
            ])])
        );
    }

    #[test]
    fn collect_skips_gaps_but_fails_when_empty() {
        let element = json!({"tags": [{"label": "a"}, {"other": 1}, {"label": null}]});
        assert_eq!(
            key(&element, "tags/*/label"),
            Some(vec![KeyValue::List(vec!["a".to_string()])])
        );

        let bare = json!({"tags": [{"other": 1}]});
        assert_eq!(key(&bare, "tags/*/label"), None);
    }

    #[test]
    fn malformed_spec_yields_nothing() {
        let element = json!({"id": 1});
        assert_eq!(key(&element, "id&&"), None);
        assert_eq!(key(&element, ""), None);
    }

    #[test]
    fn scalar_element_yields_nothing() {
        assert_eq!(key(&json!(42), "id"), None);
    }

    #[test]
    fn wildcard_on_non_array_yields_nothing() {
        let element = json!({"attrs": {"name": "serial"}});
        assert_eq!(key(&element, "attrs/*/name='serial'/value"), None);
    }
}
