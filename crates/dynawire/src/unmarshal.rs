//! Result unmarshaling: tagged response items back to plain mappings.

use serde_json::{Map, Value};
use tracing::warn;

use crate::request::PlainItem;

/// Unmarshal one tagged response item.
///
/// Strips each attribute's wire type tag and keeps the raw stringified value.
/// Type fidelity is not restored: a numeric attribute comes back as its
/// decimal string, and callers that need typed results must re-parse. An
/// attribute whose value is not a single-entry tagged map is skipped with a
/// warning rather than failing the whole item.
pub fn unmarshal_item(item: &Map<String, Value>) -> PlainItem {
    let mut plain = PlainItem::new();
    for (name, tagged) in item {
        let raw = tagged.as_object().and_then(|tags| tags.values().next());
        match raw {
            Some(Value::String(s)) => {
                plain.insert(name.clone(), s.clone());
            }
            Some(other) => {
                // Defensive: some stores send numbers unquoted.
                plain.insert(name.clone(), other.to_string());
            }
            None => {
                warn!(attribute = %name, "skipping attribute without a tagged value");
            }
        }
    }
    plain
}

/// Unmarshal a response item list.
pub fn unmarshal_items(items: &[Map<String, Value>]) -> Vec<PlainItem> {
    items.iter().map(unmarshal_item).collect()
}
