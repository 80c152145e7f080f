//! Tabular detector: decides when an array of objects emits as a table.

use crate::value::Value;

/// Returns the field list (in the first element's insertion order) iff `items`
/// qualifies for tabular form: non-empty, every element an object, every
/// element sharing the first element's key set (order may differ), and every
/// leaf value at those keys a primitive.
pub fn detect_tabular_fields(items: &[Value]) -> Option<Vec<String>> {
    let first_map = match items.first()? {
        Value::Object(m) => m,
        _ => return None,
    };
    if first_map.is_empty() {
        return None;
    }
    let fields: Vec<String> = first_map.keys().cloned().collect();

    for item in items {
        let map = match item {
            Value::Object(m) => m,
            _ => return None,
        };
        if map.len() != fields.len() {
            return None;
        }
        for field in &fields {
            match map.get(field) {
                Some(v) if v.is_primitive() => {}
                _ => return None,
            }
        }
    }

    Some(fields)
}
