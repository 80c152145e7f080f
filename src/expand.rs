//! Path expander: the decode-time inverse of the key-fold planner.
//!
//! Walks a decoded tree and, wherever a key's segments are all valid
//! identifiers joined by `.`, rewrites it into the corresponding chain of
//! nested single-key objects. Runs as a post-processing pass over the whole
//! tree rather than threaded through the line-by-line decode, since folded
//! keys carry no other structural marker — the decoder itself never needs to
//! know expansion is coming.

use crate::error::{Error, Result};
use crate::fold::is_identifier_segment;
use crate::map::Map;
use crate::value::Value;

/// Expands every dotted key throughout `value`. In strict mode, a path that
/// would overwrite an already-populated leaf or parent is a [`Error::PathConflict`];
/// in non-strict mode the later entry silently wins (objects deep-merge, a
/// leaf-vs-parent clash is resolved by replacing the leaf with a parent).
pub fn expand_paths(value: Value, strict: bool) -> Result<Value> {
    match value {
        Value::Object(map) => Ok(Value::Object(expand_object(map, strict)?)),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(expand_paths(item, strict)?);
            }
            Ok(Value::Array(out))
        }
        other => Ok(other),
    }
}

fn expand_object(map: Map, strict: bool) -> Result<Map> {
    let mut result = Map::new();
    for (key, value) in map.into_iter() {
        let value = expand_paths(value, strict)?;
        let segments: Vec<&str> = key.split('.').collect();
        if segments.len() < 2 || !segments.iter().all(|seg| is_identifier_segment(seg)) {
            insert_literal(&mut result, key, value, strict)?;
            continue;
        }
        insert_path(&mut result, &segments, value, strict)?;
    }
    Ok(result)
}

/// Inserts a key that will not be split any further, checking for a collision
/// with an entry a previously-processed dotted key already expanded into this
/// same scope (order in the source object is not guaranteed to put a literal
/// key before the dotted key it collides with).
fn insert_literal(map: &mut Map, key: String, value: Value, strict: bool) -> Result<()> {
    if map.contains_key(&key) && strict {
        return Err(Error::path_conflict(0, 0, format!("conflicting path at key {key:?}")));
    }
    map.insert(key, value);
    Ok(())
}

fn insert_path(map: &mut Map, segments: &[&str], value: Value, strict: bool) -> Result<()> {
    if segments.len() == 1 {
        return insert_literal(map, segments[0].to_string(), value, strict);
    }

    let head = segments[0];
    match map.get_mut(head) {
        Some(Value::Object(child)) => insert_path(child, &segments[1..], value, strict),
        Some(_) if strict => Err(Error::path_conflict(
            0,
            0,
            format!("path segment {head:?} is both a leaf value and a parent path"),
        )),
        _ => {
            let mut child = Map::new();
            insert_path(&mut child, &segments[1..], value, strict)?;
            map.insert(head.to_string(), Value::Object(child));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(pairs: Vec<(&str, Value)>) -> Value {
        let mut m = Map::new();
        for (k, v) in pairs {
            m.insert(k.to_string(), v);
        }
        Value::Object(m)
    }

    #[test]
    fn expands_single_dotted_key() {
        let value = obj(vec![("a.b.c", Value::Number(1.0))]);
        let expanded = expand_paths(value, true).unwrap();
        let a = expanded.as_object().unwrap().get("a").unwrap().as_object().unwrap();
        let b = a.get("b").unwrap().as_object().unwrap();
        assert_eq!(b.get("c").unwrap().as_f64(), Some(1.0));
    }

    #[test]
    fn merges_siblings_under_shared_prefix() {
        let value = obj(vec![("a.b", Value::Number(1.0)), ("a.c", Value::Number(2.0))]);
        let expanded = expand_paths(value, true).unwrap();
        let a = expanded.as_object().unwrap().get("a").unwrap().as_object().unwrap();
        assert_eq!(a.get("b").unwrap().as_f64(), Some(1.0));
        assert_eq!(a.get("c").unwrap().as_f64(), Some(2.0));
    }

    #[test]
    fn strict_mode_rejects_leaf_parent_conflict() {
        let value = obj(vec![("a", Value::Number(1.0)), ("a.b", Value::Number(2.0))]);
        let result = expand_paths(value, true);
        assert!(matches!(result, Err(Error::PathConflict { .. })));
    }

    #[test]
    fn non_strict_mode_resolves_conflict_by_replacement() {
        let value = obj(vec![("a", Value::Number(1.0)), ("a.b", Value::Number(2.0))]);
        let expanded = expand_paths(value, false).unwrap();
        let a = expanded.as_object().unwrap().get("a").unwrap().as_object().unwrap();
        assert_eq!(a.get("b").unwrap().as_f64(), Some(2.0));
    }

    #[test]
    fn strict_mode_rejects_leaf_parent_conflict_regardless_of_key_order() {
        // Same conflict as `strict_mode_rejects_leaf_parent_conflict`, but with
        // the dotted key appearing first in source order, so the literal "a"
        // key is the one inserted second.
        let value = obj(vec![("a.b", Value::Number(2.0)), ("a", Value::Number(1.0))]);
        let result = expand_paths(value, true);
        assert!(matches!(result, Err(Error::PathConflict { .. })));
    }

    #[test]
    fn leaves_non_identifier_dotted_keys_untouched() {
        let value = obj(vec![("2bad.key", Value::Number(1.0))]);
        let expanded = expand_paths(value, true).unwrap();
        assert_eq!(expanded.as_object().unwrap().get("2bad.key").unwrap().as_f64(), Some(1.0));
    }
}
