//! Key-fold planner: decides when a single-key object chain collapses into a
//! dotted path (`a: {b: {c: 1}}` → `a.b.c: 1`).
//!
//! Grounded on the same greedy-chain-collection approach used by the folding
//! utilities in the broader TOON ecosystem: walk down through single-key
//! objects, stop at the first branch or leaf, then validate every collected
//! segment is a safe identifier before committing to a fold.

use std::collections::HashSet;

use crate::map::Map;
use crate::options::{EncodeOptions, KeyFolding};
use crate::value::Value;

/// The outcome of folding one object field's key chain.
pub struct FoldResult {
    /// The folded, dot-joined key (e.g. `"a.b.c"`).
    pub folded_key: String,
    /// The remaining object to emit nested at depth+1, if the chain ended on a
    /// branch rather than a leaf.
    pub remainder: Option<Value>,
    /// The value at the end of the chain (a primitive/array/empty object when
    /// `remainder` is `None`; otherwise equal to `remainder`'s contents).
    pub leaf_value: Value,
    /// How many key segments were folded.
    pub segment_count: usize,
}

/// A valid unquoted identifier segment: ASCII letter or `_` start, then
/// letters/digits/`_`. Dots inside a literal key are never folded further.
pub fn is_identifier_segment(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(m) if m.is_empty())
}

/// Attempts to fold `key: value` into a dotted chain.
///
/// `siblings` lists literal (non-folded) keys already present at this emission
/// scope; `root_literal_keys`, when given, lists every literal dotted key
/// present anywhere at the document root, used to avoid producing a folded key
/// that would be indistinguishable from an unrelated literal key elsewhere.
pub fn try_fold_key_chain(
    key: &str,
    value: &Value,
    siblings: &[String],
    options: &EncodeOptions,
    root_literal_keys: Option<&HashSet<String>>,
    path_prefix: Option<&str>,
) -> Option<FoldResult> {
    if options.key_folding != KeyFolding::Safe {
        return None;
    }
    if !is_object(value) {
        return None;
    }

    let (segments, tail, leaf_value) =
        collect_single_key_chain(key, value, options.flatten_depth);

    if segments.len() < 2 {
        return None;
    }
    if !segments.iter().all(|seg| is_identifier_segment(seg)) {
        return None;
    }

    let folded_key = segments.join(".");

    let absolute_path = match path_prefix {
        Some(prefix) => format!("{prefix}.{folded_key}"),
        None => folded_key.clone(),
    };

    if siblings.contains(&folded_key) {
        return None;
    }
    if let Some(keys) = root_literal_keys {
        if keys.contains(&absolute_path) {
            return None;
        }
    }

    Some(FoldResult {
        folded_key,
        remainder: tail,
        leaf_value,
        segment_count: segments.len(),
    })
}

fn collect_single_key_chain(
    start_key: &str,
    start_value: &Value,
    max_depth: usize,
) -> (Vec<String>, Option<Value>, Value) {
    let mut segments = vec![start_key.to_string()];
    let mut current = start_value.clone();

    while segments.len() < max_depth {
        let obj = match &current {
            Value::Object(m) => m,
            _ => break,
        };
        if obj.len() != 1 {
            break;
        }
        let (next_key, next_value) = obj.iter().next().unwrap();
        segments.push(next_key.clone());
        current = next_value.clone();
    }

    if !is_object(&current) || is_empty_object(&current) {
        (segments, None, current)
    } else {
        (segments, Some(current.clone()), current)
    }
}

/// Collects every literal key at the document root that is itself already
/// written with a dot in it, for use as `root_literal_keys` above. Only the
/// root's own keys are considered — a folded key is only ever compared against
/// keys at the same emission scope, so walking into child objects would make
/// every legitimate fold collide with its own candidate path, since that path
/// is always already a member of the pre-fold tree it was derived from.
pub fn collect_root_literal_keys(root: &Value) -> HashSet<String> {
    let mut keys = HashSet::new();
    if let Value::Object(map) = root {
        for k in map.keys() {
            if k.contains('.') {
                keys.insert(k.clone());
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EncodeOptions;

    fn obj(pairs: Vec<(&str, Value)>) -> Value {
        let mut m = Map::new();
        for (k, v) in pairs {
            m.insert(k.to_string(), v);
        }
        Value::Object(m)
    }

    #[test]
    fn folds_single_key_chain_to_leaf() {
        let opts = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        let value = obj(vec![(
            "b",
            obj(vec![("c", obj(vec![("d", Value::Number(1.0))]))]),
        )]);
        let result = try_fold_key_chain("a", &value, &[], &opts, None, None).unwrap();
        assert_eq!(result.folded_key, "a.b.c.d");
        assert_eq!(result.leaf_value, Value::Number(1.0));
        assert!(result.remainder.is_none());
    }

    #[test]
    fn stops_folding_off_by_default() {
        let opts = EncodeOptions::new();
        let value = obj(vec![("b", Value::Number(1.0))]);
        assert!(try_fold_key_chain("a", &value, &[], &opts, None, None).is_none());
    }

    #[test]
    fn respects_flatten_depth() {
        let opts = EncodeOptions::new()
            .with_key_folding(KeyFolding::Safe)
            .with_flatten_depth(2);
        let value = obj(vec![(
            "b",
            obj(vec![("c", obj(vec![("d", Value::Number(1.0))]))]),
        )]);
        let result = try_fold_key_chain("a", &value, &[], &opts, None, None).unwrap();
        assert_eq!(result.folded_key, "a.b");
        assert!(result.remainder.is_some());
    }

    #[test]
    fn refuses_to_collide_with_sibling_literal_key() {
        let opts = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        let value = obj(vec![("b", Value::Number(1.0))]);
        let siblings = vec!["a.b".to_string()];
        assert!(try_fold_key_chain("a", &value, &siblings, &opts, None, None).is_none());
    }

    #[test]
    fn refuses_non_identifier_segments() {
        let opts = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        let value = obj(vec![("2bad", Value::Number(1.0))]);
        assert!(try_fold_key_chain("a", &value, &[], &opts, None, None).is_none());
    }
}
