//! Encoder: walks a normalized [`Value`] and emits TOON text.
//!
//! Dispatches each object field and array through the key-fold planner
//! ([`crate::fold`]) and tabular detector ([`crate::tabular`]) per the emission
//! table in the component design, preserving insertion order throughout — no
//! step in this module ever sorts a map's keys.

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fold::{self, FoldResult};
use crate::map::Map;
use crate::normalize::{self, to_value};
use crate::options::EncodeOptions;
use crate::primitive::{self, encode_primitive};
use crate::tabular::detect_tabular_fields;
use crate::value::Value;
use crate::writer::LineWriter;

/// Serializes `value` to a TOON string using default options.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes `value` to a TOON string using the given options.
pub fn to_string_with_options<T: Serialize + ?Sized>(
    value: &T,
    options: &EncodeOptions,
) -> Result<String> {
    let normalized = to_value(value)?;
    encode_value(&normalized, options)
}

/// Serializes `value` directly into a writer.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    to_writer_with_options(&mut writer, value, &EncodeOptions::default())
}

pub fn to_writer_with_options<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(e.to_string()))
}

/// Encodes an already-normalized [`Value`] to TOON text (`encode` in the
/// public operations table).
pub fn encode_value(value: &Value, options: &EncodeOptions) -> Result<String> {
    options.validate()?;
    let root = resolve_root(value, options);
    let root_literal_keys = fold::collect_root_literal_keys(&root);
    let mut writer = LineWriter::new(options.indent);
    encode_root(&root, &mut writer, options, &root_literal_keys);
    Ok(writer.finish())
}

/// Encodes an already-normalized [`Value`] to a vector of lines, no trailing
/// newline on any entry (`encodeLines` in the public operations table).
pub fn encode_lines(value: &Value, options: &EncodeOptions) -> Result<Vec<String>> {
    options.validate()?;
    let root = resolve_root(value, options);
    let root_literal_keys = fold::collect_root_literal_keys(&root);
    let mut writer = LineWriter::new(options.indent);
    encode_root(&root, &mut writer, options, &root_literal_keys);
    Ok(writer.into_lines())
}

fn resolve_root(value: &Value, options: &EncodeOptions) -> Value {
    apply_replacer("", value, &[], options).unwrap_or_else(|| value.clone())
}

fn apply_replacer(
    key: &str,
    value: &Value,
    path: &[String],
    options: &EncodeOptions,
) -> Option<Value> {
    match &options.replacer {
        None => Some(value.clone()),
        Some(f) => f(key, value, path).map(normalize::renormalize),
    }
}

fn encode_key(key: &str) -> String {
    if fold::is_identifier_segment(key) {
        key.to_string()
    } else {
        format!("\"{}\"", primitive::escape_string(key))
    }
}

/// A tabular header field name follows the same quoting rules as a string
/// primitive (§4.7): quoted whenever it isn't safe unquoted under the
/// array's active delimiter.
fn encode_field_name(field: &str, delimiter: char) -> String {
    if primitive::is_safe_unquoted(field, delimiter) {
        field.to_string()
    } else {
        format!("\"{}\"", primitive::escape_string(field))
    }
}

fn encode_root(
    root: &Value,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    root_literal_keys: &HashSet<String>,
) {
    match root {
        Value::Object(map) => {
            if !map.is_empty() {
                encode_object_fields(map, 0, writer, options, &[], root_literal_keys);
            }
        }
        Value::Array(items) => {
            encode_array_field("", items, 0, writer, options, &[], root_literal_keys);
        }
        primitive => {
            writer.push(
                0,
                encode_primitive(primitive, options.delimiter.as_char(), options.quote_strings),
            );
        }
    }
}

fn encode_object_fields(
    map: &Map,
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    let mut used_keys: HashSet<String> = map.keys().cloned().collect();
    let path_prefix = path.join(".");
    let prefix_opt = if path.is_empty() {
        None
    } else {
        Some(path_prefix.as_str())
    };

    for (key, raw_value) in map.iter() {
        let mut child_path = path.to_vec();
        child_path.push(key.clone());
        let value = match apply_replacer(key, raw_value, &child_path, options) {
            Some(v) => v,
            None => continue,
        };

        let siblings: Vec<String> = used_keys.iter().filter(|k| *k != key).cloned().collect();
        if let Some(fold_result) = fold::try_fold_key_chain(
            key,
            &value,
            &siblings,
            options,
            Some(root_literal_keys),
            prefix_opt,
        ) {
            used_keys.insert(fold_result.folded_key.clone());
            encode_folded_field(&fold_result, depth, writer, options, &child_path, root_literal_keys);
        } else {
            encode_named_value(key, &value, depth, writer, options, &child_path, root_literal_keys);
        }
    }
}

fn encode_folded_field(
    fold_result: &FoldResult,
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    let key_text = fold_result.folded_key.clone();
    match &fold_result.remainder {
        None => emit_named_leaf(
            &key_text,
            &fold_result.leaf_value,
            depth,
            writer,
            options,
            path,
            root_literal_keys,
        ),
        Some(Value::Object(remainder_map)) => {
            writer.push(depth, format!("{key_text}:"));
            encode_object_fields(remainder_map, depth + 1, writer, options, path, root_literal_keys);
        }
        Some(_) => unreachable!("fold remainder is always an object"),
    }
}

fn encode_named_value(
    key: &str,
    value: &Value,
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    emit_named_leaf(&encode_key(key), value, depth, writer, options, path, root_literal_keys);
}

/// Shared by both the literal and folded paths: `key_text` is already the
/// fully-formatted (quoted if needed, or dotted) key text.
fn emit_named_leaf(
    key_text: &str,
    value: &Value,
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    match value {
        Value::Object(map) => {
            writer.push(depth, format!("{key_text}:"));
            if !map.is_empty() {
                encode_object_fields(map, depth + 1, writer, options, path, root_literal_keys);
            }
        }
        Value::Array(items) => {
            encode_array_field(key_text, items, depth, writer, options, path, root_literal_keys);
        }
        primitive => {
            let line = format!(
                "{key_text}: {}",
                encode_primitive(primitive, options.delimiter.as_char(), options.quote_strings)
            );
            writer.push(depth, line);
        }
    }
}

fn encode_array_field(
    key_text: &str,
    items: &[Value],
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    // Each element gets a replacer call with its string index as key and the
    // full path including that index, same as an object's own fields — this
    // runs once here regardless of whether the element ends up an inline
    // primitive, a tabular row, or a list item below.
    let items: Vec<Value> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let index_key = i.to_string();
            let mut child_path = path.to_vec();
            child_path.push(index_key.clone());
            apply_replacer(&index_key, item, &child_path, options)
        })
        .collect();
    let items = items.as_slice();

    let n = items.len();
    let suffix = options
        .delimiter
        .header_symbol()
        .map(|c| c.to_string())
        .unwrap_or_default();

    if n == 0 {
        writer.push(depth, format!("{key_text}[0]:"));
        return;
    }

    if items.iter().all(Value::is_primitive) {
        let delim = options.delimiter.as_char();
        let row = items
            .iter()
            .map(|v| encode_primitive(v, delim, options.quote_strings))
            .collect::<Vec<_>>()
            .join(&delim.to_string());
        writer.push(depth, format!("{key_text}[{n}{suffix}]: {row}"));
        return;
    }

    if let Some(fields) = detect_tabular_fields(items) {
        let delim = options.delimiter.as_char();
        let header_fields = fields
            .iter()
            .map(|f| encode_field_name(f, delim))
            .collect::<Vec<_>>()
            .join(&delim.to_string());
        let header = format!("{key_text}[{n}{suffix}]{{{header_fields}}}:");
        writer.push(depth, header);
        for item in items {
            let map = item.as_object().expect("tabular detector guarantees objects");
            let row = fields
                .iter()
                .map(|f| encode_primitive(map.get(f).unwrap_or(&Value::Null), delim, options.quote_strings))
                .collect::<Vec<_>>()
                .join(&delim.to_string());
            writer.push(depth + 1, row);
        }
        return;
    }

    writer.push(depth, format!("{key_text}[{n}{suffix}]:"));
    for item in items {
        encode_list_item_value(item, depth + 1, writer, options, path, root_literal_keys);
    }
}

fn encode_list_item_value(
    value: &Value,
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            as_list_item(depth, options.indent, writer, |inner| {
                encode_object_fields_from_list_item(map, depth, inner, options, path, root_literal_keys);
            });
        }
        Value::Array(items) if !items.is_empty() => {
            as_list_item(depth, options.indent, writer, |inner| {
                encode_array_field("", items, depth, inner, options, path, root_literal_keys);
            });
        }
        Value::Object(_) => writer.push_bare_dash(depth),
        Value::Array(_) => writer.push_list_item(depth, "[0]:"),
        primitive => writer.push_list_item(
            depth,
            encode_primitive(primitive, options.delimiter.as_char(), options.quote_strings),
        ),
    }
}

/// Encodes a list item's object fields per the "`- firstKey: value` then
/// remaining fields at depth+1" emission rule: the first field (after replacer
/// filtering) is emitted at the list item's own `depth` — any lines it spans
/// (a nested object's children, an array's rows) fall out at the right depth
/// from the ordinary +1-per-level recursion — so [`as_list_item`] only has to
/// re-home that single opening line onto the `- ` marker. Every other field is
/// a normal field one level deeper, written directly with no splicing.
fn encode_object_fields_from_list_item(
    map: &Map,
    depth: usize,
    writer: &mut LineWriter,
    options: &EncodeOptions,
    path: &[String],
    root_literal_keys: &HashSet<String>,
) {
    let all_keys: Vec<String> = map.keys().cloned().collect();
    let mut first_emitted = false;
    let mut rest = Map::new();

    for (key, raw_value) in map.iter() {
        let mut child_path = path.to_vec();
        child_path.push(key.clone());
        let value = match apply_replacer(key, raw_value, &child_path, options) {
            Some(v) => v,
            None => continue,
        };
        if first_emitted {
            rest.insert(key.clone(), raw_value.clone());
            continue;
        }
        first_emitted = true;
        let siblings: Vec<String> = all_keys.iter().filter(|k| *k != key).cloned().collect();
        let path_prefix = path.join(".");
        let prefix_opt = if path.is_empty() { None } else { Some(path_prefix.as_str()) };
        if let Some(fold_result) =
            fold::try_fold_key_chain(key, &value, &siblings, options, Some(root_literal_keys), prefix_opt)
        {
            encode_folded_field(&fold_result, depth, writer, options, &child_path, root_literal_keys);
        } else {
            encode_named_value(key, &value, depth, writer, options, &child_path, root_literal_keys);
        }
    }

    if !rest.is_empty() {
        encode_object_fields(&rest, depth + 1, writer, options, path, root_literal_keys);
    }
}

/// Writes whatever `f` produces at `depth` into a scratch writer, then splices
/// its first line onto a `- `-prefixed line at the same `depth` — this is how
/// an object or nested array renders as a single list item without
/// duplicating the object/array encoding logic. Every line after the first is
/// already at its correct final depth (ordinary recursion starting from
/// `depth` puts nested content at `depth+1`, `depth+2`, ...), so only the
/// opening line needs its indent traded for the `- ` marker.
fn as_list_item<F: FnOnce(&mut LineWriter)>(
    depth: usize,
    indent_width: usize,
    writer: &mut LineWriter,
    f: F,
) {
    let mut inner = LineWriter::new(indent_width);
    f(&mut inner);
    let mut lines = inner.into_lines();
    if lines.is_empty() {
        writer.push_bare_dash(depth);
        return;
    }
    let first = lines.remove(0);
    let strip_width = depth * indent_width;
    let content = if first.len() >= strip_width {
        &first[strip_width..]
    } else {
        first.as_str()
    };
    let base_indent = " ".repeat(depth * indent_width);
    writer.push_raw(format!("{base_indent}- {content}"));
    for line in lines {
        writer.push_raw(line);
    }
}
