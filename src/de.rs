//! TOON deserialization.
//!
//! This module parses TOON text into a [`Value`] tree (see [`decode_value`]), then
//! optionally drives an arbitrary `Deserialize` host type off that tree via
//! [`ValueDeserializer`] — the mirror of [`crate::normalize::to_value`].

use std::io::Read;

use serde::de::{
    DeserializeOwned, DeserializeSeed, Deserializer, EnumAccess, IntoDeserializer, MapAccess,
    SeqAccess, VariantAccess, Visitor,
};

use crate::error::{Error, Result};
use crate::header::{self, ArrayHeader};
use crate::map::Map;
use crate::options::DecodeOptions;
use crate::primitive::{decode_primitive_token, split_respecting_quotes, unescape_string};
use crate::scan::{self, ParsedLine};
use crate::value::Value;

/// Decodes `text` into a [`Value`] tree using default options.
pub fn decode_value(text: &str) -> Result<Value> {
    decode_value_with_options(text, &DecodeOptions::default())
}

/// Decodes `text` into a [`Value`] tree.
pub fn decode_value_with_options(text: &str, options: &DecodeOptions) -> Result<Value> {
    options.validate()?;
    let scanned = scan::scan(text, options)?;
    let lines = &scanned.lines;

    let value = if lines.is_empty() {
        Value::Object(Map::new())
    } else {
        decode_root(lines, options)?
    };

    let value = if matches!(options.expand_paths, crate::options::PathExpansion::Safe) {
        crate::expand::expand_paths(value, options.strict)?
    } else {
        value
    };

    Ok(value)
}

/// Deserializes `text` into `T` using default options.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    from_str_with_options(text, &DecodeOptions::default())
}

/// Deserializes `text` into `T`.
pub fn from_str_with_options<T: DeserializeOwned>(text: &str, options: &DecodeOptions) -> Result<T> {
    let value = decode_value_with_options(text, options)?;
    T::deserialize(ValueDeserializer(value))
}

/// Deserializes UTF-8 bytes into `T`.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::syntax(0, 0, e.to_string()))?;
    from_str(text)
}

/// Reads all of `reader` and deserializes it into `T`.
pub fn from_reader<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<T> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str(&text)
}

/// The shape a single classified line takes, independent of where it sits in the tree.
enum LineShape {
    ArrayHeader(ArrayHeader),
    KeyValue {
        key: String,
        value_text: String,
        #[allow(dead_code)]
        key_was_quoted: bool,
    },
    BarePrimitive(String),
}

fn classify(content: &str, line_number: usize) -> Result<LineShape> {
    if let Some(header) = header::try_parse_array_header(content, crate::options::Delimiter::Comma, line_number)? {
        return Ok(LineShape::ArrayHeader(header));
    }

    if let Some(body) = content.strip_prefix('"') {
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
                continue;
            }
            if c == '"' {
                let key = unescape_string(&body[..i]).map_err(|e| Error::syntax(line_number, 0, e))?;
                let tail = &body[i + 1..];
                let value_text = tail
                    .strip_prefix(':')
                    .ok_or_else(|| Error::syntax(line_number, 0, "expected ':' after quoted key"))?
                    .trim_start();
                return Ok(LineShape::KeyValue {
                    key,
                    value_text: value_text.to_string(),
                    key_was_quoted: true,
                });
            }
        }
        return Err(Error::syntax(line_number, 0, "unterminated quoted key"));
    }

    match content.find(':') {
        Some(idx) => {
            let key = content[..idx].to_string();
            if key.is_empty() {
                return Err(Error::syntax(line_number, 0, "missing key before ':'"));
            }
            Ok(LineShape::KeyValue {
                key,
                value_text: content[idx + 1..].trim_start().to_string(),
                key_was_quoted: false,
            })
        }
        None => Ok(LineShape::BarePrimitive(content.to_string())),
    }
}

fn is_dash_line(content: &str) -> bool {
    content == "-" || content.starts_with("- ")
}

fn decode_root(lines: &[ParsedLine], options: &DecodeOptions) -> Result<Value> {
    let first = &lines[0];
    match classify(&first.content, first.line_number)? {
        LineShape::ArrayHeader(header) if header.key.is_none() => {
            let (value, pos) = decode_array_from_header(lines, 0, &header, options)?;
            ensure_no_trailing(lines, pos, options)?;
            Ok(value)
        }
        LineShape::BarePrimitive(token) => {
            if lines.len() != 1 {
                return Err(Error::structure(
                    lines[1].line_number,
                    0,
                    "unexpected content after root primitive value",
                ));
            }
            decode_primitive_token(&token).map_err(|e| Error::syntax(first.line_number, 0, e))
        }
        _ => {
            let mut map = Map::new();
            let pos = decode_fields_into(lines, 0, 0, &mut map, options, false)?;
            ensure_no_trailing(lines, pos, options)?;
            Ok(Value::Object(map))
        }
    }
}

fn ensure_no_trailing(lines: &[ParsedLine], pos: usize, options: &DecodeOptions) -> Result<()> {
    if pos < lines.len() && options.strict {
        return Err(Error::structure(
            lines[pos].line_number,
            lines[pos].indent,
            "unexpected trailing content after root value",
        ));
    }
    Ok(())
}

/// Decodes an object's fields starting at `start_pos`, all expected at `depth`.
/// When `stop_at_dash` is set, a `- ` line at `depth` ends the run without error
/// (used when continuing a list item's inline fields); otherwise it's a structure
/// error ("list item where a field was expected").
fn decode_fields_into(
    lines: &[ParsedLine],
    start_pos: usize,
    depth: usize,
    map: &mut Map,
    options: &DecodeOptions,
    stop_at_dash: bool,
) -> Result<usize> {
    let mut pos = start_pos;
    while pos < lines.len() {
        let line = &lines[pos];
        if line.depth < depth {
            break;
        }
        if line.depth > depth {
            if options.strict {
                return Err(Error::indentation(
                    line.line_number,
                    line.indent,
                    "unexpected indentation increase",
                ));
            }
            break;
        }
        if is_dash_line(&line.content) {
            if stop_at_dash {
                break;
            }
            return Err(Error::structure(
                line.line_number,
                line.indent,
                "list item where a field was expected",
            ));
        }

        match classify(&line.content, line.line_number)? {
            LineShape::ArrayHeader(header) => {
                let key = header.key.clone().ok_or_else(|| {
                    Error::structure(line.line_number, line.indent, "unexpected array header with no key")
                })?;
                if map.contains_key(&key) {
                    return Err(Error::structure(
                        line.line_number,
                        line.indent,
                        format!("duplicate key {key:?}"),
                    ));
                }
                let (value, next_pos) = decode_array_from_header(lines, pos, &header, options)?;
                map.insert(key, value);
                pos = next_pos;
            }
            LineShape::KeyValue { key, value_text, .. } => {
                if map.contains_key(&key) {
                    return Err(Error::structure(
                        line.line_number,
                        line.indent,
                        format!("duplicate key {key:?}"),
                    ));
                }
                if value_text.is_empty() {
                    if pos + 1 < lines.len() && lines[pos + 1].depth == depth + 1 {
                        let mut child = Map::new();
                        let next_pos = decode_fields_into(lines, pos + 1, depth + 1, &mut child, options, false)?;
                        map.insert(key, Value::Object(child));
                        pos = next_pos;
                    } else {
                        map.insert(key, Value::Object(Map::new()));
                        pos += 1;
                    }
                } else {
                    let v = decode_primitive_token(&value_text).map_err(|e| Error::syntax(line.line_number, 0, e))?;
                    map.insert(key, v);
                    pos += 1;
                }
            }
            LineShape::BarePrimitive(_) => {
                return Err(Error::structure(
                    line.line_number,
                    line.indent,
                    "expected a field, found a bare value",
                ));
            }
        }
    }
    Ok(pos)
}

/// Decodes an array given its header and the line it was parsed from (`header_pos`).
/// Returns the value and the index of the first unconsumed line.
fn decode_array_from_header(
    lines: &[ParsedLine],
    header_pos: usize,
    header: &ArrayHeader,
    options: &DecodeOptions,
) -> Result<(Value, usize)> {
    let header_line = &lines[header_pos];
    let base_depth = header_line.depth;
    let n = header.length;

    if let Some(fields) = &header.fields {
        let mut pos = header_pos + 1;
        let mut rows = Vec::with_capacity(n);
        while rows.len() < n {
            if pos >= lines.len() || lines[pos].depth != base_depth + 1 {
                break;
            }
            let row_line = &lines[pos];
            let tokens = split_respecting_quotes(&row_line.content, header.delimiter.as_char())
                .map_err(|e| Error::syntax(row_line.line_number, 0, e))?;
            if tokens.len() != fields.len() {
                return Err(Error::structure(
                    row_line.line_number,
                    0,
                    format!("expected {} fields, found {}", fields.len(), tokens.len()),
                ));
            }
            let mut row_map = Map::new();
            for (field, token) in fields.iter().zip(tokens.iter()) {
                let v = decode_primitive_token(token).map_err(|e| Error::syntax(row_line.line_number, 0, e))?;
                row_map.insert(field.clone(), v);
            }
            rows.push(Value::Object(row_map));
            pos += 1;
        }
        if options.strict && rows.len() != n {
            return Err(Error::structure(
                header_line.line_number,
                header_line.indent,
                format!("declared length {n} but found {} rows", rows.len()),
            ));
        }
        Ok((Value::Array(rows), pos))
    } else if let Some(inline) = &header.inline_rest {
        let tokens = split_respecting_quotes(inline, header.delimiter.as_char())
            .map_err(|e| Error::syntax(header_line.line_number, 0, e))?;
        if options.strict && tokens.len() != n {
            return Err(Error::structure(
                header_line.line_number,
                header_line.indent,
                format!("declared length {n} but found {} inline values", tokens.len()),
            ));
        }
        let mut items = Vec::with_capacity(tokens.len());
        for t in &tokens {
            items.push(decode_primitive_token(t).map_err(|e| Error::syntax(header_line.line_number, 0, e))?);
        }
        Ok((Value::Array(items), header_pos + 1))
    } else if n == 0 {
        Ok((Value::Array(vec![]), header_pos + 1))
    } else {
        let mut pos = header_pos + 1;
        let mut items = Vec::with_capacity(n);
        while items.len() < n {
            if pos >= lines.len() || lines[pos].depth != base_depth + 1 || !is_dash_line(&lines[pos].content) {
                break;
            }
            let (item, next_pos) = decode_list_item(lines, pos, base_depth + 1, options)?;
            items.push(item);
            pos = next_pos;
        }
        if options.strict && items.len() != n {
            return Err(Error::structure(
                header_line.line_number,
                header_line.indent,
                format!("declared length {n} but found {} list items", items.len()),
            ));
        }
        Ok((Value::Array(items), pos))
    }
}

/// Decodes one `- ...` line (already confirmed to be a dash line at `depth`) and
/// any of its continuation lines, returning the item's value and the index of the
/// first line belonging to something else.
fn decode_list_item(lines: &[ParsedLine], pos: usize, depth: usize, options: &DecodeOptions) -> Result<(Value, usize)> {
    let line = &lines[pos];
    let item_content = if line.content == "-" {
        ""
    } else {
        line.content.strip_prefix("- ").unwrap_or(&line.content)
    };

    if item_content.is_empty() {
        return Ok((Value::Object(Map::new()), pos + 1));
    }

    match classify(item_content, line.line_number)? {
        LineShape::ArrayHeader(header) if header.key.is_none() => decode_array_from_header(lines, pos, &header, options),
        LineShape::ArrayHeader(header) => {
            let key = header.key.clone().unwrap();
            let (value, next_pos) = decode_array_from_header(lines, pos, &header, options)?;
            let mut map = Map::new();
            map.insert(key, value);
            let final_pos = decode_fields_into(lines, next_pos, depth + 1, &mut map, options, true)?;
            Ok((Value::Object(map), final_pos))
        }
        LineShape::KeyValue { key, value_text, .. } => {
            let mut map = Map::new();
            let next_pos = if value_text.is_empty() {
                if pos + 1 < lines.len() && lines[pos + 1].depth == depth + 1 {
                    let mut child = Map::new();
                    let after = decode_fields_into(lines, pos + 1, depth + 1, &mut child, options, false)?;
                    map.insert(key, Value::Object(child));
                    after
                } else {
                    map.insert(key, Value::Object(Map::new()));
                    pos + 1
                }
            } else {
                let v = decode_primitive_token(&value_text).map_err(|e| Error::syntax(line.line_number, 0, e))?;
                map.insert(key, v);
                pos + 1
            };
            let final_pos = decode_fields_into(lines, next_pos, depth + 1, &mut map, options, true)?;
            Ok((Value::Object(map), final_pos))
        }
        LineShape::BarePrimitive(token) => {
            let v = decode_primitive_token(&token).map_err(|e| Error::syntax(line.line_number, 0, e))?;
            Ok((v, pos + 1))
        }
    }
}

/// A [`serde::Deserializer`] that drives an arbitrary host type's `Deserialize` impl
/// off an already-decoded [`Value`] tree — the mirror of [`crate::normalize::to_value`].
pub struct ValueDeserializer(pub Value);

macro_rules! forward_to_deserialize_via_value {
    ($($method:ident),*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                self.deserialize_any(visitor)
            }
        )*
    };
}

/// Integers outside the safe-double range (`int_to_value`/`uint_to_value` in
/// `normalize.rs`) are normalized to a quoted decimal string rather than a
/// `Number`, so a host `i64`/`u64`/`i128`/`u128` field needs its value parsed
/// back out of that string — plain `deserialize_any` only knows how to hand a
/// `String` to `visit_string`, which a numeric visitor doesn't implement.
macro_rules! forward_integer_to_deserialize_via_value {
    ($($method:ident => $visit:ident),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                match self.0 {
                    Value::String(s) => match s.parse() {
                        Ok(n) => visitor.$visit(n),
                        Err(_) => Err(Error::Message(format!(
                            "invalid integer string {:?}",
                            s
                        ))),
                    },
                    other => ValueDeserializer(other).deserialize_any(visitor),
                }
            }
        )*
    };
}

impl<'de> Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => visitor.visit_f64(n),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => visitor.visit_seq(SeqDeserializer { iter: items.into_iter() }),
            Value::Object(map) => visitor.visit_map(MapDeserializer {
                iter: map.into_iter(),
                value: None,
            }),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(ValueDeserializer(other)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(map) => {
                if map.len() != 1 {
                    return Err(Error::Message(
                        "expected a single-key object for an enum variant".to_string(),
                    ));
                }
                let (key, value) = map.into_iter().next().unwrap();
                visitor.visit_enum(EnumDeserializer { variant: key, value })
            }
            _ => Err(Error::Message("expected a string or single-key object for an enum".to_string())),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_via_value!(
        deserialize_bool,
        deserialize_f32,
        deserialize_f64,
        deserialize_char,
        deserialize_str,
        deserialize_string,
        deserialize_bytes,
        deserialize_byte_buf,
        deserialize_unit,
        deserialize_seq,
        deserialize_map,
        deserialize_identifier,
        deserialize_ignored_any
    );

    forward_integer_to_deserialize_via_value!(
        deserialize_i8 => visit_i64,
        deserialize_i16 => visit_i64,
        deserialize_i32 => visit_i64,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u64,
        deserialize_u16 => visit_u64,
        deserialize_u32 => visit_u64,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128
    );

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(self, _name: &'static str, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl<'de> SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(v) => seed.deserialize(ValueDeserializer(v)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        let (lower, upper) = self.iter.size_hint();
        upper.or(Some(lower))
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl<'de> MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((k, v)) => {
                self.value = Some(v);
                seed.deserialize(k.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        let value = self.value.take().expect("next_value_seed called before next_key_seed");
        seed.deserialize(ValueDeserializer(value))
    }

    fn size_hint(&self) -> Option<usize> {
        let (lower, upper) = self.iter.size_hint();
        upper.or(Some(lower))
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(self.variant.into_deserializer())?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Object(m) if m.is_empty() => Ok(()),
            Value::Null => Ok(()),
            _ => Err(Error::Message("expected a unit variant".to_string())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(items) => visitor.visit_seq(SeqDeserializer { iter: items.into_iter() }),
            _ => Err(Error::Message("expected a tuple variant".to_string())),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(map) => visitor.visit_map(MapDeserializer {
                iter: map.into_iter(),
                value: None,
            }),
            _ => Err(Error::Message("expected a struct variant".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PathExpansion;

    #[test]
    fn decodes_flat_object() {
        let value = decode_value("name: Alice\nage: 30").unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(map.get("age").unwrap().as_f64(), Some(30.0));
    }

    #[test]
    fn decodes_nested_object() {
        let value = decode_value("user:\n  name: Ann\n  age: 1").unwrap();
        let user = value.as_object().unwrap().get("user").unwrap().as_object().unwrap();
        assert_eq!(user.get("name").unwrap().as_str(), Some("Ann"));
    }

    #[test]
    fn decodes_inline_primitive_array() {
        let value = decode_value("tags[3]: a,b,c").unwrap();
        let tags = value.as_object().unwrap().get("tags").unwrap().as_array().unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[1].as_str(), Some("b"));
    }

    #[test]
    fn decodes_tabular_array() {
        let text = "users[2]{id,name}:\n  1,Alice\n  2,Bob";
        let value = decode_value(text).unwrap();
        let users = value.as_object().unwrap().get("users").unwrap().as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(
            users[0].as_object().unwrap().get("name").unwrap().as_str(),
            Some("Alice")
        );
    }

    #[test]
    fn decodes_list_item_array() {
        let text = "items[2]:\n  - a\n  - b";
        let value = decode_value(text).unwrap();
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        assert_eq!(items[0].as_str(), Some("a"));
        assert_eq!(items[1].as_str(), Some("b"));
    }

    #[test]
    fn decodes_list_item_object() {
        let text = "items[1]:\n  - id: 1\n    name: Ann";
        let value = decode_value(text).unwrap();
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        let obj = items[0].as_object().unwrap();
        assert_eq!(obj.get("id").unwrap().as_f64(), Some(1.0));
        assert_eq!(obj.get("name").unwrap().as_str(), Some("Ann"));
    }

    #[test]
    fn strict_mode_rejects_declared_length_mismatch() {
        let result = decode_value("items[3]: 1,2");
        assert!(matches!(result, Err(Error::Structure { .. })));
    }

    #[test]
    fn non_strict_mode_tolerates_length_mismatch() {
        let opts = DecodeOptions::default().with_strict(false);
        let value = decode_value_with_options("items[3]: 1,2", &opts).unwrap();
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn rejects_duplicate_key_strict() {
        let result = decode_value("a: 1\na: 2");
        assert!(matches!(result, Err(Error::Structure { .. })));
    }

    #[test]
    fn rejects_tabular_row_with_wrong_field_count() {
        let text = "rows[1]{a,b}:\n  1,2,3";
        let result = decode_value(text);
        assert!(matches!(result, Err(Error::Structure { .. })));
    }

    #[test]
    fn decodes_bare_root_primitive() {
        let value = decode_value("42").unwrap();
        assert_eq!(value.as_f64(), Some(42.0));
    }

    #[test]
    fn decodes_root_array_header() {
        let value = decode_value("[2]: a,b").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_text_decodes_to_empty_object() {
        let value = decode_value("").unwrap();
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn decode_into_host_struct() {
        #[derive(serde::Deserialize, PartialEq, Debug)]
        struct Point {
            x: f64,
            y: f64,
        }
        let point: Point = from_str("x: 1\ny: 2").unwrap();
        assert_eq!(point, Point { x: 1.0, y: 2.0 });
    }

    #[test]
    fn path_expansion_is_applied_when_requested() {
        let opts = DecodeOptions::default().with_expand_paths(PathExpansion::Safe);
        let value = decode_value_with_options("user.name: Ann", &opts).unwrap();
        let user = value.as_object().unwrap().get("user").unwrap().as_object().unwrap();
        assert_eq!(user.get("name").unwrap().as_str(), Some("Ann"));
    }
}
