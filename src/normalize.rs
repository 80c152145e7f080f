//! Normalizer: maps any `serde::Serialize` host value into the normalized [`Value`].
//!
//! This is applied eagerly at encoder entry and again after every replacer call
//! (see [`crate::options::EncodeOptions::replacer`]). Unsupported or non-finite
//! values silently coerce to `Value::Null` rather than raising an error — the
//! only coercion point in the system that doesn't surface an error type of its own.
//!
//! A host type's own `Serialize` impl doubles as its "self-serialization hook":
//! `chrono::DateTime<Utc>` (with the `serde` feature) already serializes as an
//! RFC 3339 string, and `num_bigint::BigInt`/`BigUint` (with the `serde` feature)
//! serialize as a plain decimal string for human-readable formats — both land
//! here as ordinary `serialize_str` calls with no special-casing required.

use serde::ser::{
    Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

use crate::error::Error;
use crate::map::Map;
use crate::value::Value;

/// The largest integer magnitude exactly representable as an `f64`.
const SAFE_INTEGER_LIMIT: i128 = 1 << 53;

/// Normalizes any `Serialize` value into a [`Value`] tree.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<Value> {
    value.serialize(ValueSerializer)
}

fn int_to_value(n: i128) -> Value {
    if n.unsigned_abs() <= SAFE_INTEGER_LIMIT as u128 {
        Value::Number(n as f64)
    } else {
        Value::String(n.to_string())
    }
}

fn uint_to_value(n: u128) -> Value {
    if n <= SAFE_INTEGER_LIMIT as u128 {
        Value::Number(n as f64)
    } else {
        Value::String(n.to_string())
    }
}

pub struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = TupleVariantSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = StructVariantSerializer;

    fn serialize_bool(self, v: bool) -> crate::error::Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> crate::error::Result<Value> {
        Ok(int_to_value(v as i128))
    }
    fn serialize_i16(self, v: i16) -> crate::error::Result<Value> {
        Ok(int_to_value(v as i128))
    }
    fn serialize_i32(self, v: i32) -> crate::error::Result<Value> {
        Ok(int_to_value(v as i128))
    }
    fn serialize_i64(self, v: i64) -> crate::error::Result<Value> {
        Ok(int_to_value(v as i128))
    }
    fn serialize_i128(self, v: i128) -> crate::error::Result<Value> {
        Ok(int_to_value(v))
    }

    fn serialize_u8(self, v: u8) -> crate::error::Result<Value> {
        Ok(uint_to_value(v as u128))
    }
    fn serialize_u16(self, v: u16) -> crate::error::Result<Value> {
        Ok(uint_to_value(v as u128))
    }
    fn serialize_u32(self, v: u32) -> crate::error::Result<Value> {
        Ok(uint_to_value(v as u128))
    }
    fn serialize_u64(self, v: u64) -> crate::error::Result<Value> {
        Ok(uint_to_value(v as u128))
    }
    fn serialize_u128(self, v: u128) -> crate::error::Result<Value> {
        Ok(uint_to_value(v))
    }

    fn serialize_f32(self, v: f32) -> crate::error::Result<Value> {
        Ok(Value::from_f64(v as f64))
    }
    fn serialize_f64(self, v: f64) -> crate::error::Result<Value> {
        Ok(Value::from_f64(v))
    }

    fn serialize_char(self, v: char) -> crate::error::Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> crate::error::Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> crate::error::Result<Value> {
        let items = v.iter().map(|b| Value::Number(*b as f64)).collect();
        Ok(Value::Array(items))
    }

    fn serialize_none(self) -> crate::error::Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> crate::error::Result<Value>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> crate::error::Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> crate::error::Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> crate::error::Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> crate::error::Result<Value>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> crate::error::Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let mut map = Map::new();
        map.insert(variant.to_string(), value.serialize(ValueSerializer)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> crate::error::Result<SeqSerializer> {
        Ok(SeqSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> crate::error::Result<SeqSerializer> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> crate::error::Result<SeqSerializer> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> crate::error::Result<TupleVariantSerializer> {
        Ok(TupleVariantSerializer {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> crate::error::Result<MapSerializer> {
        Ok(MapSerializer {
            map: Map::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> crate::error::Result<MapSerializer> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> crate::error::Result<StructVariantSerializer> {
        Ok(StructVariantSerializer {
            variant,
            map: Map::with_capacity(len),
        })
    }
}

pub struct SeqSerializer {
    items: Vec<Value>,
}

impl SerializeSeq for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> crate::error::Result<Value> {
        Ok(Value::Array(self.items))
    }
}

impl SerializeTuple for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> crate::error::Result<Value> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> crate::error::Result<Value> {
        SerializeSeq::end(self)
    }
}

pub struct TupleVariantSerializer {
    variant: &'static str,
    items: Vec<Value>,
}

impl SerializeTupleVariant for TupleVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> crate::error::Result<Value> {
        let mut map = Map::new();
        map.insert(self.variant.to_string(), Value::Array(self.items));
        Ok(Value::Object(map))
    }
}

pub struct MapSerializer {
    map: Map,
    next_key: Option<String>,
}

fn key_to_string(value: Value) -> crate::error::Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(crate::primitive::format_number(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        _ => Err(Error::config("map keys must be representable as strings")),
    }
}

impl SerializeMap for MapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key_value = key.serialize(ValueSerializer)?;
        self.next_key = Some(key_to_string(key_value)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key = self
            .next_key
            .take()
            .expect("serialize_value called before serialize_key");
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> crate::error::Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl SerializeStruct for MapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> crate::error::Result<Value> {
        Ok(Value::Object(self.map))
    }
}

pub struct StructVariantSerializer {
    variant: &'static str,
    map: Map,
}

impl SerializeStructVariant for StructVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> crate::error::Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> crate::error::Result<Value> {
        let mut outer = Map::new();
        outer.insert(self.variant.to_string(), Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

/// Re-normalizes an already-normalized value (used after a replacer call, which may
/// hand back host values embedded in a `Value::Object`/`Value::Array` from arbitrary
/// construction paths). `Value` is always already in canonical form, so this is the
/// identity — kept as a named entry point to match the dataflow in the component design.
pub fn renormalize(value: Value) -> Value {
    value
}
