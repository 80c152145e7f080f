//! Ordered map type used as the object representation of [`Value`](crate::Value).
//!
//! TOON objects preserve insertion order end to end (encode, decode, re-encode),
//! so the object variant is backed by [`IndexMap`] rather than a hashing map.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::iter::FromIterator;

use crate::value::Value;

/// An ordered map of string keys to [`Value`]s.
///
/// # Examples
///
/// ```rust
/// use serde_toon::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("name".to_string(), Value::from("Alice"));
/// map.insert("age".to_string(), Value::from(30));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// // insertion order, not alphabetical, is preserved
/// assert_eq!(map.keys().next(), Some(&"name".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map(IndexMap<String, Value>);

impl Map {
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(map: HashMap<String, Value>) -> Self {
        Map(map.into_iter().collect())
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
