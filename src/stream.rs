//! Streaming decoder: a pull-based event sequence over a decoded document.
//!
//! Events mirror the tree shape (`StartObject`/`EndObject`, `StartArray`/`EndArray`,
//! `Key`, `Primitive`) rather than handing back a materialized [`Value`] — useful
//! for a caller building its own structure incrementally, or bailing out early
//! without paying for the rest of the document. Path expansion is unavailable here:
//! expansion needs the whole tree in hand to detect collisions, which defeats the
//! point of a pull-based API, so [`StreamDecoder::new`] rejects it up front.

use std::collections::VecDeque;

use crate::de;
use crate::error::{Error, Result};
use crate::options::{DecodeOptions, PathExpansion};
use crate::value::Value;

/// One step of a streamed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StartObject,
    EndObject,
    /// `length` is the number of elements the array's header declared.
    StartArray { length: usize },
    EndArray,
    /// An object field's key. `was_quoted` is always `false` — key-quoting is not
    /// tracked once a key has been folded into the decoded tree.
    Key { name: String, was_quoted: bool },
    Primitive(Value),
}

fn build_events(value: &Value, events: &mut Vec<Event>) {
    match value {
        Value::Array(items) => {
            events.push(Event::StartArray { length: items.len() });
            for item in items {
                build_events(item, events);
            }
            events.push(Event::EndArray);
        }
        Value::Object(map) => {
            events.push(Event::StartObject);
            for (key, v) in map.iter() {
                events.push(Event::Key {
                    name: key.clone(),
                    was_quoted: false,
                });
                build_events(v, events);
            }
            events.push(Event::EndObject);
        }
        other => events.push(Event::Primitive(other.clone())),
    }
}

/// A pull-based iterator over one decoded document's events.
pub struct StreamDecoder {
    events: VecDeque<Event>,
}

impl StreamDecoder {
    /// Builds a stream decoder over `text` using default options.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_options(text, &DecodeOptions::default())
    }

    /// Builds a stream decoder over `text`. Returns [`Error::Config`] if
    /// `options.expand_paths` is [`PathExpansion::Safe`].
    pub fn with_options(text: &str, options: &DecodeOptions) -> Result<Self> {
        if matches!(options.expand_paths, PathExpansion::Safe) {
            return Err(Error::config(
                "path expansion is not available when streaming; decode to a Value instead",
            ));
        }
        let value = de::decode_value_with_options(text, options)?;
        let mut events = Vec::new();
        build_events(&value, &mut events);
        Ok(StreamDecoder {
            events: events.into(),
        })
    }
}

impl Iterator for StreamDecoder {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Result<Event>> {
        self.events.pop_front().map(Ok)
    }
}

/// Builds a pull-based event stream over `text` using default decode options.
pub fn decode_stream(text: &str) -> Result<StreamDecoder> {
    StreamDecoder::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_flat_object_events() {
        let events: Vec<Event> = decode_stream("a: 1\nb: 2").unwrap().map(|e| e.unwrap()).collect();
        assert_eq!(
            events,
            vec![
                Event::StartObject,
                Event::Key {
                    name: "a".to_string(),
                    was_quoted: false
                },
                Event::Primitive(Value::Number(1.0)),
                Event::Key {
                    name: "b".to_string(),
                    was_quoted: false
                },
                Event::Primitive(Value::Number(2.0)),
                Event::EndObject,
            ]
        );
    }

    #[test]
    fn streams_array_with_length() {
        let events: Vec<Event> = decode_stream("items[2]: a,b").unwrap().map(|e| e.unwrap()).collect();
        assert!(matches!(events[1], Event::StartArray { length: 2 }));
    }

    #[test]
    fn rejects_path_expansion_in_streaming_mode() {
        let opts = DecodeOptions::default().with_expand_paths(PathExpansion::Safe);
        let result = StreamDecoder::with_options("a.b: 1", &opts);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
