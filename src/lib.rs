//! # serde_toon
//!
//! A Serde-compatible serialization library for the TOON (Token-Oriented Object
//! Notation) format: a line-oriented, indentation-based serialization of the JSON
//! data model designed for efficient token usage in LLM contexts.
//!
//! ## Key features
//!
//! - **Token-efficient**: no braces, brackets, or redundant quotes
//! - **Tabular arrays**: uniform arrays of primitive-valued objects compress to a
//!   header row plus one line per element
//! - **Serde-compatible**: works with `#[derive(Serialize, Deserialize)]` types via
//!   the normalizer/decoder round trip, or directly against [`Value`]
//! - **Order-preserving**: object keys and array elements keep their original order
//!   end to end, never sorted
//!
//! ## Quick start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_toon::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ## Tabular arrays
//!
//! ```rust
//! use serde::Serialize;
//! use serde_toon::to_string;
//!
//! #[derive(Serialize)]
//! struct Product { id: u32, name: String, price: f64 }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//! let toon = to_string(&products).unwrap();
//! assert_eq!(toon, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99");
//! ```
//!
//! See [`spec`] for the full format description.

pub mod de;
pub mod error;
pub mod expand;
pub mod fold;
pub mod header;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod options;
pub mod primitive;
pub mod scan;
pub mod ser;
pub mod spec;
pub mod stream;
pub mod tabular;
pub mod value;
pub mod writer;

pub use de::{from_reader, from_slice, from_str, from_str_with_options, ValueDeserializer};
pub use error::{Error, Result};
pub use map::Map;
pub use normalize::to_value;
pub use options::{Delimiter, DecodeOptions, EncodeOptions, KeyFolding, PathExpansion, Replacer};
pub use ser::{encode_lines, encode_value as encode, to_string, to_string_with_options, to_writer, to_writer_with_options};
pub use stream::{decode_stream, Event, StreamDecoder};
pub use value::Value;

/// Decodes `text` into a [`Value`] tree using default options (`decode` in the
/// public operations table).
pub fn decode(text: &str) -> Result<Value> {
    de::decode_value(text)
}

/// Decodes `text` into a [`Value`] tree using the given options.
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Value> {
    de::decode_value_with_options(text, options)
}
