//! Error types for TOON serialization and deserialization.
//!
//! Every decode-time failure is one of the five kinds below; the encoder only
//! ever raises [`Error::Config`] (everything else is handled by normalization
//! coercing unsupported values to `null` rather than failing).
//!
//! ## Error kinds
//!
//! - [`Error::Config`] — invalid option value, raised at entry.
//! - [`Error::Syntax`] — scanner/header-parser malformation.
//! - [`Error::Indentation`] — tabs in indent, non-multiple indent, unexpected dedent.
//! - [`Error::Structure`] — declared-length mismatch, missing/extra fields, duplicate key.
//! - [`Error::PathConflict`] — path-expansion collision in strict mode.
//!
//! # Examples
//!
//! ```rust
//! use serde_toon::{from_str, Error, Value};
//!
//! // declared length 3 but only two values follow
//! let result: Result<Value, Error> = from_str("items[3]: 1,2");
//! assert!(matches!(result, Err(Error::Structure { .. })));
//! ```

use std::fmt;
use thiserror::Error as ThisError;

/// Represents all possible errors that can occur during TOON serialization/deserialization.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// Invalid option value (e.g. a zero indent width).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed syntax: bad header, unterminated string, invalid escape, missing colon.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Tabs in indentation, a non-multiple indent, or an unexpected dedent mid-element.
    #[error("indentation error at line {line}, column {column}: {message}")]
    Indentation {
        line: usize,
        column: usize,
        message: String,
    },

    /// Declared-length mismatch, missing/extra tabular fields, duplicate key, list item
    /// where a field was expected.
    #[error("structure error at line {line}, column {column}: {message}")]
    Structure {
        line: usize,
        column: usize,
        message: String,
    },

    /// A path-expansion collision encountered in strict mode.
    #[error("path conflict at line {line}, column {column}: {message}")]
    PathConflict {
        line: usize,
        column: usize,
        message: String,
    },

    /// I/O failure while reading from or writing to a stream.
    #[error("IO error: {0}")]
    Io(String),

    /// Catch-all for `serde::de`/`serde::ser` custom messages raised by a host type's
    /// own `Serialize`/`Deserialize` impl (e.g. "invalid length 3, expected 4").
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn indentation(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::Indentation {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn structure(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::Structure {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn path_conflict(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::PathConflict {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
