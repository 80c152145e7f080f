//! Configuration for encoding and decoding TOON.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Delimiter used to separate values inside one array's rows/header.
///
/// Declared per-array by the header's bracket suffix; comma is the default and
/// is never written out, since the decoder assumes comma when no suffix is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The symbol written in a header's `[N<sym>]` suffix, or `None` for the
    /// default comma (which is never written).
    pub fn header_symbol(self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }

    pub fn from_header_symbol(c: char) -> Option<Self> {
        match c {
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            ',' => Some(Delimiter::Comma),
            _ => None,
        }
    }
}

/// Whether the encoder collapses single-key object chains into a dotted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFolding {
    #[default]
    Off,
    Safe,
}

/// Whether the decoder expands dotted keys back into nested objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathExpansion {
    #[default]
    Off,
    Safe,
}

/// A replacer transforms or omits a value during the encoder's walk.
///
/// Called with the current key (`""` at the root), the normalized value, and the
/// full path of keys/indices from the root. Returning `None` omits the entry;
/// the root itself cannot be omitted. Values returned are re-normalized before
/// emission, matching the rest of the normalizer's contract.
pub type Replacer = Rc<dyn Fn(&str, &Value, &[String]) -> Option<Value>>;

/// Options controlling TOON encoding.
#[derive(Clone)]
pub struct EncodeOptions {
    /// Spaces per indentation level. Default: `2`.
    pub indent: usize,
    /// Default row delimiter for arrays that don't declare their own. Default: comma.
    pub delimiter: Delimiter,
    /// Whether single-key object chains fold into dotted keys. Default: off.
    pub key_folding: KeyFolding,
    /// Maximum number of segments a single chain may fold. Default: unbounded.
    pub flatten_depth: usize,
    /// Always double-quote string primitives, even when safe unquoted. Default: false.
    pub quote_strings: bool,
    /// Optional transform/omit callback invoked during the encoder's walk.
    pub replacer: Option<Replacer>,
}

impl fmt::Debug for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("indent", &self.indent)
            .field("delimiter", &self.delimiter)
            .field("key_folding", &self.key_folding)
            .field("flatten_depth", &self.flatten_depth)
            .field("quote_strings", &self.quote_strings)
            .field("replacer", &self.replacer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            key_folding: KeyFolding::default(),
            flatten_depth: usize::MAX,
            quote_strings: false,
            replacer: None,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_key_folding(mut self, key_folding: KeyFolding) -> Self {
        self.key_folding = key_folding;
        self
    }

    pub fn with_flatten_depth(mut self, depth: usize) -> Self {
        self.flatten_depth = depth;
        self
    }

    pub fn with_quote_strings(mut self, quote_strings: bool) -> Self {
        self.quote_strings = quote_strings;
        self
    }

    pub fn with_replacer<F>(mut self, replacer: F) -> Self
    where
        F: Fn(&str, &Value, &[String]) -> Option<Value> + 'static,
    {
        self.replacer = Some(Rc::new(replacer));
        self
    }

    pub(crate) fn validate(&self) -> crate::error::Result<()> {
        if self.indent == 0 {
            return Err(crate::error::Error::config("indent must be at least 1"));
        }
        Ok(())
    }
}

/// Options controlling TOON decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Expected spaces per indentation level; must match the source. Default: `2`.
    pub indent: usize,
    /// Enforce the full strict-mode failure taxonomy. Default: true.
    pub strict: bool,
    /// Expand dotted keys into nested objects after decoding. Default: off.
    pub expand_paths: PathExpansion,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
            expand_paths: PathExpansion::default(),
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_expand_paths(mut self, expand_paths: PathExpansion) -> Self {
        self.expand_paths = expand_paths;
        self
    }

    pub(crate) fn validate(&self) -> crate::error::Result<()> {
        if self.indent == 0 {
            return Err(crate::error::Error::config("indent must be at least 1"));
        }
        Ok(())
    }
}
