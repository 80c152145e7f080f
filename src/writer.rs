//! Line writer: the encoder's sole output-building helper.
//!
//! Buffers lines as they're produced and joins them with LF on output. Kept
//! deliberately minimal per the "line writer" design note — a vector of
//! strings, not a general-purpose text buffer.

pub struct LineWriter {
    indent_width: usize,
    lines: Vec<String>,
}

impl LineWriter {
    pub fn new(indent_width: usize) -> Self {
        LineWriter {
            indent_width,
            lines: Vec::new(),
        }
    }

    /// Pushes a line at the given depth, prefixed with `depth * indent_width` spaces.
    pub fn push(&mut self, depth: usize, content: impl AsRef<str>) {
        let indent = " ".repeat(depth * self.indent_width);
        self.lines.push(format!("{indent}{}", content.as_ref()));
    }

    /// Pushes a list-item line (`- value`) at the given depth; `indent` spaces
    /// then `- ` precede the content, matching the encoder's list-item form.
    pub fn push_list_item(&mut self, depth: usize, content: impl AsRef<str>) {
        let indent = " ".repeat(depth * self.indent_width);
        self.lines.push(format!("{indent}- {}", content.as_ref()));
    }

    /// Pushes a line verbatim, with no indent applied — used when splicing
    /// already-indented lines produced by a nested encoding pass.
    pub fn push_raw(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Pushes a bare `-` list item marker (an empty object/array element),
    /// with no trailing space.
    pub fn push_bare_dash(&mut self, depth: usize) {
        let indent = " ".repeat(depth * self.indent_width);
        self.lines.push(format!("{indent}-"));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
