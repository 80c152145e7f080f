//! Line scanner: turns decoder input text into structured line records.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

pub type Depth = usize;

/// One non-blank scanned line.
#[derive(Debug, Clone)]
pub struct ParsedLine {
    pub raw: String,
    pub depth: Depth,
    pub indent: usize,
    pub content: String,
    pub line_number: usize,
}

/// A blank line, kept separately from [`ParsedLine`]s — blank lines are not
/// structural tokens but their surrounding indent is occasionally consulted
/// by scope-aware validation.
#[derive(Debug, Clone)]
pub struct BlankLineInfo {
    pub line_number: usize,
}

pub struct ScanResult {
    pub lines: Vec<ParsedLine>,
    #[allow(dead_code)]
    pub blank_lines: Vec<BlankLineInfo>,
}

/// Splits `text` on LF (normalizing CRLF → LF first) into [`ParsedLine`]
/// records, validating indentation per `options.strict`.
pub fn scan(text: &str, options: &DecodeOptions) -> Result<ScanResult> {
    let normalized = text.replace("\r\n", "\n");
    let raw_lines: Vec<&str> = normalized.split('\n').collect();

    // A single trailing empty element means the text ended with exactly one
    // LF, which is permitted. Two or more means extra blank lines at EOF.
    let mut trailing_blank_run = 0;
    for line in raw_lines.iter().rev() {
        if line.is_empty() {
            trailing_blank_run += 1;
        } else {
            break;
        }
    }
    if options.strict && trailing_blank_run > 1 {
        return Err(Error::syntax(
            raw_lines.len(),
            0,
            "extra trailing newline at end of input",
        ));
    }

    let mut lines = Vec::new();
    let mut blank_lines = Vec::new();

    for (idx, raw) in raw_lines.iter().enumerate() {
        let line_number = idx + 1;
        if raw.is_empty() {
            blank_lines.push(BlankLineInfo { line_number });
            continue;
        }

        let indent = raw.len() - raw.trim_start_matches(' ').len();
        let rest = &raw[indent..];

        if options.strict {
            if rest.starts_with('\t') || raw[..indent].contains('\t') {
                return Err(Error::indentation(
                    line_number,
                    0,
                    "tab characters are not permitted in indentation",
                ));
            }
            if rest.ends_with(' ') || rest.ends_with('\t') {
                return Err(Error::syntax(
                    line_number,
                    raw.len(),
                    "line has trailing whitespace",
                ));
            }
            if indent % options.indent != 0 {
                return Err(Error::indentation(
                    line_number,
                    indent,
                    format!(
                        "indentation of {indent} spaces is not a multiple of the configured {}",
                        options.indent
                    ),
                ));
            }
        }

        let depth = indent / options.indent.max(1);
        lines.push(ParsedLine {
            raw: raw.to_string(),
            depth,
            indent,
            content: rest.to_string(),
            line_number,
        });
    }

    Ok(ScanResult { lines, blank_lines })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_flat_lines() {
        let result = scan("a: 1\nb: 2", &DecodeOptions::default()).unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].depth, 0);
        assert_eq!(result.lines[0].content, "a: 1");
    }

    #[test]
    fn computes_depth_from_indent() {
        let result = scan("a:\n  b: 1", &DecodeOptions::default()).unwrap();
        assert_eq!(result.lines[1].depth, 1);
    }

    #[test]
    fn rejects_tab_in_indent_strict() {
        let result = scan("a:\n\tb: 1", &DecodeOptions::default());
        assert!(matches!(result, Err(Error::Indentation { .. })));
    }

    #[test]
    fn rejects_non_multiple_indent_strict() {
        let result = scan("a:\n   b: 1", &DecodeOptions::default());
        assert!(matches!(result, Err(Error::Indentation { .. })));
    }

    #[test]
    fn rejects_trailing_whitespace_strict() {
        let result = scan("a: 1 \n", &DecodeOptions::default());
        assert!(matches!(result, Err(Error::Syntax { .. })));
    }

    #[test]
    fn non_strict_tolerates_odd_indent() {
        let opts = DecodeOptions::default().with_strict(false);
        let result = scan("a:\n   b: 1", &opts).unwrap();
        assert_eq!(result.lines.len(), 2);
    }
}
