//! Header parser: `key? [N <delim?>] {f1 <delim> f2 ...}? :`.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::primitive::{split_respecting_quotes, unescape_string};

/// A parsed array header.
#[derive(Debug, Clone)]
pub struct ArrayHeader {
    pub key: Option<String>,
    pub length: usize,
    pub delimiter: Delimiter,
    pub fields: Option<Vec<String>>,
    /// Trailing content after the colon, trimmed — present only for an
    /// inline primitive array declared on the header's own line.
    pub inline_rest: Option<String>,
}

/// Attempts to parse `content` (a scanned line's trimmed content, with no
/// leading indentation) as an array header. Returns `Ok(None)` when the line
/// plainly isn't one (no `[` appears before any top-level `:`), so the caller
/// can fall back to plain `key: value` / `key:` handling.
pub fn try_parse_array_header(
    content: &str,
    default_delimiter: Delimiter,
    line_number: usize,
) -> Result<Option<ArrayHeader>> {
    let (key, tail) = match split_key(content, line_number)? {
        Some(parts) => parts,
        None => return Ok(None),
    };

    if !tail.starts_with('[') {
        return Ok(None);
    }

    let close = tail
        .find(']')
        .ok_or_else(|| Error::syntax(line_number, 0, "array header missing closing ']'"))?;
    let bracket_body = &tail[1..close];
    let digit_count = bracket_body.chars().take_while(|c| c.is_ascii_digit()).count();
    let (digits, symbol) = bracket_body.split_at(digit_count);
    if digits.is_empty() {
        return Err(Error::syntax(
            line_number,
            0,
            "array header is missing its declared length",
        ));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(Error::syntax(
            line_number,
            0,
            "array header length must not have a leading zero",
        ));
    }
    let length: usize = digits
        .parse()
        .map_err(|_| Error::syntax(line_number, 0, "array header length is not a valid integer"))?;

    let delimiter = if symbol.is_empty() {
        default_delimiter
    } else {
        let c = symbol.chars().next().unwrap();
        Delimiter::from_header_symbol(c)
            .ok_or_else(|| Error::syntax(line_number, 0, format!("unknown delimiter symbol {c:?}")))?
    };

    let tail2 = &tail[close + 1..];
    let (fields, tail3) = if let Some(rest) = tail2.strip_prefix('{') {
        let close2 = rest
            .find('}')
            .ok_or_else(|| Error::syntax(line_number, 0, "array header missing closing '}'"))?;
        let fields_body = &rest[..close2];
        let raw_fields = split_respecting_quotes(fields_body, delimiter.as_char())
            .map_err(|e| Error::syntax(line_number, 0, e))?;
        let mut fields = Vec::with_capacity(raw_fields.len());
        for f in raw_fields {
            fields.push(decode_field_name(&f, line_number)?);
        }
        (Some(fields), &rest[close2 + 1..])
    } else {
        (None, tail2)
    };

    let rest = tail3
        .strip_prefix(':')
        .ok_or_else(|| Error::syntax(line_number, 0, "array header is missing its trailing ':'"))?
        .trim();

    Ok(Some(ArrayHeader {
        key,
        length,
        delimiter,
        fields,
        inline_rest: if rest.is_empty() { None } else { Some(rest.to_string()) },
    }))
}

fn decode_field_name(token: &str, line_number: usize) -> Result<String> {
    if let Some(body) = token.strip_prefix('"') {
        let body = body
            .strip_suffix('"')
            .ok_or_else(|| Error::syntax(line_number, 0, "unterminated quoted field name"))?;
        return unescape_string(body).map_err(|e| Error::syntax(line_number, 0, e));
    }
    Ok(token.to_string())
}

/// Splits the optional leading key off `content`, returning `(key, remaining_tail)`.
/// `None` means `content` doesn't begin with a key-then-bracket shape at all.
fn split_key(content: &str, line_number: usize) -> Result<Option<(Option<String>, &str)>> {
    if let Some(body) = content.strip_prefix('"') {
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
                continue;
            }
            if c == '"' {
                let key_body = &body[..i];
                let key = unescape_string(key_body).map_err(|e| Error::syntax(line_number, 0, e))?;
                return Ok(Some((Some(key), &body[i + 1..])));
            }
        }
        return Err(Error::syntax(line_number, 0, "unterminated quoted key"));
    }

    match content.find('[') {
        Some(bracket_pos) => {
            if let Some(colon_pos) = content.find(':') {
                if colon_pos < bracket_pos {
                    return Ok(None);
                }
            }
            let key_str = &content[..bracket_pos];
            let key = if key_str.is_empty() {
                None
            } else {
                Some(key_str.to_string())
            };
            Ok(Some((key, &content[bracket_pos..])))
        }
        None => Ok(None),
    }
}
