//! On-disk encoding implementations
//!
//! One module per encoding, each split into a parser and a serializer
//! behind the shared [`crate::format::GridFormat`] trait. The helpers in
//! this module cover what the two text encodings share: header literals,
//! input decoding (with BOM handling), Praat's doubled-quote string
//! escape, and time formatting.

pub mod binary;
pub mod long;
pub mod short;

use crate::error::GridError;
use crate::model::TierKind;

pub(crate) const FILE_TYPE_HEADER: &str = "File type = \"ooTextFile\"";
pub(crate) const OBJECT_CLASS_HEADER: &str = "Object class = \"TextGrid\"";

pub(crate) fn text_err(line: usize, message: impl Into<String>) -> GridError {
    GridError::TextDecode {
        line,
        message: message.into(),
    }
}

/// Decode raw text-file content, honoring a UTF-16-BE or UTF-8 BOM.
pub(crate) fn decode_text(data: &[u8]) -> Result<String, GridError> {
    if let Some(rest) = data.strip_prefix(&[0xfe, 0xff]) {
        if rest.len() % 2 != 0 {
            return Err(text_err(0, "UTF-16 input has an odd number of bytes"));
        }
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16(&units).map_err(|_| text_err(0, "input is not valid UTF-16"));
    }
    let data = data.strip_prefix(&[0xef, 0xbb, 0xbf]).unwrap_or(data);
    String::from_utf8(data.to_vec()).map_err(|_| text_err(0, "input is not valid UTF-8"))
}

/// Which text layout a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextLayout {
    Long,
    Short,
}

/// Classify text input by its framing: both layouts share the two header
/// lines, after which the short layout carries bare values and the long
/// layout carries `key = value` lines.
pub(crate) fn sniff_text_layout(data: &[u8]) -> Option<TextLayout> {
    let text = decode_text(data).ok()?;
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    if lines.next()? != FILE_TYPE_HEADER {
        return None;
    }
    if lines.next()? != OBJECT_CLASS_HEADER {
        return None;
    }
    let probe = lines.next()?;
    if probe.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        Some(TextLayout::Short)
    } else {
        Some(TextLayout::Long)
    }
}

/// Praat tier class names. `TextTier` is Praat's own name for point
/// tiers; `PointTier` is accepted for files written by other tools.
pub(crate) fn tier_kind_from_class(class: &str) -> Option<TierKind> {
    match class {
        "IntervalTier" => Some(TierKind::Interval),
        "TextTier" | "PointTier" => Some(TierKind::Point),
        _ => None,
    }
}

/// Quote a string the way Praat does: wrapped in double quotes, internal
/// quotes doubled.
pub(crate) fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Parse a Praat quoted string, undoing the doubled-quote escape.
pub(crate) fn unquote(value: &str, line: usize) -> Result<String, GridError> {
    let value = value.trim();
    let Some(inner) = value.strip_prefix('"') else {
        return Err(text_err(
            line,
            format!("expected a quoted string, got `{value}`"),
        ));
    };
    let chars: Vec<char> = inner.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '"' {
            if i + 1 < chars.len() && chars[i + 1] == '"' {
                out.push('"');
                i += 2;
                continue;
            }
            if chars[i + 1..].iter().any(|c| !c.is_whitespace()) {
                return Err(text_err(line, "content after closing quote"));
            }
            return Ok(out);
        }
        out.push(chars[i]);
        i += 1;
    }
    Err(text_err(line, "unterminated quoted string"))
}

/// Format a time value for the text encodings. Rust's shortest-round-trip
/// float formatting guarantees the value parses back exactly.
pub(crate) fn format_time(t: f64) -> String {
    t.to_string()
}

/// Labels with line breaks fit the binary encoding but not the
/// line-oriented text ones.
pub(crate) fn ensure_single_line(text: &str, what: &str) -> Result<(), GridError> {
    if text.contains('\n') || text.contains('\r') {
        return Err(GridError::Encode(format!(
            "{what} contains a line break, which the text encodings cannot represent"
        )));
    }
    Ok(())
}

pub(crate) fn parse_time(value: &str, line: usize) -> Result<f64, GridError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| text_err(line, format!("expected a number, got `{value}`")))
}

pub(crate) fn parse_count(value: &str, line: usize) -> Result<usize, GridError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| text_err(line, format!("expected a count, got `{value}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_doubles_internal_quotes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn unquote_round_trips() {
        for s in ["plain", "say \"hi\"", "", "\"", "a\"\"b"] {
            assert_eq!(unquote(&quote(s), 1).unwrap(), s);
        }
    }

    #[test]
    fn unquote_rejects_malformed_input() {
        assert!(unquote("bare", 1).is_err());
        assert!(unquote("\"open", 1).is_err());
        assert!(unquote("\"a\" junk", 1).is_err());
    }

    #[test]
    fn decode_text_handles_boms() {
        assert_eq!(decode_text(b"abc").unwrap(), "abc");
        assert_eq!(decode_text(b"\xef\xbb\xbfabc").unwrap(), "abc");

        let mut utf16 = vec![0xfe, 0xff];
        for unit in "abc".encode_utf16() {
            utf16.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_text(&utf16).unwrap(), "abc");

        assert!(decode_text(&[0xfe, 0xff, 0x00]).is_err());
        assert!(decode_text(&[0xff, 0xfe, 0xfd]).is_err());
    }

    #[test]
    fn layout_sniffing() {
        let long = b"File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n\nxmin = 0\n";
        let short = b"File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n\n0\n";
        let negative = b"File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n\n-1.5\n";
        assert_eq!(sniff_text_layout(long), Some(TextLayout::Long));
        assert_eq!(sniff_text_layout(short), Some(TextLayout::Short));
        assert_eq!(sniff_text_layout(negative), Some(TextLayout::Short));
        assert_eq!(sniff_text_layout(b"not a textgrid"), None);
        assert_eq!(sniff_text_layout(b""), None);
    }

    #[test]
    fn time_formatting_is_plain_decimal() {
        assert_eq!(format_time(0.0), "0");
        assert_eq!(format_time(2.5), "2.5");
        assert_eq!(format_time(-0.25), "-0.25");
    }
}
