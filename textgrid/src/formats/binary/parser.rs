//! Parser for the `ooBinaryFile` layout
//!
//! Big-endian throughout. Strings use a 16-bit length; the length value
//! `-1` is an escape flag meaning "the real length follows, and the
//! content is UTF-16 code units instead of Latin-1 bytes". Praat only
//! takes that escape when a string contains characters outside Latin-1.

use super::MAGIC;
use crate::error::GridError;
use crate::formats::tier_kind_from_class;
use crate::model::{Interval, Point, TextGrid, Tier, TierKind};
use crate::transcript::Transcript;

/// Cursor over the raw input that reports the byte offset and the field
/// being read on truncation.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn error(&self, message: impl Into<String>) -> GridError {
        GridError::BinaryDecode {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8], GridError> {
        if self.data.len() - self.pos < n {
            return Err(self.error(format!(
                "unexpected end of input while reading {what} ({n} bytes needed, {} available)",
                self.data.len() - self.pos
            )));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u8(&mut self, what: &str) -> Result<u8, GridError> {
        Ok(self.take(1, what)?[0])
    }

    fn bool(&mut self, what: &str) -> Result<bool, GridError> {
        Ok(self.u8(what)? != 0)
    }

    fn i16(&mut self, what: &str) -> Result<i16, GridError> {
        let bytes = self.take(2, what)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn i32(&mut self, what: &str) -> Result<i32, GridError> {
        let bytes = self.take(4, what)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn f64(&mut self, what: &str) -> Result<f64, GridError> {
        let bytes = self.take(8, what)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(f64::from_be_bytes(buf))
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

/// Read a length-prefixed string: 16-bit length and Latin-1 bytes, or the
/// `-1` escape followed by a 16-bit length and UTF-16-BE code units.
fn read_string(r: &mut Reader<'_>, what: &str) -> Result<String, GridError> {
    let len = r.i16(&format!("the length of {what}"))?;
    if len == -1 {
        let wide_len = r.i16(&format!("the wide length of {what}"))?;
        if wide_len < 0 {
            return Err(r.error(format!("negative wide length for {what}")));
        }
        let raw = r.take(wide_len as usize * 2, what)?;
        let units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).map_err(|_| r.error(format!("invalid UTF-16 in {what}")))
    } else if len < 0 {
        Err(r.error(format!("negative length for {what}")))
    } else {
        let raw = r.take(len as usize, what)?;
        Ok(raw.iter().map(|&b| b as char).collect())
    }
}

pub(crate) fn parse(data: &[u8]) -> Result<TextGrid, GridError> {
    let mut r = Reader::new(data);

    let magic = r.take(MAGIC.len(), "the file signature")?;
    if magic != MAGIC {
        return Err(GridError::BinaryDecode {
            offset: 0,
            message: "bad signature: not an ooBinaryFile TextGrid".to_string(),
        });
    }

    let xmin = r.f64("the grid xmin")?;
    let xmax = r.f64("the grid xmax")?;
    let mut grid = TextGrid::new(xmin, xmax)?;

    if !r.bool("the tiers flag")? {
        return Ok(grid);
    }

    let tier_count = r.i32("the tier count")?;
    if tier_count < 0 {
        return Err(r.error(format!("negative tier count {tier_count}")));
    }

    for _ in 0..tier_count {
        let class_len = r.u8("a tier class length")? as usize;
        let class_offset = r.pos;
        let class_bytes = r.take(class_len, "a tier class")?;
        let class: String = class_bytes.iter().map(|&b| b as char).collect();
        let kind = tier_kind_from_class(&class).ok_or(GridError::BinaryDecode {
            offset: class_offset,
            message: format!("unrecognized tier class \"{class}\""),
        })?;

        let name = read_string(&mut r, "a tier name")?;
        // Tier extents are read but not kept: the grid-level extent is
        // authoritative.
        r.f64("a tier xmin")?;
        r.f64("a tier xmax")?;

        let element_count = r.i32("an element count")?;
        if element_count < 0 {
            return Err(r.error(format!("negative element count {element_count}")));
        }

        let mut tier = Tier::new(kind);
        for _ in 0..element_count {
            match kind {
                TierKind::Point => {
                    let xpos = r.f64("a point time")?;
                    let text = read_string(&mut r, "a point label")?;
                    tier.push_point(Point::new(Transcript::new(text), xpos))?;
                }
                TierKind::Interval => {
                    let xmin = r.f64("an interval xmin")?;
                    let xmax = r.f64("an interval xmax")?;
                    let text = read_string(&mut r, "an interval label")?;
                    tier.push_interval(Interval::new(Transcript::new(text), xmin, xmax)?)?;
                }
            }
        }
        grid.insert_tier(name, tier)?;
    }

    if r.remaining() > 0 {
        log::warn!("{} trailing bytes after the last tier", r.remaining());
    }
    grid.validate()?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_f64(out: &mut Vec<u8>, v: f64) {
        out.extend_from_slice(&v.to_be_bytes());
    }

    fn push_i32(out: &mut Vec<u8>, v: i32) {
        out.extend_from_slice(&v.to_be_bytes());
    }

    fn push_narrow(out: &mut Vec<u8>, s: &str) {
        out.extend_from_slice(&(s.len() as i16).to_be_bytes());
        out.extend_from_slice(s.as_bytes());
    }

    /// One interval tier, two intervals.
    fn sample_bytes() -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        out.push(1);
        push_i32(&mut out, 1);

        out.push(12);
        out.extend_from_slice(b"IntervalTier");
        push_narrow(&mut out, "syllables");
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        push_i32(&mut out, 2);

        push_f64(&mut out, 0.0);
        push_f64(&mut out, 0.5);
        push_narrow(&mut out, "a");
        push_f64(&mut out, 0.5);
        push_f64(&mut out, 1.0);
        push_narrow(&mut out, "b");
        out
    }

    #[test]
    fn decodes_an_interval_tier() {
        let grid = parse(&sample_bytes()).unwrap();
        assert_eq!(grid.xmin(), 0.0);
        assert_eq!(grid.xmax(), 1.0);
        let tier = grid.tier("syllables").unwrap();
        let texts: Vec<&str> = tier.intervals().map(|i| i.text().as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn decodes_a_point_tier_with_wide_label() {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        out.push(1);
        push_i32(&mut out, 1);

        out.push(8);
        out.extend_from_slice(b"TextTier");
        push_narrow(&mut out, "phones");
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        push_i32(&mut out, 1);

        push_f64(&mut out, 0.5);
        // "əa" as the -1 escape plus UTF-16-BE units
        out.extend_from_slice(&(-1i16).to_be_bytes());
        out.extend_from_slice(&2i16.to_be_bytes());
        out.extend_from_slice(&0x0259u16.to_be_bytes());
        out.extend_from_slice(&(b'a' as u16).to_be_bytes());

        let grid = parse(&out).unwrap();
        let point = grid.tier("phones").unwrap().points().next().unwrap();
        assert_eq!(point.xpos(), 0.5);
        assert_eq!(point.text().as_str(), "əa");
    }

    #[test]
    fn narrow_strings_are_latin1() {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        out.push(1);
        push_i32(&mut out, 1);

        out.push(8);
        out.extend_from_slice(b"TextTier");
        push_narrow(&mut out, "words");
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        push_i32(&mut out, 1);
        push_f64(&mut out, 0.5);
        out.extend_from_slice(&2i16.to_be_bytes());
        out.extend_from_slice(&[b'n', 0xe9]); // "né" in Latin-1

        let grid = parse(&out).unwrap();
        let point = grid.tier("words").unwrap().points().next().unwrap();
        assert_eq!(point.text().as_str(), "né");
    }

    #[test]
    fn empty_label_is_not_an_error() {
        let mut out = sample_bytes();
        // Rewrite the last label ("b") as a zero-length string
        let len = out.len();
        out.truncate(len - 3);
        out.extend_from_slice(&0i16.to_be_bytes());
        let grid = parse(&out).unwrap();
        let texts: Vec<&str> = grid
            .tier("syllables")
            .unwrap()
            .intervals()
            .map(|i| i.text().as_str())
            .collect();
        assert_eq!(texts, vec!["a", ""]);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let err = parse(b"ooTextFile nonsense").unwrap_err();
        assert!(matches!(err, GridError::BinaryDecode { .. }));
    }

    #[test]
    fn truncation_names_offset_and_field() {
        let bytes = sample_bytes();
        let truncated = &bytes[..bytes.len() - 4];
        let err = parse(truncated).unwrap_err();
        match err {
            GridError::BinaryDecode { offset, message } => {
                assert!(offset > MAGIC.len());
                assert!(message.contains("unexpected end of input"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_tier_class_is_rejected() {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 1.0);
        out.push(1);
        push_i32(&mut out, 1);
        out.push(9);
        out.extend_from_slice(b"PitchTier");
        let err = parse(&out).unwrap_err();
        match err {
            GridError::BinaryDecode { message, .. } => assert!(message.contains("PitchTier")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn exists_false_means_no_tiers() {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);
        push_f64(&mut out, 0.0);
        push_f64(&mut out, 2.0);
        out.push(0);
        let grid = parse(&out).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.xmax(), 2.0);
    }
}
