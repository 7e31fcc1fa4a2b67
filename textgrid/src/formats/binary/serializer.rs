//! Serializer for the `ooBinaryFile` layout
//!
//! The inverse of the parser: big-endian fields, and per string a choice
//! between the narrow Latin-1 record and the `-1`-escaped UTF-16 record,
//! taken per string depending on whether it is Latin-1 representable.

use super::MAGIC;
use crate::error::GridError;
use crate::model::{TextGrid, TierElement};

fn push_f64(out: &mut Vec<u8>, v: f64) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn checked_i32(n: usize, what: &str) -> Result<i32, GridError> {
    i32::try_from(n).map_err(|_| GridError::Encode(format!("{what} {n} exceeds the field width")))
}

fn push_i32(out: &mut Vec<u8>, n: usize, what: &str) -> Result<(), GridError> {
    out.extend_from_slice(&checked_i32(n, what)?.to_be_bytes());
    Ok(())
}

/// Write a length-prefixed string: narrow Latin-1 when possible, the
/// `-1` escape plus UTF-16-BE code units otherwise.
fn push_string(out: &mut Vec<u8>, s: &str, what: &str) -> Result<(), GridError> {
    if s.chars().all(|c| (c as u32) < 0x100) {
        let len = i16::try_from(s.chars().count())
            .map_err(|_| GridError::Encode(format!("{what} exceeds the string field width")))?;
        out.extend_from_slice(&len.to_be_bytes());
        out.extend(s.chars().map(|c| c as u8));
    } else {
        let units: Vec<u16> = s.encode_utf16().collect();
        let len = i16::try_from(units.len())
            .map_err(|_| GridError::Encode(format!("{what} exceeds the string field width")))?;
        out.extend_from_slice(&(-1i16).to_be_bytes());
        out.extend_from_slice(&len.to_be_bytes());
        for unit in units {
            out.extend_from_slice(&unit.to_be_bytes());
        }
    }
    Ok(())
}

pub(crate) fn serialize(grid: &TextGrid) -> Result<Vec<u8>, GridError> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    push_f64(&mut out, grid.xmin());
    push_f64(&mut out, grid.xmax());
    out.push(1);
    push_i32(&mut out, grid.len(), "tier count")?;

    for (name, tier) in grid.iter() {
        let class = tier.tier_type();
        out.push(class.len() as u8);
        out.extend_from_slice(class.as_bytes());
        push_string(&mut out, name, "tier name")?;
        push_f64(&mut out, grid.xmin());
        push_f64(&mut out, grid.xmax());
        push_i32(&mut out, tier.len(), "element count")?;

        for element in tier.iter() {
            match element {
                TierElement::Point(point) => {
                    push_f64(&mut out, point.xpos());
                    push_string(&mut out, point.text(), "label")?;
                }
                TierElement::Interval(interval) => {
                    push_f64(&mut out, interval.xmin());
                    push_f64(&mut out, interval.xmax());
                    push_string(&mut out, interval.text(), "label")?;
                }
            }
        }
    }
    Ok(out)
}
