//! Praat TextGrid interoperability
//!
//!     This crate reads, writes and manipulates Praat TextGrid annotation
//!     files in their three on-disk encodings (long text, short text,
//!     binary), and transcodes label text between Praat's ASCII phonetic
//!     notation and Unicode/IPA.
//!
//! Architecture
//!
//!     Every decoder produces the same in-memory model (./model): a
//!     TextGrid is an ordered map of named tiers, a tier a homogeneous
//!     sequence of intervals or points. That uniformity is the core
//!     invariant — downstream code never needs to know which encoding a
//!     grid came from. Encoders are the structural inverses of their
//!     decoders, and the long text output follows Praat's own layout so
//!     written files reopen in Praat.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # GridFormat trait definition
//!     ├── registry.rs             # FormatRegistry for detection and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Decoder implementation
//!     │   │   ├── serializer.rs   # Encoder implementation
//!     │   │   └── mod.rs
//!     │   └── mod.rs              # Shared text helpers (quoting, BOMs)
//!     ├── model                   # TextGrid / Tier / Interval / Point
//!     ├── transcript              # Notation transcoding and symbol tables
//!     └── lib.rs
//!
//!     This is a pure library: it powers the textgrid CLI but assumes no
//!     shell environment. Tolerated input irregularities are reported
//!     through the `log` facade rather than printed.
//!
//! Format detection
//!
//!     The binary encoding is identified by its fixed `ooBinaryFile`
//!     signature; text input is classified long vs. short by whether the
//!     first value line after the two-line header carries a `key = value`
//!     label or a bare number. Detection only inspects framing — it never
//!     consumes input.
//!
//! Transcription
//!
//!     Labels are [`Transcript`] values with a dual reading (Praat escape
//!     notation or Unicode); [`Transcript::transcode`] converts between
//!     them on demand and is deliberately non-validating: unknown tokens
//!     pass through untouched.

pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;
pub mod transcript;

pub use error::GridError;
pub use format::{GridFormat, SerializedGrid};
pub use model::{Interval, Point, TextGrid, Tier, TierElement, TierKind, TIME_TOLERANCE};
pub use registry::FormatRegistry;
pub use transcript::{transcode, Direction, Transcript, VowelSet};

use std::path::Path;

/// Decode raw TextGrid content, detecting its encoding.
pub fn parse(data: &[u8]) -> Result<TextGrid, GridError> {
    FormatRegistry::default().decode_auto(data)
}

/// Read and decode a TextGrid file, detecting its encoding.
///
/// The returned grid remembers the path it was read from.
pub fn read(path: impl AsRef<Path>) -> Result<TextGrid, GridError> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| GridError::Io(format!("cannot read {}: {e}", path.display())))?;
    let mut grid = parse(&data)?;
    grid.set_filename(path);
    Ok(grid)
}

/// Encode a grid with the named format ("long", "short" or "binary") and
/// write it to a file.
pub fn write(grid: &TextGrid, path: impl AsRef<Path>, format: &str) -> Result<(), GridError> {
    let path = path.as_ref();
    let out = FormatRegistry::default().encode(grid, format)?;
    std::fs::write(path, out.into_bytes())
        .map_err(|e| GridError::Io(format!("cannot write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    fn sample_grid() -> TextGrid {
        let mut grid = TextGrid::new(0.0, 1.0).unwrap();
        grid.insert_tier(
            "syllables",
            Tier::from_intervals(vec![
                Interval::new("a", 0.0, 0.5).unwrap(),
                Interval::new("b", 0.5, 1.0).unwrap(),
            ]),
        )
        .unwrap();
        grid
    }

    #[test]
    fn parse_detects_the_encoding() {
        let registry = FormatRegistry::default();
        for format in ["long", "short", "binary"] {
            let encoded = registry.encode(&sample_grid(), format).unwrap().into_bytes();
            let decoded = parse(&encoded).unwrap();
            assert_eq!(decoded, sample_grid(), "via {format}");
        }
    }

    #[test]
    fn parse_rejects_unknown_input() {
        assert!(matches!(
            parse(b"not a textgrid at all"),
            Err(GridError::UnknownFormat(_))
        ));
    }

    #[test]
    fn read_and_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.TextGrid");

        write(&sample_grid(), &path, "long").unwrap();
        let grid = read(&path).unwrap();
        assert_eq!(grid, sample_grid());
        assert_eq!(grid.filename(), Some(path.as_path()));
    }

    #[test]
    fn read_reports_missing_files() {
        assert!(matches!(
            read("/no/such/file.TextGrid"),
            Err(GridError::Io(_))
        ));
    }

    #[test]
    fn write_rejects_unknown_format_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.TextGrid");
        assert!(matches!(
            write(&sample_grid(), &path, "xml"),
            Err(GridError::FormatNotFound(_))
        ));
    }
}
