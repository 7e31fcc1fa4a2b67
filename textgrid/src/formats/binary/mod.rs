//! Binary format implementation
//!
//! Praat's `ooBinaryFile` container: a fixed signature followed by
//! big-endian records in the same field order as the short text layout.

mod parser;
mod serializer;

use crate::error::GridError;
use crate::format::{GridFormat, SerializedGrid};
use crate::model::TextGrid;

/// The fixed file signature: the `ooBinaryFile` tag followed by the
/// length-prefixed class name `TextGrid`.
pub(crate) const MAGIC: &[u8] = b"ooBinaryFile\x08TextGrid";

#[derive(Default)]
pub struct BinaryFormat;

impl GridFormat for BinaryFormat {
    fn name(&self) -> &str {
        "binary"
    }

    fn description(&self) -> &str {
        "Praat binary TextGrid format"
    }

    fn sniff(&self, data: &[u8]) -> bool {
        data.starts_with(MAGIC)
    }

    fn decode(&self, data: &[u8]) -> Result<TextGrid, GridError> {
        parser::parse(data)
    }

    fn encode(&self, grid: &TextGrid) -> Result<SerializedGrid, GridError> {
        serializer::serialize(grid).map(SerializedGrid::Binary)
    }
}
