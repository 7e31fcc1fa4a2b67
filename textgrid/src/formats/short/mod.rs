//! Short text format implementation
//!
//! Praat's "short text file" variant: the same field sequence as the
//! binary layout, but spelled as bare, newline-separated text values
//! with no labels.

mod parser;
mod serializer;

use crate::error::GridError;
use crate::format::{GridFormat, SerializedGrid};
use crate::formats::{sniff_text_layout, TextLayout};
use crate::model::TextGrid;

#[derive(Default)]
pub struct ShortTextFormat;

impl GridFormat for ShortTextFormat {
    fn name(&self) -> &str {
        "short"
    }

    fn description(&self) -> &str {
        "Praat short (positional) TextGrid text format"
    }

    fn sniff(&self, data: &[u8]) -> bool {
        sniff_text_layout(data) == Some(TextLayout::Short)
    }

    fn decode(&self, data: &[u8]) -> Result<TextGrid, GridError> {
        parser::parse(data)
    }

    fn encode(&self, grid: &TextGrid) -> Result<SerializedGrid, GridError> {
        serializer::serialize(grid).map(SerializedGrid::Text)
    }
}
