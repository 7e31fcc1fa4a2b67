//! Long text format implementation
//!
//! The long layout is Praat's default: every value is labeled
//! (`xmin = 0.5`) and tiers/elements sit inside bracketed markers. It is
//! also this crate's default output format.

mod parser;
mod serializer;

use crate::error::GridError;
use crate::format::{GridFormat, SerializedGrid};
use crate::formats::{sniff_text_layout, TextLayout};
use crate::model::TextGrid;
use serializer::LongSerializer;

#[derive(Default)]
pub struct LongTextFormat;

impl GridFormat for LongTextFormat {
    fn name(&self) -> &str {
        "long"
    }

    fn description(&self) -> &str {
        "Praat long (labeled) TextGrid text format"
    }

    fn sniff(&self, data: &[u8]) -> bool {
        sniff_text_layout(data) == Some(TextLayout::Long)
    }

    fn decode(&self, data: &[u8]) -> Result<TextGrid, GridError> {
        parser::parse(data)
    }

    fn encode(&self, grid: &TextGrid) -> Result<SerializedGrid, GridError> {
        LongSerializer::new().serialize(grid).map(SerializedGrid::Text)
    }
}
