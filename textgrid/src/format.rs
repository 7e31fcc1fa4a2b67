//! GridFormat trait definition
//!
//! This module defines the core GridFormat trait that all encoding
//! implementations must implement. The trait provides a uniform interface
//! for sniffing, decoding and encoding TextGrids.

use crate::error::GridError;
use crate::model::TextGrid;

/// Serialized output produced by a [`GridFormat`] implementation.
pub enum SerializedGrid {
    /// UTF-8 text output (long and short text encodings)
    Text(String),
    /// Binary output (the `ooBinaryFile` encoding)
    Binary(Vec<u8>),
}

impl SerializedGrid {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedGrid::Text(text) => text.into_bytes(),
            SerializedGrid::Binary(bytes) => bytes,
        }
    }
}

/// Trait for TextGrid on-disk encodings
///
/// Implementors provide bidirectional conversion between raw file content
/// and the in-memory [`TextGrid`] model. All three Praat encodings support
/// both directions.
///
/// `sniff` is the detection probe: it must classify without consuming or
/// mutating the input, and it must be cheap enough to run speculatively
/// against every registered format.
pub trait GridFormat: Send + Sync {
    /// The name of this encoding (e.g., "long", "short", "binary")
    fn name(&self) -> &str;

    /// Optional description of this encoding
    fn description(&self) -> &str {
        ""
    }

    /// Whether the raw input looks like this encoding.
    ///
    /// A `true` here only means the framing matches; `decode` may still
    /// fail on a structurally broken file.
    fn sniff(&self, data: &[u8]) -> bool;

    /// Decode raw file content into a TextGrid
    fn decode(&self, data: &[u8]) -> Result<TextGrid, GridError>;

    /// Encode a TextGrid into raw file content
    fn encode(&self, grid: &TextGrid) -> Result<SerializedGrid, GridError>;
}
