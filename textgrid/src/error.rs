//! Error types for decode, encode and model operations

use std::fmt;

/// Errors that can occur while reading, writing or manipulating a TextGrid
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Input matched none of the known on-disk encodings
    UnknownFormat(String),
    /// Structural failure while reading the binary encoding
    BinaryDecode { offset: usize, message: String },
    /// Structural failure while reading one of the text encodings
    TextDecode { line: usize, message: String },
    /// A model invariant was violated (mixed tier kinds, duplicate tier
    /// names, non-contiguous intervals, ...)
    Invariant(String),
    /// The model cannot be represented in the target format
    Encode(String),
    /// Format not found in registry
    FormatNotFound(String),
    /// Underlying file I/O failure
    Io(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::UnknownFormat(msg) => write!(f, "Unrecognized input: {msg}"),
            GridError::BinaryDecode { offset, message } => {
                write!(f, "Binary decode error at byte {offset}: {message}")
            }
            GridError::TextDecode { line, message } => {
                write!(f, "Decode error on line {line}: {message}")
            }
            GridError::Invariant(msg) => write!(f, "Invariant violation: {msg}"),
            GridError::Encode(msg) => write!(f, "Encode error: {msg}"),
            GridError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            GridError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}
