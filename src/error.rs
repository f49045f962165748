use std::{io, path::PathBuf};

use thiserror::Error;

use crate::base32::MAX_INPUT_LEN;

/// Errors reported by the base32 codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A character that is neither alphabet, separator nor a valid pad.
    #[error("invalid character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    #[error("input of {0} bytes must be shorter than {} bytes", MAX_INPUT_LEN)]
    InvalidLength(usize),

    #[error("output capacity must be greater than zero")]
    InvalidCapacity,

    /// The encoded text (including padding and terminator) did not fit.
    #[error("output buffer of {capacity} bytes is too small")]
    BufferTooSmall { capacity: usize },
}

/// User facing errors of the command line tool.
#[derive(Error, Debug)]
pub enum ErrorMessage {
    #[error("Error: missing value - specify the base32 text to decode")]
    MissingValue,

    #[error("Error: failed to open {} - {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("Error: failed to read input - {source}")]
    ReadInput { source: io::Error },

    #[error("Error: failed to write output - {0}")]
    WriteOutput(#[source] io::Error),

    #[error("Error: {operation} failed. Input too long? - {source}")]
    Codec {
        operation: &'static str,
        source: CodecError,
    },
}
