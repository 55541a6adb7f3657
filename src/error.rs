use std::fmt;

use thiserror::Error;

use crate::riff::ChunkId;

/// The chunks a recording must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Format,
    Data,
    Metadata,
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChunkKind::Format => "format",
            ChunkKind::Data => "data",
            ChunkKind::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

/// Main error type for the recording decoder
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The recording file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The container signature is missing or not RIFF/WAVE
    #[error("Malformed container header: {0}")]
    MalformedHeader(String),

    /// A chunk declares more bytes than the buffer holds
    #[error("Truncated container: chunk '{chunk}' at offset {offset} needs {needed} bytes, {available} available")]
    TruncatedContainer {
        chunk: ChunkId,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A required chunk never appears in the container
    #[error("Missing {0} chunk")]
    MissingChunk(ChunkKind),

    /// The metadata blob is shorter than the positional schema
    #[error("Metadata field count mismatch: expected at least {expected}, found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// A metadata field could not be converted to its typed value
    #[error("Failed to parse field '{field}' from {value:?}: {reason}")]
    FieldParse {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Audio format parameters leave the duration undefined
    #[error("Invalid audio format: {0}")]
    InvalidFormat(String),

    /// Decoder configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DecodeError {
    /// Name of the field that failed to convert, if this is a field error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::FieldParse { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub(crate) fn field_parse(
        field: &'static str,
        value: &str,
        reason: impl fmt::Display,
    ) -> Self {
        DecodeError::FieldParse {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DecodeError>;
