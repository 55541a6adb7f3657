//! Decoder configuration
//!
//! Every decode call receives its configuration explicitly; nothing here is
//! process-global.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DecodeError, Result};
use crate::riff::ChunkId;

/// Timestamp layout written by the scanner, e.g. `1/02/2024 03:04:05 PM`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%d/%Y %I:%M:%S %p";

/// Field delimiter inside the metadata blob
pub const DEFAULT_DELIMITER: char = ';';

/// Reserved tag of the vendor metadata chunk
pub const DEFAULT_METADATA_CHUNK_ID: &str = "unid";

/// Per-call decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Separator between positional metadata fields
    pub delimiter: char,

    /// chrono format string for the "Date and time" field
    pub timestamp_format: String,

    /// Four-character id of the vendor metadata chunk
    pub metadata_chunk_id: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            metadata_chunk_id: DEFAULT_METADATA_CHUNK_ID.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DecoderConfig =
            toml::from_str(content).map_err(|e| DecodeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DecodeError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// The metadata chunk id as a tag comparable against chunk headers
    pub(crate) fn metadata_chunk(&self) -> Result<ChunkId> {
        self.metadata_chunk_id.parse()
    }

    /// Check that the configuration can be used for decoding
    pub fn validate(&self) -> Result<()> {
        if matches!(self.delimiter, '\n' | '\r' | '"') {
            return Err(DecodeError::Config(format!(
                "unusable field delimiter {:?}",
                self.delimiter
            )));
        }

        if self.timestamp_format.trim().is_empty() {
            return Err(DecodeError::Config(
                "timestamp_format must not be empty".to_string(),
            ));
        }

        let id = self.metadata_chunk()?;
        if [ChunkId::RIFF, ChunkId::FMT, ChunkId::DATA].contains(&id) {
            return Err(DecodeError::Config(format!(
                "metadata chunk id '{}' collides with a standard chunk",
                id
            )));
        }

        Ok(())
    }
}
