//! Splits the metadata chunk payload into raw field text

use std::borrow::Cow;

use super::schema::{Field, FIELD_COUNT};
use crate::error::{ChunkKind, DecodeError, Result};
use crate::riff::{Chunk, ChunkId};

/// Untyped field text keyed by schema position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFieldSet {
    values: Vec<String>,
    ignored: usize,
}

impl RawFieldSet {
    /// Text of a field; empty when the scanner left it blank
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Number of trailing fields beyond the schema that were dropped
    pub fn ignored_fields(&self) -> usize {
        self.ignored
    }

    /// `(label, text)` pairs in record order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL
            .iter()
            .map(move |&f| (f.label(), self.values[f.index()].as_str()))
    }
}

/// Split a metadata record into its positional fields
pub fn parse_fields(text: &str, delimiter: char) -> Result<RawFieldSet> {
    let text = text.trim_end_matches(['\0', '\r', '\n']);

    let mut values: Vec<String> = text.split(delimiter).map(str::to_string).collect();
    if values.len() < FIELD_COUNT {
        return Err(DecodeError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: values.len(),
        });
    }

    let ignored = values.len() - FIELD_COUNT;
    values.truncate(FIELD_COUNT);

    Ok(RawFieldSet { values, ignored })
}

/// Decode the payload bytes of a metadata chunk
pub fn parse_payload(payload: &[u8], delimiter: char) -> Result<RawFieldSet> {
    let text: Cow<'_, str> = String::from_utf8_lossy(payload);
    parse_fields(&text, delimiter)
}

/// Scan a chunk sequence for the first metadata chunk and split it
pub fn extract_fields<I>(chunks: I, id: ChunkId, delimiter: char) -> Result<RawFieldSet>
where
    I: IntoIterator<Item = Result<Chunk>>,
{
    for chunk in chunks {
        let chunk = chunk?;
        if chunk.is(id) {
            let fields = parse_payload(&chunk.payload, delimiter)?;
            if fields.ignored_fields() > 0 {
                tracing::trace!(
                    "ignoring {} trailing metadata fields",
                    fields.ignored_fields()
                );
            }
            return Ok(fields);
        }
    }
    Err(DecodeError::MissingChunk(ChunkKind::Metadata))
}
