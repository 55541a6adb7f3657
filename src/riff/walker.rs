//! Sequential chunk walker over a RIFF/WAVE buffer

use bytes::Bytes;

use super::chunk::{Chunk, ChunkId};
use crate::error::{DecodeError, Result};

/// Size of the `RIFF <size> WAVE` preamble
pub const RIFF_HEADER_LEN: usize = 12;

/// Size of a chunk header (id + little-endian length)
pub const CHUNK_HEADER_LEN: usize = 8;

/// An immutable recording buffer whose signature has been checked
#[derive(Debug, Clone)]
pub struct Container {
    data: Bytes,
    riff_size: u32,
}

impl Container {
    /// Wrap a buffer, validating the `RIFF`/`WAVE` signature
    pub fn new(data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();

        if data.len() < RIFF_HEADER_LEN {
            return Err(DecodeError::MalformedHeader(format!(
                "buffer is {} bytes, shorter than the {}-byte RIFF header",
                data.len(),
                RIFF_HEADER_LEN
            )));
        }

        let riff = ChunkId::from_slice(&data[0..4]);
        let wave = ChunkId::from_slice(&data[8..12]);
        if riff != Some(ChunkId::RIFF) {
            return Err(DecodeError::MalformedHeader(format!(
                "expected 'RIFF' signature, found '{}'",
                ChunkId([data[0], data[1], data[2], data[3]])
            )));
        }
        if wave != Some(ChunkId::WAVE) {
            return Err(DecodeError::MalformedHeader(format!(
                "expected 'WAVE' form type, found '{}'",
                ChunkId([data[8], data[9], data[10], data[11]])
            )));
        }

        let riff_size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);

        Ok(Self { data, riff_size })
    }

    /// Size recorded in the RIFF header (informational only)
    pub fn riff_size(&self) -> u32 {
        self.riff_size
    }

    /// Walk the chunks following the RIFF header, in file order
    pub fn chunks(&self) -> ChunkWalker {
        ChunkWalker {
            data: self.data.clone(),
            pos: RIFF_HEADER_LEN,
            done: false,
        }
    }
}

/// Lazy iterator over the chunks of a [`Container`]
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug)]
pub struct ChunkWalker {
    data: Bytes,
    pos: usize,
    done: bool,
}

impl ChunkWalker {
    fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        let remaining = self.data.len() - self.pos;
        if remaining == 0 {
            return Ok(None);
        }

        let offset = self.pos;
        if remaining < CHUNK_HEADER_LEN {
            return Err(DecodeError::TruncatedContainer {
                chunk: ChunkId::from_slice(&self.data[offset..]).unwrap_or(ChunkId(*b"????")),
                offset,
                needed: CHUNK_HEADER_LEN,
                available: remaining,
            });
        }

        let header = &self.data[offset..offset + CHUNK_HEADER_LEN];
        let id = ChunkId([header[0], header[1], header[2], header[3]]);
        let declared_len = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        let start = offset + CHUNK_HEADER_LEN;
        let available = self.data.len() - start;
        let len = declared_len as usize;
        if len > available {
            return Err(DecodeError::TruncatedContainer {
                chunk: id,
                offset,
                needed: len,
                available,
            });
        }

        let end = start + len;
        let payload = self.data.slice(start..end);

        // Odd-length chunks carry one pad byte; a final chunk may omit it.
        self.pos = (end + (len & 1)).min(self.data.len());

        tracing::trace!("chunk '{}' at offset {}, {} bytes", id, offset, len);

        Ok(Some(Chunk {
            id,
            declared_len,
            offset,
            payload,
        }))
    }
}

impl Iterator for ChunkWalker {
    type Item = Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for ChunkWalker {}
