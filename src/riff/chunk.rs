//! Chunk identifiers and chunk views

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::error::DecodeError;

/// Four-character chunk tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(pub [u8; 4]);

impl ChunkId {
    pub const RIFF: ChunkId = ChunkId(*b"RIFF");
    pub const WAVE: ChunkId = ChunkId(*b"WAVE");
    pub const FMT: ChunkId = ChunkId(*b"fmt ");
    pub const DATA: ChunkId = ChunkId(*b"data");

    pub(crate) fn from_slice(bytes: &[u8]) -> Option<ChunkId> {
        let tag: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        Some(ChunkId(tag))
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl FromStr for ChunkId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii()) {
            return Err(DecodeError::Config(format!(
                "chunk id must be exactly four ASCII characters, got {:?}",
                s
            )));
        }
        let mut tag = [0u8; 4];
        tag.copy_from_slice(bytes);
        Ok(ChunkId(tag))
    }
}

/// A chunk inside a container
///
/// `payload` shares the container's allocation; it is never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub id: ChunkId,
    /// Length as declared in the chunk header, excluding the pad byte
    pub declared_len: u32,
    /// Offset of the chunk header within the container
    pub offset: usize,
    pub payload: Bytes,
}

impl Chunk {
    pub fn is(&self, id: ChunkId) -> bool {
        self.id == id
    }
}
