//! Playback duration from the `data` chunk

use std::time::Duration;

use super::format::AudioFormat;
use crate::error::{ChunkKind, DecodeError, Result};
use crate::riff::{Chunk, ChunkId};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Duration of `data_len` bytes of audio in the given format
///
/// Kept at nanosecond precision; whole seconds are never rounded off.
pub fn compute_duration(format: &AudioFormat, data_len: u64) -> Result<Duration> {
    let bytes_per_second = u128::from(format.bytes_per_second()?);
    let nanos = u128::from(data_len) * NANOS_PER_SEC / bytes_per_second;

    let secs = (nanos / NANOS_PER_SEC) as u64;
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, subsec))
}

/// Scan a chunk sequence for the first `data` chunk and compute its duration
pub fn data_duration<I>(format: &AudioFormat, chunks: I) -> Result<Duration>
where
    I: IntoIterator<Item = Result<Chunk>>,
{
    for chunk in chunks {
        let chunk = chunk?;
        if chunk.is(ChunkId::DATA) {
            return compute_duration(format, u64::from(chunk.declared_len));
        }
    }
    Err(DecodeError::MissingChunk(ChunkKind::Data))
}
