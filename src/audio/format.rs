//! `fmt ` chunk decoding

use crate::error::{ChunkKind, DecodeError, Result};
use crate::riff::{Chunk, ChunkId};

/// Minimum `fmt ` payload: the WAVEFORMAT fields plus bits per sample
pub const FORMAT_CHUNK_MIN_LEN: usize = 16;

pub const WAVE_FORMAT_PCM: u16 = 0x0001;
pub const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Audio format parameters from the `fmt ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioFormat {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    /// Average bytes per second as declared by the writer
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// Decode a `fmt ` chunk payload
    pub fn parse(chunk: &Chunk) -> Result<Self> {
        let p = chunk.payload.as_ref();
        if p.len() < FORMAT_CHUNK_MIN_LEN {
            return Err(DecodeError::TruncatedContainer {
                chunk: chunk.id,
                offset: chunk.offset,
                needed: FORMAT_CHUNK_MIN_LEN,
                available: p.len(),
            });
        }

        let u16_at = |i: usize| u16::from_le_bytes([p[i], p[i + 1]]);
        let u32_at = |i: usize| u32::from_le_bytes([p[i], p[i + 1], p[i + 2], p[i + 3]]);

        Ok(Self {
            format_tag: u16_at(0),
            channels: u16_at(2),
            sample_rate: u32_at(4),
            byte_rate: u32_at(8),
            block_align: u16_at(12),
            bits_per_sample: u16_at(14),
        })
    }

    /// Scan a chunk sequence for the first `fmt ` chunk and decode it
    pub fn extract<I>(chunks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Chunk>>,
    {
        for chunk in chunks {
            let chunk = chunk?;
            if chunk.is(ChunkId::FMT) {
                return Self::parse(&chunk);
            }
        }
        Err(DecodeError::MissingChunk(ChunkKind::Format))
    }

    /// Bytes occupied by one sample of one channel
    pub fn bytes_per_sample(&self) -> u32 {
        u32::from(self.bits_per_sample).div_ceil(8)
    }

    /// Bytes consumed per second of audio
    ///
    /// Fails when any parameter is zero, since no duration can be derived.
    pub fn bytes_per_second(&self) -> Result<u64> {
        if self.sample_rate == 0 {
            return Err(DecodeError::InvalidFormat("sample rate is zero".to_string()));
        }
        if self.channels == 0 {
            return Err(DecodeError::InvalidFormat("channel count is zero".to_string()));
        }
        if self.bits_per_sample == 0 {
            return Err(DecodeError::InvalidFormat(
                "bits per sample is zero".to_string(),
            ));
        }

        Ok(u64::from(self.sample_rate)
            * u64::from(self.channels)
            * u64::from(self.bytes_per_sample()))
    }

    pub fn is_pcm(&self) -> bool {
        matches!(self.format_tag, WAVE_FORMAT_PCM | WAVE_FORMAT_EXTENSIBLE)
    }
}
