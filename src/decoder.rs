//! Recording decoder entry points

use bytes::Bytes;
use std::path::Path;

use crate::audio::{data_duration, AudioFormat};
use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use crate::metadata::extract_fields;
use crate::record::{build_draft, DecodedRecording};
use crate::riff::{Chunk, Container};

/// A configured decoder
///
/// Holds only its configuration; one value can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder, rejecting unusable configuration up front
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Read and decode a recording file
    pub fn decode_path<P: AsRef<Path>>(&self, path: P) -> Result<DecodedRecording> {
        decode_with_config(path, &self.config)
    }

    /// Decode an in-memory recording
    pub fn decode_bytes(
        &self,
        file_name: &str,
        data: impl Into<Bytes>,
    ) -> Result<DecodedRecording> {
        decode_bytes(file_name, data, &self.config)
    }
}

/// Read and decode a recording file with the default configuration
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedRecording> {
    decode_with_config(path, &DecoderConfig::default())
}

/// Read and decode a recording file
///
/// The recording's `file` is the final component of `path`.
pub fn decode_with_config<P: AsRef<Path>>(
    path: P,
    config: &DecoderConfig,
) -> Result<DecodedRecording> {
    let path = path.as_ref();
    config.validate()?;

    let data = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    decode_bytes(&file_name, data, config)
}

/// Decode an in-memory recording
///
/// `file_name` is recorded as given. The buffer is never modified. Every
/// chunk is walked before any is interpreted, so a truncated chunk anywhere
/// in the buffer fails the decode.
pub fn decode_bytes(
    file_name: &str,
    data: impl Into<Bytes>,
    config: &DecoderConfig,
) -> Result<DecodedRecording> {
    config.validate()?;
    let metadata_id = config.metadata_chunk()?;

    let container = Container::new(data)?;
    let chunks: Vec<Chunk> = container.chunks().collect::<Result<_>>()?;
    tracing::trace!(
        "{}: {} chunk(s), RIFF size {}",
        file_name,
        chunks.len(),
        container.riff_size()
    );

    let walk = || chunks.iter().cloned().map(Ok::<_, DecodeError>);
    let format = AudioFormat::extract(walk())?;
    let duration = data_duration(&format, walk())?;
    let fields = extract_fields(walk(), metadata_id, config.delimiter)?;
    for (label, text) in fields.iter() {
        tracing::trace!("{}: {:?}", label, text);
    }

    let recording = build_draft(&fields, config)?
        .into_recording(file_name.to_string(), duration);

    tracing::debug!(
        "Decoded {}: {}Hz, {} channel(s), {} bits, {} B/s, align {}, pcm={}, duration={:.3}s",
        recording.file,
        format.sample_rate,
        format.channels,
        format.bits_per_sample,
        format.byte_rate,
        format.block_align,
        format.is_pcm(),
        recording.duration.as_secs_f64()
    );

    Ok(recording)
}
