//! Radio-scanner recording decoder
//!
//! Decodes the scan-session metadata a scanner embeds in its WAVE recordings
//! into a public view (system, department, channel, talk group, favorites
//! list) and a private view (frequency, unit id, site, location), and derives
//! the playback duration from the audio stream itself.
//!
//! ```ignore
//! let recording = scanwav::decode("2024-01-02_15-04-05.wav")?;
//! println!("{} on {}", recording.public.channel, recording.public.system);
//! println!("{:.1}s", recording.duration.as_secs_f64());
//! ```
//!
//! Chunk walking and record assembly are internal to the crate:
//!
//! ```compile_fail
//! let draft = scanwav::record::RecordDraft::default();
//! ```

pub(crate) mod audio;
mod config;
mod decoder;
mod error;
pub(crate) mod metadata;
pub(crate) mod record;
pub(crate) mod riff;

#[cfg(test)]
pub(crate) mod tests;

pub use config::DecoderConfig;
pub use decoder::{decode, decode_bytes, decode_with_config, Decoder};
pub use error::{ChunkKind, DecodeError, Result};
pub use riff::ChunkId;
pub use record::{
    DecodedRecording, FavoriteList, Location, PrivateRecord, PublicRecord, SiteInfo, SystemInfo,
};
