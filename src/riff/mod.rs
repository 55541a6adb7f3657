//! RIFF container traversal
//!
//! Exposes the chunks of a WAVE file as zero-copy views:
//! - Signature validation (`RIFF` .... `WAVE`)
//! - Sequential chunk headers with even-byte padding
//! - Truncation detection

pub mod chunk;
pub mod walker;

pub use chunk::{Chunk, ChunkId};
pub use walker::Container;
