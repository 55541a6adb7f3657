//! Audio stream analysis
//!
//! Reads the `fmt ` chunk and derives playback duration from the `data`
//! chunk length.

pub mod duration;
pub mod format;

pub use duration::data_duration;
pub use format::AudioFormat;
