//! Crate-level test suites
//!
//! - Synthetic recording fixtures and the fixture table loader
//! - Table-driven decoding of every fixture from disk
//! - Whole-decoder properties (determinism, concurrency, failure modes)

pub mod fixtures;
