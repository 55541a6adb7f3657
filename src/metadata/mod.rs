//! Vendor metadata chunk
//!
//! The scanner stores one delimited text record per recording. Fields are
//! positional; [`Field`] fixes the order.

pub mod parser;
pub mod schema;

pub use parser::{extract_fields, RawFieldSet};
pub use schema::{Field, FIELD_COUNT};
