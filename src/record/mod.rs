//! Typed recording records
//!
//! This module turns raw field text into the two views of a recording:
//! - `PublicRecord`: what a listener sees
//! - `PrivateRecord`: the full technical record
//!
//! Both are filled from the same converted values.

pub mod builder;
pub mod convert;
pub mod types;

pub(crate) use builder::build_draft;
pub use types::{
    DecodedRecording, FavoriteList, Location, PrivateRecord, PublicRecord, SiteInfo, SystemInfo,
};
