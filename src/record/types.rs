use chrono::NaiveDateTime;
use serde::Serialize;
use std::time::Duration;

/// Fields meant for end-user display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicRecord {
    /// Scanner model that made the recording
    pub product: String,
    pub timestamp: NaiveDateTime,
    pub favorite_list_name: String,
    pub system: String,
    pub department: String,
    pub channel: String,
    /// Talk-group id, or the frequency text on conventional systems
    pub tgid_freq: String,
    pub unit_id: i64,
    pub unit_id_name: String,
}

/// Scanned system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub name: String,
    /// System type as reported by the scanner, e.g. `P25 Trunk` or `Conventional`
    pub system_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteList {
    pub name: String,
}

/// Receiver position when the recording was made
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// The full technical record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivateRecord {
    pub system: SystemInfo,
    pub department: String,
    pub channel: String,
    pub site: SiteInfo,
    pub favorite_list: FavoriteList,
    pub scan_mode: String,
    pub code: String,
    pub frequency: f64,
    pub tgid: String,
    pub unit_id: i64,
    pub location: Location,
    /// Elapsed time as written in the metadata text; informational only
    pub elapsed: Duration,
}

/// A fully decoded recording
///
/// `duration` is derived from the audio stream, never from the metadata text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecording {
    /// File name as supplied by the caller
    pub file: String,
    pub duration: Duration,
    pub public: PublicRecord,
    pub private: PrivateRecord,
}

impl DecodedRecording {
    /// Check that every field shared by both views carries the same value
    pub fn views_consistent(&self) -> bool {
        let (p, q) = (&self.public, &self.private);
        p.favorite_list_name == q.favorite_list.name
            && p.system == q.system.name
            && p.department == q.department
            && p.channel == q.channel
            && p.tgid_freq == q.tgid
            && p.unit_id == q.unit_id
    }
}
