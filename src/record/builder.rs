//! Converts a raw field set into the public and private views
//!
//! Each schema field is bound to one converter in [`FIELD_TABLE`]. The
//! converters fill a [`RecordDraft`]; the draft is then projected into both
//! views, copying every shared value from the same slot.

use chrono::NaiveDateTime;
use std::time::Duration;

use super::convert::{parse_elapsed, parse_float, parse_int, parse_timestamp};
use super::types::{
    DecodedRecording, FavoriteList, Location, PrivateRecord, PublicRecord, SiteInfo, SystemInfo,
};
use crate::config::DecoderConfig;
use crate::error::Result;
use crate::metadata::{Field, RawFieldSet, FIELD_COUNT};

/// Typed values of one metadata record, before projection into the views
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RecordDraft {
    pub product: String,
    pub timestamp: NaiveDateTime,
    pub elapsed: Duration,
    pub scan_mode: String,
    pub system_type: String,
    pub frequency: f64,
    pub code: String,
    pub favorite_name: String,
    pub system_name: String,
    pub department_name: String,
    pub channel_name: String,
    pub site_name: String,
    pub tgid: String,
    pub unit_id: i64,
    pub unit_id_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

type Converter = fn(&mut RecordDraft, &str, &DecoderConfig) -> Result<()>;

/// Binds a schema field to the converter that fills its draft slot
pub(crate) struct FieldBinding {
    pub field: Field,
    pub apply: Converter,
}

/// One binding per schema field, in record order
pub(crate) const FIELD_TABLE: [FieldBinding; FIELD_COUNT] = [
    FieldBinding {
        field: Field::Product,
        apply: |d, v, _| {
            d.product = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::DateAndTime,
        apply: |d, v, c| {
            d.timestamp = parse_timestamp(v, &c.timestamp_format)?;
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Duration,
        apply: |d, v, _| {
            d.elapsed = parse_elapsed(v)?;
            Ok(())
        },
    },
    FieldBinding {
        field: Field::ScanMode,
        apply: |d, v, _| {
            d.scan_mode = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::SystemType,
        apply: |d, v, _| {
            d.system_type = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Frequency,
        apply: |d, v, _| {
            d.frequency = parse_float(Field::Frequency, v)?;
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Code,
        apply: |d, v, _| {
            d.code = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::FavoriteName,
        apply: |d, v, _| {
            d.favorite_name = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::SystemName,
        apply: |d, v, _| {
            d.system_name = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::DepartmentName,
        apply: |d, v, _| {
            d.department_name = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::ChannelName,
        apply: |d, v, _| {
            d.channel_name = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Site,
        apply: |d, v, _| {
            d.site_name = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Tgid,
        apply: |d, v, _| {
            d.tgid = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::UnitId,
        apply: |d, v, _| {
            d.unit_id = parse_int(Field::UnitId, v)?;
            Ok(())
        },
    },
    FieldBinding {
        field: Field::UnitIdName,
        apply: |d, v, _| {
            d.unit_id_name = v.to_string();
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Latitude,
        apply: |d, v, _| {
            d.latitude = parse_float(Field::Latitude, v)?;
            Ok(())
        },
    },
    FieldBinding {
        field: Field::Longitude,
        apply: |d, v, _| {
            d.longitude = parse_float(Field::Longitude, v)?;
            Ok(())
        },
    },
];

/// Convert every raw field into its typed draft slot
pub(crate) fn build_draft(fields: &RawFieldSet, config: &DecoderConfig) -> Result<RecordDraft> {
    let mut draft = RecordDraft::default();
    for binding in &FIELD_TABLE {
        (binding.apply)(&mut draft, fields.get(binding.field), config)?;
    }
    Ok(draft)
}

impl RecordDraft {
    /// Project the draft into both views and attach the audio-derived duration
    pub(crate) fn into_recording(self, file: String, duration: Duration) -> DecodedRecording {
        let public = PublicRecord {
            product: self.product,
            timestamp: self.timestamp,
            favorite_list_name: self.favorite_name.clone(),
            system: self.system_name.clone(),
            department: self.department_name.clone(),
            channel: self.channel_name.clone(),
            tgid_freq: self.tgid.clone(),
            unit_id: self.unit_id,
            unit_id_name: self.unit_id_name,
        };

        let private = PrivateRecord {
            system: SystemInfo {
                name: self.system_name,
                system_type: self.system_type,
            },
            department: self.department_name,
            channel: self.channel_name,
            site: SiteInfo {
                name: self.site_name,
            },
            favorite_list: FavoriteList {
                name: self.favorite_name,
            },
            scan_mode: self.scan_mode,
            code: self.code,
            frequency: self.frequency,
            tgid: self.tgid,
            unit_id: self.unit_id,
            location: Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            elapsed: self.elapsed,
        };

        DecodedRecording {
            file,
            duration,
            public,
            private,
        }
    }
}
