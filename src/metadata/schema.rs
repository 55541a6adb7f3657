//! Positional field schema of the metadata record

/// Number of fields every metadata record must carry
pub const FIELD_COUNT: usize = 17;

/// Metadata fields in record order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Product,
    DateAndTime,
    Duration,
    ScanMode,
    SystemType,
    Frequency,
    Code,
    FavoriteName,
    SystemName,
    DepartmentName,
    ChannelName,
    Site,
    Tgid,
    UnitId,
    UnitIdName,
    Latitude,
    Longitude,
}

impl Field {
    /// All fields, in the order they appear in the record
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Product,
        Field::DateAndTime,
        Field::Duration,
        Field::ScanMode,
        Field::SystemType,
        Field::Frequency,
        Field::Code,
        Field::FavoriteName,
        Field::SystemName,
        Field::DepartmentName,
        Field::ChannelName,
        Field::Site,
        Field::Tgid,
        Field::UnitId,
        Field::UnitIdName,
        Field::Latitude,
        Field::Longitude,
    ];

    /// Position of this field in the record
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column label used by the scanner's desktop software
    pub fn label(self) -> &'static str {
        match self {
            Field::Product => "Scanner type",
            Field::DateAndTime => "Date and time",
            Field::Duration => "Duration",
            Field::ScanMode => "Scan mode",
            Field::SystemType => "Type",
            Field::Frequency => "Frequency",
            Field::Code => "Code",
            Field::FavoriteName => "Favorite name",
            Field::SystemName => "System name",
            Field::DepartmentName => "Department name",
            Field::ChannelName => "Channel name",
            Field::Site => "Site",
            Field::Tgid => "TGID",
            Field::UnitId => "UID",
            Field::UnitIdName => "UID Name",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }

    /// Name reported when the field fails to convert
    pub fn name(self) -> &'static str {
        match self {
            Field::Product => "product",
            Field::DateAndTime => "timestamp",
            Field::Duration => "duration",
            Field::ScanMode => "scanMode",
            Field::SystemType => "systemType",
            Field::Frequency => "frequency",
            Field::Code => "code",
            Field::FavoriteName => "favoriteName",
            Field::SystemName => "systemName",
            Field::DepartmentName => "departmentName",
            Field::ChannelName => "channelName",
            Field::Site => "site",
            Field::Tgid => "tgid",
            Field::UnitId => "unitId",
            Field::UnitIdName => "unitIdName",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
        }
    }
}
