//! Test fixtures
//!
//! Builds scanner recordings in memory so tests need no binary assets, and
//! loads the semicolon-delimited fixture table describing them.

use tracing_subscriber::EnvFilter;

use crate::metadata::{Field, FIELD_COUNT};

/// Install a test log subscriber once; `RUST_LOG=scanwav=trace` shows chunk walks
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "scanwav=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// In-memory RIFF/WAVE writer
#[derive(Debug, Clone, Default)]
pub struct WavBuilder {
    chunks: Vec<([u8; 4], Vec<u8>)>,
}

impl WavBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mono/stereo PCM recording with `data_len` bytes of silence and a metadata record
    pub fn recording(
        sample_rate: u32,
        channels: u16,
        bits: u16,
        data_len: usize,
        metadata: &str,
    ) -> Self {
        Self::new()
            .format(sample_rate, channels, bits)
            .data(data_len)
            .metadata(metadata)
    }

    pub fn format(self, sample_rate: u32, channels: u16, bits: u16) -> Self {
        let block_align = channels * bits.div_ceil(8);
        let mut p = Vec::with_capacity(16);
        p.extend_from_slice(&1u16.to_le_bytes());
        p.extend_from_slice(&channels.to_le_bytes());
        p.extend_from_slice(&sample_rate.to_le_bytes());
        p.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
        p.extend_from_slice(&block_align.to_le_bytes());
        p.extend_from_slice(&bits.to_le_bytes());
        self.chunk(b"fmt ", p)
    }

    pub fn data(self, len: usize) -> Self {
        self.chunk(b"data", vec![0x80; len])
    }

    pub fn metadata(self, text: &str) -> Self {
        self.chunk(b"unid", text.as_bytes().to_vec())
    }

    pub fn chunk(mut self, id: &[u8; 4], payload: Vec<u8>) -> Self {
        self.chunks.push((*id, payload));
        self
    }

    /// Serialize all chunks
    pub fn build(&self) -> Vec<u8> {
        self.build_through(None)
    }

    /// Serialize up to and including the first chunk with id `last`
    pub fn build_until(&self, last: &[u8; 4]) -> Vec<u8> {
        self.build_through(Some(last))
    }

    fn build_through(&self, last: Option<&[u8; 4]>) -> Vec<u8> {
        let mut body = Vec::new();
        for (id, payload) in &self.chunks {
            body.extend_from_slice(id);
            body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            body.extend_from_slice(payload);
            if payload.len() % 2 == 1 {
                body.push(0);
            }
            if last == Some(id) {
                break;
            }
        }

        let mut out = Vec::with_capacity(body.len() + 12);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(body.len() as u32 + 4).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(&body);
        out
    }
}

/// Metadata record used by the spot tests
pub const DEMO_METADATA: &str = "DEMO;1/02/2024 03:04:05 PM;00:01:30;Scan;Conventional;\
                                 154415000;CTCSS 123.0;Home;Metro;Police;North Dispatch;;\
                                 154.4150;;;41.5;-87.25";

/// 44.1 kHz mono 16-bit, 441000 bytes of audio: exactly five seconds
pub fn demo_recording() -> Vec<u8> {
    WavBuilder::recording(44100, 1, 16, 441_000, DEMO_METADATA).build()
}

/// One row of the fixture table
#[derive(Debug, Clone)]
pub struct FixtureEntry {
    pub file_name: String,
    /// Metadata text in schema order
    pub fields: Vec<String>,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub audio_bytes: usize,
    pub expected_secs: f64,
}

impl FixtureEntry {
    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    pub fn metadata_text(&self) -> String {
        self.fields.join(";")
    }

    pub fn build(&self) -> Vec<u8> {
        WavBuilder::recording(
            self.sample_rate,
            self.channels,
            self.bits_per_sample,
            self.audio_bytes,
            &self.metadata_text(),
        )
        .build()
    }
}

/// Load a `;`-delimited fixture table with a header row
///
/// Metadata columns are matched by their scanner labels; the audio columns
/// are `File name`, `Sample rate`, `Channels`, `Bits`, `Audio bytes` and
/// `Seconds`.
pub fn load_fixture_table(text: &str) -> Vec<FixtureEntry> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let header: Vec<&str> = lines.next().expect("fixture table has no header").split(';').collect();

    let column = |label: &str| {
        header
            .iter()
            .position(|h| *h == label)
            .unwrap_or_else(|| panic!("fixture table lacks column {:?}", label))
    };
    let metadata_columns: Vec<usize> = Field::ALL.iter().map(|f| column(f.label())).collect();
    assert_eq!(metadata_columns.len(), FIELD_COUNT);

    let file_col = column("File name");
    let rate_col = column("Sample rate");
    let channels_col = column("Channels");
    let bits_col = column("Bits");
    let bytes_col = column("Audio bytes");
    let secs_col = column("Seconds");

    lines
        .map(|line| {
            let cells: Vec<&str> = line.split(';').collect();
            assert_eq!(cells.len(), header.len(), "bad fixture row: {}", line);
            FixtureEntry {
                file_name: cells[file_col].to_string(),
                fields: metadata_columns.iter().map(|&i| cells[i].to_string()).collect(),
                sample_rate: cells[rate_col].parse().unwrap(),
                channels: cells[channels_col].parse().unwrap(),
                bits_per_sample: cells[bits_col].parse().unwrap(),
                audio_bytes: cells[bytes_col].parse().unwrap(),
                expected_secs: cells[secs_col].parse().unwrap(),
            }
        })
        .collect()
}

/// Recordings covering conventional and trunked systems, several audio formats
pub const FIXTURE_TABLE: &str = "\
File name;Scanner type;Date and time;Duration;Scan mode;Type;Frequency;Code;Favorite name;System name;Department name;Channel name;Site;TGID;UID;UID Name;Latitude;Longitude;Sample rate;Channels;Bits;Audio bytes;Seconds
conventional.wav;BCD436HP;3/14/2023 09:26:53 AM;00:00:05;Scan;Conventional;154415000;CTCSS 123.0;Home;Metro County;Police;North Dispatch;;154.4150;;;41.878100;-87.629800;8000;1;16;80000;5
trunked.wav;SDS100;11/05/2023 11:59:59 PM;00:00:02;Scan;P25 Trunk;851012500;NAC 293;Statewide;State Radio;Fire;Ops 2;Simulcast East;1201;4455;Engine 5;40.712800;-74.006000;16000;1;16;40000;1.25
stereo.wav;SDS200;7/04/2024 12:00:00 PM;00:00:01;Close Call;Conventional;462562500;;Events;FRS GMRS;Parade;Channel 1;;462.5625;;;0;0;22050;2;8;44100;1
hold.wav;SDS100;1/01/2025 12:30:15 AM;00:00:03;Hold;DMR One Frequency;453100000;CC 1;Work;Campus;Security;Patrol;Main;101;-2;Unit Neg;35.1;-80.8;8000;1;8;24000;3
";
