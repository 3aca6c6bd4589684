use crate::host::{FrameRate, HostSettings};

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Wall-clock format used in the metadata line.
pub const METADATA_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-recording metadata written as the first line of each session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    /// Directory the host writes recordings into.
    #[serde(default)]
    pub recording_path: String,
    /// Local wall-clock time the recording started, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub timestamp: String,
    /// Frame rate numerator.
    pub fps_num: u32,
    /// Frame rate denominator, never zero when written by this crate.
    pub fps_den: u32,
}

impl RecordingMetadata {
    /// Build metadata from resolved host settings.
    pub fn new(settings: &HostSettings, started_at: DateTime<Local>) -> Self {
        let rate = FrameRate::resolve(&settings.frame_rate);

        Self {
            recording_path: settings.recording_path.clone(),
            timestamp: started_at.format(METADATA_TIMESTAMP_FORMAT).to_string(),
            fps_num: rate.numerator,
            fps_den: rate.denominator,
        }
    }

    /// Frame rate carried by this metadata, with a zero denominator clamped.
    pub fn frame_rate(&self) -> FrameRate {
        FrameRate::new(self.fps_num, self.fps_den)
    }

    /// Parse the wall-clock timestamp back, if it is well formed.
    pub fn started_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, METADATA_TIMESTAMP_FORMAT).ok()
    }
}

/// Wrapper producing `{"metadata": {...}}` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MetadataLine {
    pub(crate) metadata: RecordingMetadata,
}
