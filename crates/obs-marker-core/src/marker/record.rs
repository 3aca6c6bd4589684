use serde::{Deserialize, Serialize};

/// Default marker color understood by the editor import.
pub const DEFAULT_COLOR: &str = "blue";

/// Color of the synthetic marker written when a recording stops.
pub const END_COLOR: &str = "green";

/// Comment of the marker written at the start of every recording.
pub const START_COMMENT: &str = "Recording Start";

/// Comment of the marker written when a recording stops.
pub const END_COMMENT: &str = "Recording End";

/// A single elapsed-time marker line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Milliseconds since the recording started.
    pub timestamp_ms: u64,
    /// Free text shown in the editor.
    #[serde(default)]
    pub comment: String,
    /// Optional label, empty by default.
    #[serde(default)]
    pub name: String,
    /// UI color hint.
    #[serde(default = "default_color")]
    pub color: String,
}

impl MarkerRecord {
    /// Marker written at `0ms` when a recording starts.
    pub fn recording_start() -> Self {
        Self {
            timestamp_ms: 0,
            comment: START_COMMENT.to_string(),
            name: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Marker written when a recording stops.
    pub fn recording_end(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            comment: END_COMMENT.to_string(),
            name: String::new(),
            color: END_COLOR.to_string(),
        }
    }

    /// User-requested marker with its 1-based sequence number.
    pub fn numbered(timestamp_ms: u64, sequence: u64) -> Self {
        Self {
            timestamp_ms,
            comment: format!("Marker {sequence}"),
            name: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
