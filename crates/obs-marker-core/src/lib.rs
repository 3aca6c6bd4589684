//! OBS Marker Core Library
//!
//! Marker session state machine for a recording host, writing elapsed-time
//! markers as JSON Lines and converting them into Premiere Pro imports.
//!
//! # Example
//!
//! ```no_run
//! use obs_marker_core::{HostSettings, MarkerSession, MonotonicClock};
//!
//! let mut session = MarkerSession::new(
//!     "timestamps.jsonl",
//!     MonotonicClock::new(),
//!     HostSettings::default(),
//! );
//!
//! session.on_recording_started();
//! session.on_marker_requested();
//! session.on_recording_stopped();
//! ```

mod error;
mod export;
mod host;
mod marker;
mod session;

pub use {
    error::MarkerError,
    error::Result as CoreResult,
    export::{PremiereExport, color_code, export_path, find_matching_video},
    host::{
        DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, FpsType, FrameRate, FrameRateSettings,
        HostConfigSource, HostSettings, ObsProfileConfig,
    },
    marker::{
        DEFAULT_COLOR, END_COLOR, END_COMMENT, METADATA_TIMESTAMP_FORMAT, MarkerLog,
        MarkerRecord, MarkerWriter, RecordingMetadata, START_COMMENT,
    },
    session::{
        Clock, FrontendEvent, MarkerSession, MonotonicClock, SessionState,
        UnknownFrontendEvent,
    },
};

#[cfg(test)]
mod tests;
