use std::{fmt, str::FromStr};

/// Notifications delivered by the host's frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    /// The host began writing a recording.
    RecordingStarted,
    /// The host finished writing a recording.
    RecordingStopped,
}

/// Host event name that is not one of the two recording notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrontendEvent(pub String);

impl fmt::Display for UnknownFrontendEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown frontend event: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFrontendEvent {}

impl FromStr for FrontendEvent {
    type Err = UnknownFrontendEvent;

    /// Accepts `recording_started`, `recording-started`,
    /// `OBS_FRONTEND_EVENT_RECORDING_STARTED` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized
            .strip_prefix("obs_frontend_event_")
            .unwrap_or(&normalized);

        match name {
            "recording_started" => Ok(FrontendEvent::RecordingStarted),
            "recording_stopped" => Ok(FrontendEvent::RecordingStopped),
            _ => Err(UnknownFrontendEvent(s.trim().to_string())),
        }
    }
}

impl fmt::Display for FrontendEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendEvent::RecordingStarted => f.write_str("recording_started"),
            FrontendEvent::RecordingStopped => f.write_str("recording_stopped"),
        }
    }
}
