use uuid::Uuid;

/// Marker session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No recording in progress; marker requests are ignored.
    #[default]
    Idle,
    /// A recording is in progress.
    Recording {
        /// Monotonic clock reading when recording started.
        started_at_ms: u64,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}
