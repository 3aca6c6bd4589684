//! Marker session state machine.
//!
//! Two host notifications (recording started/stopped) and one user action
//! (marker requested) drive an `Idle`/`Recording` state machine that writes
//! a JSON Lines log. Handlers never return errors: failed writes are dropped
//! and logged so the host's own recording is never interrupted.

use crate::{
    host::{HostConfigSource, HostSettings},
    marker::{MarkerRecord, MarkerWriter, RecordingMetadata},
    session::{Clock, FrontendEvent, SessionState},
};

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// State machine owning the marker log for one host process.
pub struct MarkerSession {
    state: SessionState,
    marker_count: u64,
    writer: MarkerWriter,
    clock: Box<dyn Clock + Send>,
    host: Box<dyn HostConfigSource + Send>,
}

impl MarkerSession {
    /// Create an idle session writing to `output_path`.
    ///
    /// An empty path is accepted and leaves the session without a
    /// destination; every write is then dropped and logged.
    pub fn new(
        output_path: impl Into<PathBuf>,
        clock: impl Clock + Send + 'static,
        host: impl HostConfigSource + Send + 'static,
    ) -> Self {
        let writer = MarkerWriter::new(output_path);
        match writer.path() {
            Some(path) => info!(output_path = ?path, "Marker session created"),
            None => warn!("Marker session created without an output path"),
        }

        Self {
            state: SessionState::Idle,
            marker_count: 0,
            writer,
            clock: Box::new(clock),
            host: Box::new(host),
        }
    }

    /// Whether a recording is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Recording { .. })
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Markers requested in the current (or last) recording.
    pub fn marker_count(&self) -> u64 {
        self.marker_count
    }

    /// Clock reading captured at the current recording's start.
    pub fn start_time_ms(&self) -> Option<u64> {
        match self.state {
            SessionState::Recording { started_at_ms, .. } => Some(started_at_ms),
            SessionState::Idle => None,
        }
    }

    /// Destination log file, if configured.
    pub fn output_path(&self) -> Option<&Path> {
        self.writer.path()
    }

    /// Change the destination log file. Empty paths are ignored.
    ///
    /// Takes effect on the next write; a recording in progress continues in
    /// the new file without a fresh metadata line.
    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if self.writer.set_path(&path) {
            info!(output_path = ?path, "Marker output path set");
        } else {
            warn!("Ignoring empty marker output path");
        }
    }

    /// Dispatch a host notification.
    pub fn handle(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::RecordingStarted => self.on_recording_started(),
            FrontendEvent::RecordingStopped => self.on_recording_stopped(),
        }
    }

    /// Start (or re-arm) a recording session.
    ///
    /// A start while already recording behaves like a fresh start: the
    /// counter resets and the log is truncated again.
    #[instrument(skip(self))]
    pub fn on_recording_started(&mut self) {
        if let SessionState::Recording { session_id, .. } = self.state {
            warn!(
                previous_session_id = %session_id,
                markers = self.marker_count,
                "Recording started while already recording, re-arming session"
            );
        }

        let started_at_ms = self.clock.now_ms();
        let session_id = Uuid::new_v4();

        self.marker_count = 0;
        self.state = SessionState::Recording {
            started_at_ms,
            session_id,
        };

        let settings = self.host.load().unwrap_or_else(|e| {
            warn!(error = %e, "Host configuration unavailable, using defaults");
            HostSettings::default()
        });
        let metadata = RecordingMetadata::new(&settings, self.clock.wall_time());

        match self.writer.begin(&metadata, &MarkerRecord::recording_start()) {
            Ok(()) => info!(
                session_id = %session_id,
                output_path = ?self.writer.path(),
                fps_num = metadata.fps_num,
                fps_den = metadata.fps_den,
                "Recording started, marker file reset"
            ),
            Err(e) => error!(
                session_id = %session_id,
                error = %e,
                "Recording started but marker file could not be reset"
            ),
        }
    }

    /// Finish the current recording with a green end marker.
    #[instrument(skip(self))]
    pub fn on_recording_stopped(&mut self) {
        let SessionState::Recording {
            started_at_ms,
            session_id,
        } = self.state
        else {
            debug!("Recording stopped while idle, ignoring");
            return;
        };

        let elapsed = self.clock.now_ms().saturating_sub(started_at_ms);
        self.state = SessionState::Idle;

        match self.writer.append(&MarkerRecord::recording_end(elapsed)) {
            Ok(()) => info!(
                session_id = %session_id,
                duration_ms = elapsed,
                markers = self.marker_count,
                "Recording stopped"
            ),
            Err(e) => error!(
                session_id = %session_id,
                error = %e,
                "Recording stopped but end marker was dropped"
            ),
        }
    }

    /// Record a numbered marker at the current elapsed time.
    #[instrument(skip(self))]
    pub fn on_marker_requested(&mut self) {
        let SessionState::Recording {
            started_at_ms,
            session_id,
        } = self.state
        else {
            debug!("Marker requested while idle, ignoring");
            return;
        };

        self.marker_count += 1;
        let elapsed = self.clock.now_ms().saturating_sub(started_at_ms);
        let marker = MarkerRecord::numbered(elapsed, self.marker_count);

        match self.writer.append(&marker) {
            Ok(()) => info!(
                session_id = %session_id,
                timestamp_ms = elapsed,
                comment = %marker.comment,
                "Marker saved"
            ),
            Err(e) => error!(
                session_id = %session_id,
                timestamp_ms = elapsed,
                error = %e,
                "Marker dropped"
            ),
        }
    }

    /// Tear the session down at process exit.
    #[instrument(skip(self))]
    pub fn shutdown(self) {
        if let SessionState::Recording { session_id, .. } = self.state {
            warn!(
                session_id = %session_id,
                markers = self.marker_count,
                "Shutting down during a recording, marker log has no end marker"
            );
        }
        info!("Marker session shut down");
    }
}
