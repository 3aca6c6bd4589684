use crate::{AppCommand, AppResult, config::Config};

use std::path::PathBuf;

use obs_marker_core::{
    FrontendEvent, HostConfigSource, HostSettings, MarkerSession, PremiereExport,
};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument, warn};

/// Main application state.
///
/// Runs on the async runtime thread and is the only owner of the marker
/// session: every command is applied in arrival order from one channel.
pub struct App {
    pub(crate) session: MarkerSession,
    pub(crate) host: Box<dyn HostConfigSource + Send>,
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application loop until shutdown is requested.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("OBS Marker starting");

        loop {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    match result {
                        Ok(()) => info!("Interrupt received, shutting down"),
                        Err(e) => error!(error = ?e, "Failed to listen for interrupt"),
                    }
                    break;
                }

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(AppCommand::MarkerRequested) => self.session.on_marker_requested(),
                        Some(AppCommand::Host(event)) => self.handle_host_event(event),
                        Some(AppCommand::Shutdown) => {
                            info!("Shutdown requested");
                            break;
                        }
                        None => {
                            info!("All channels closed, shutting down");
                            break;
                        }
                    }
                }
            }
        }

        self.session.shutdown();

        // Persists the hotkey binding exactly as loaded.
        if let Err(e) = self.config.save_to(&self.config_path) {
            error!(error = ?e, "Failed to save configuration");
        }

        let _ = self.shutdown_tx.send(true);
        info!("OBS Marker shut down successfully");

        Ok(())
    }

    /// Apply a host notification, exporting editor markers after a stop.
    #[instrument(skip(self))]
    fn handle_host_event(&mut self, event: FrontendEvent) {
        let was_recording = self.session.is_active();

        self.session.handle(event);

        if event == FrontendEvent::RecordingStopped
            && was_recording
            && self.config.export.premiere_xml
        {
            match self.export_markers() {
                Ok(Some(path)) => info!(path = ?path, "Editor markers written"),
                Ok(None) => {}
                Err(e) => error!(error = ?e, "Failed to export editor markers"),
            }
        }
    }

    /// Convert the finished marker log into a Premiere Pro import.
    fn export_markers(&self) -> AppResult<Option<PathBuf>> {
        let Some(log_path) = self.session.output_path() else {
            warn!("No marker log to export");
            return Ok(None);
        };

        let settings = self.host.load().unwrap_or_else(|e| {
            warn!(error = %e, "Host configuration unavailable, exporting with defaults");
            HostSettings::default()
        });

        let export = PremiereExport {
            sequence_name: self.config.export.sequence_name.clone(),
            width: settings.output_width,
            height: settings.output_height,
            ..PremiereExport::default()
        };

        Ok(Some(export.export_log(log_path)?))
    }
}
