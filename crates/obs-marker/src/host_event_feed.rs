//! Host notification feed.
//!
//! The recording host forwards its frontend events as newline-delimited names
//! (`recording_started`, `recording_stopped`). Lines naming any other event
//! are ignored. End of input means the host has gone away.

use crate::{AppCommand, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use obs_marker_core::FrontendEvent;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument, warn};

/// Reads host notifications and forwards them to the application loop.
pub struct HostEventFeed {
    command_tx: mpsc::Sender<AppCommand>,
}

impl HostEventFeed {
    /// Create a feed sending into `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Read `reader` line by line until end of input or shutdown, returning
    /// the number of lines read.
    ///
    /// End of input requests application shutdown. Input that closes before
    /// its first line usually means stdin was not connected to the host.
    #[instrument(skip(self, reader, shutdown_rx))]
    pub async fn run<R>(&self, reader: R, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<u64>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut lines_read: u64 = 0;

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Host event feed shutting down");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            lines_read += 1;
                            self.forward_line(&line).await?;
                        }
                        None if lines_read == 0 => {
                            warn!(
                                "Host event feed closed before any input, stdin is not \
                                 connected to the recording host; shutting down"
                            );
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                        None => {
                            info!(lines_read, "Host event feed closed, requesting shutdown");
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(lines_read)
    }

    #[instrument(skip(self))]
    async fn forward_line(&self, line: &str) -> AppResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match line.parse::<FrontendEvent>() {
            Ok(event) => {
                debug!(%event, "Host event received");
                self.send(AppCommand::Host(event)).await
            }
            Err(e) => {
                debug!(error = %e, "Ignoring host event");
                Ok(())
            }
        }
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
