//! Global marker hotkey.
//!
//! Registers the persisted binding as a global hotkey and forwards each press
//! to the application loop as a marker request. Releases are ignored.

use crate::{AppCommand, AppError, AppResult, config::HotkeyConfig};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Forwards marker hotkey presses to the application loop.
pub struct HotkeyHandler {
    hotkey_id: u32,
    command_tx: mpsc::Sender<AppCommand>,
}

impl HotkeyHandler {
    /// Register the configured binding as a global hotkey.
    ///
    /// Must be called on a thread with a message pump (e.g. the main thread
    /// running a `tao` event loop) so that `WM_HOTKEY` messages are
    /// dispatched on Windows. The returned [`GlobalHotKeyManager`] must be
    /// kept alive on that thread for the hotkey to remain registered.
    #[track_caller]
    #[instrument]
    pub fn register_hotkey(config: &HotkeyConfig) -> AppResult<(GlobalHotKeyManager, HotKey)> {
        let hotkey = config.hotkey()?;

        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        manager
            .register(hotkey)
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to register {}: {}", config.binding, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(hotkey = %config.binding, "Marker hotkey registered");

        Ok((manager, hotkey))
    }

    /// Remove the registration made by [`register_hotkey`](Self::register_hotkey).
    #[instrument(skip(manager))]
    pub fn unregister_hotkey(manager: GlobalHotKeyManager, hotkey: HotKey) {
        match manager.unregister(hotkey) {
            Ok(()) => info!("Marker hotkey unregistered"),
            Err(e) => warn!(error = %e, "Failed to unregister marker hotkey"),
        }
    }

    /// Create a handler for a previously registered hotkey.
    ///
    /// The `hotkey_id` should come from [`register_hotkey`](Self::register_hotkey).
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel.
    pub fn new(hotkey_id: u32, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            hotkey_id,
            command_tx,
        }
    }

    /// Run the hotkey forwarding loop until a shutdown signal is received.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // GlobalHotKeyEvent::receiver() is a blocking crossbeam receiver, so
        // one blocking task forwards into the async channel. It exits on the
        // first blocking_send after event_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    if event.id == self.hotkey_id {
                        self.handle_hotkey_event(event.state).await?;
                    }
                }
            }
        }

        drop(event_rx);

        // The blocking task may sit in recv() until another hotkey event
        // arrives, so the join is bounded.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    /// Forward a press as a marker request. Only the press edge counts.
    #[instrument(skip(self))]
    pub(crate) async fn handle_hotkey_event(&self, state: HotKeyState) -> AppResult<()> {
        if state != HotKeyState::Pressed {
            return Ok(());
        }

        self.command_tx
            .send(AppCommand::MarkerRequested)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send MarkerRequested: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Marker hotkey pressed");

        Ok(())
    }
}
