//! OBS Marker: timestamped recording markers from a global hotkey.

mod app;
mod app_command;
mod config;
mod error;
mod host_event_feed;
mod hotkey_handler;
mod logging;
mod loop_command;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    host_event_feed::HostEventFeed,
    hotkey_handler::HotkeyHandler,
    loop_command::LoopCommand,
};

use crate::config::Config;

use global_hotkey::{GlobalHotKeyManager, hotkey::HotKey};
use obs_marker_core::{MarkerSession, MonotonicClock, ObsProfileConfig};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tokio::{
    io::BufReader,
    sync::{mpsc, watch},
};
use tracing::{error, info, warn};

/// Application entry point.
fn main() {
    let log_dir = Config::log_dir().ok();
    let mut log_guard = logging::init(log_dir.as_deref());
    if log_dir.is_none() {
        warn!("Log directory unavailable, logging to stderr only");
    }

    let event_loop = EventLoopBuilder::<LoopCommand>::with_user_event().build();
    let loop_proxy = event_loop.create_proxy();

    // Dropping the manager unregisters the hotkey, so it lives in the
    // closure until shutdown.
    let mut hotkey_registration: Option<(GlobalHotKeyManager, HotKey)> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(LoopCommand::Shutdown) => {
                if let Some((manager, hotkey)) = hotkey_registration.take() {
                    HotkeyHandler::unregister_hotkey(manager, hotkey);
                }
                info!("Event loop exiting");
                // Flush the log file before the process exits.
                drop(log_guard.take());
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                match launch(loop_proxy.clone()) {
                    Ok(registration) => hotkey_registration = Some(registration),
                    Err(e) => {
                        error!("Failed to start: {:?}", e);
                        drop(log_guard.take());
                        std::process::exit(1);
                    }
                }
            }
            _ => {}
        }
    });
}

/// Load configuration, register the hotkey on this thread and start the
/// runtime thread that owns the marker session.
fn launch(loop_proxy: EventLoopProxy<LoopCommand>) -> AppResult<(GlobalHotKeyManager, HotKey)> {
    let config_path = Config::config_path()?;
    let config = Config::load_from(&config_path)?;

    let host = ObsProfileConfig::from_config_dir(config.obs_config_dir()?);
    let session = MarkerSession::new(
        config.marker_log_path()?,
        MonotonicClock::new(),
        host.clone(),
    );

    #[cfg(target_os = "macos")]
    unsafe {
        use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
        CFRunLoopWakeUp(CFRunLoopGetMain());
    }

    // Register hotkey on the main thread; tao's event loop pumps the
    // Windows messages needed for WM_HOTKEY delivery.
    let (manager, hotkey) = HotkeyHandler::register_hotkey(&config.hotkey)?;

    let hotkey_id = hotkey.id();
    let (command_tx, command_rx) = mpsc::channel(32);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                let _ = loop_proxy.send_event(LoopCommand::Shutdown);
                return;
            }
        };

        rt.block_on(async {
            let hotkey_handler = HotkeyHandler::new(hotkey_id, command_tx.clone());
            let host_feed = HostEventFeed::new(command_tx);

            let app = App {
                session,
                host: Box::new(host),
                config,
                config_path,
                command_rx,
                shutdown_tx,
            };

            let hotkey_shutdown = shutdown_rx.clone();
            tokio::join!(
                async {
                    if let Err(e) = hotkey_handler.run(hotkey_shutdown).await {
                        error!(error = ?e, "Hotkey handler error");
                    }
                },
                async {
                    let stdin = BufReader::new(tokio::io::stdin());
                    if let Err(e) = host_feed.run(stdin, shutdown_rx).await {
                        error!(error = ?e, "Host event feed error");
                    }
                },
                async {
                    if let Err(e) = app.run().await {
                        error!(error = ?e, "App error");
                    }
                }
            );
        });

        // Stdin reads may still be parked on a blocking thread.
        rt.shutdown_background();

        if loop_proxy.send_event(LoopCommand::Shutdown).is_err() {
            warn!("Event loop already closed");
        }
    });

    Ok((manager, hotkey))
}
