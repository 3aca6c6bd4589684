use obs_marker_core::FrontendEvent;

/// Commands delivered to the application loop, which owns the marker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// The marker hotkey was pressed.
    MarkerRequested,
    /// The recording host sent a frontend notification.
    Host(FrontendEvent),
    /// Request application shutdown.
    Shutdown,
}
