/// Commands sent from the async runtime thread to the main event loop.
///
/// The hotkey manager must be released on the thread that created it, so
/// shutdown is requested through the event loop proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Unregister the hotkey and exit the event loop.
    Shutdown,
}
