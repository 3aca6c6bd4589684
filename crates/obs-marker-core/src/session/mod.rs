mod clock;
mod event;
#[allow(clippy::module_inception)]
mod session;
mod state;

pub use {
    clock::{Clock, MonotonicClock},
    event::{FrontendEvent, UnknownFrontendEvent},
    session::MarkerSession,
    state::SessionState,
};
