use std::time::Instant;

use chrono::{DateTime, Local};

/// Time source for the session.
pub trait Clock {
    /// Monotonic milliseconds. Only differences between readings matter.
    fn now_ms(&self) -> u64;

    /// Local wall-clock time, used for the metadata line.
    fn wall_time(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Monotonic clock anchored when it was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: Instant,
}

impl MonotonicClock {
    /// Create a clock reading 0 now.
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.anchor.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
