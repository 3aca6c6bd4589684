mod frame_rate;
mod log;
mod obs_profile;

use crate::Clock;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Clock whose reading only moves when a test advances it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub(crate) fn starting_at(ms: u64) -> Self {
        let clock = Self::default();
        clock.now_ms.store(ms, Ordering::SeqCst);
        clock
    }

    pub(crate) fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// Non-empty lines of a file, parsed as JSON.
#[allow(clippy::unwrap_used)]
pub(crate) fn json_lines(path: &std::path::Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
