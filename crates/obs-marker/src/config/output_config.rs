use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Marker log destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Override for the marker log path (None = `timestamps.jsonl` in the
    /// config directory).
    #[serde(default)]
    pub path: Option<PathBuf>,
}
