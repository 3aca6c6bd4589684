use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where to find the recording host's own configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// OBS config directory (None = `obs-studio` under the OS config dir).
    #[serde(default)]
    pub obs_config_dir: Option<PathBuf>,
}
