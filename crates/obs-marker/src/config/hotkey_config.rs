use crate::{AppError, AppResult, config::default_hotkey_binding};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::hotkey::HotKey;
use serde::{Deserialize, Serialize};

/// Persisted marker hotkey.
///
/// The binding is stored exactly as written and only interpreted when the
/// hotkey is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Binding such as `ctrl+shift+KeyM`.
    #[serde(default = "default_hotkey_binding")]
    pub binding: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            binding: default_hotkey_binding(),
        }
    }
}

impl HotkeyConfig {
    /// Parse the stored binding.
    #[track_caller]
    pub fn hotkey(&self) -> AppResult<HotKey> {
        self.binding
            .parse::<HotKey>()
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Invalid hotkey binding {:?}: {}", self.binding, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
