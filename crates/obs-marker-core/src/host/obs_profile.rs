//! Reads OBS Studio's INI configuration for recording path and video settings.
//!
//! The active profile is resolved on every load, so switching profiles in
//! the host between recordings is picked up.

use crate::{
    CoreResult, MarkerError,
    host::{
        DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, FpsType, FrameRateSettings,
        HostConfigSource, HostSettings,
    },
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use config::{Config, File, FileFormat};
use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Profile directory name OBS uses on a fresh install.
const DEFAULT_PROFILE_DIR: &str = "Untitled";

/// Global files that may name the active profile, newest layout first.
const GLOBAL_FILES: [&str; 2] = ["user.ini", "global.ini"];

#[derive(Debug, Clone)]
enum ProfileLocation {
    /// Resolve `basic/profiles/<ProfileDir>/basic.ini` under an OBS config dir.
    ConfigDir(PathBuf),
    /// Read this `basic.ini` directly.
    File(PathBuf),
}

/// [`HostConfigSource`] backed by OBS profile files.
#[derive(Debug, Clone)]
pub struct ObsProfileConfig {
    location: ProfileLocation,
}

impl ObsProfileConfig {
    /// Use the active profile under an OBS config directory
    /// (e.g. `~/.config/obs-studio`).
    pub fn from_config_dir(obs_config_dir: impl Into<PathBuf>) -> Self {
        Self {
            location: ProfileLocation::ConfigDir(obs_config_dir.into()),
        }
    }

    /// Read a specific profile `basic.ini`.
    pub fn from_profile_file(basic_ini: impl Into<PathBuf>) -> Self {
        Self {
            location: ProfileLocation::File(basic_ini.into()),
        }
    }

    /// Path of the profile file the next load will read.
    #[track_caller]
    pub fn profile_path(&self) -> CoreResult<PathBuf> {
        match &self.location {
            ProfileLocation::File(path) => Ok(path.clone()),
            ProfileLocation::ConfigDir(dir) => {
                if !dir.is_dir() {
                    return Err(MarkerError::ConfigUnavailable {
                        reason: format!("OBS config directory not found: {:?}", dir),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }

                let profile = active_profile_dir(dir);
                Ok(dir
                    .join("basic")
                    .join("profiles")
                    .join(profile)
                    .join("basic.ini"))
            }
        }
    }
}

impl HostConfigSource for ObsProfileConfig {
    #[track_caller]
    #[instrument(skip(self))]
    fn load(&self) -> CoreResult<HostSettings> {
        let path = self.profile_path()?;
        let ini = IniLookup::open(&path)?;

        let mode = ini.string("Output", "Mode").unwrap_or_default();
        let simple_path = ini.string("SimpleOutput", "FilePath");
        let recording_path = if mode.eq_ignore_ascii_case("Advanced") {
            ini.string("AdvOut", "RecFilePath").or(simple_path)
        } else {
            simple_path
        }
        .unwrap_or_default();

        let frame_rate = FrameRateSettings {
            fps_type: ini
                .integer("Video", "FPSType")
                .map(FpsType::from_host_value)
                .unwrap_or_default(),
            common: ini.string("Video", "FPSCommon"),
            integer: ini.unsigned("Video", "FPSInt"),
            numerator: ini.unsigned("Video", "FPSNum"),
            denominator: ini.unsigned("Video", "FPSDen"),
        };

        let settings = HostSettings {
            recording_path,
            frame_rate,
            output_width: ini
                .unsigned("Video", "OutputCX")
                .filter(|w| *w > 0)
                .unwrap_or(DEFAULT_OUTPUT_WIDTH),
            output_height: ini
                .unsigned("Video", "OutputCY")
                .filter(|h| *h > 0)
                .unwrap_or(DEFAULT_OUTPUT_HEIGHT),
        };

        debug!(path = ?path, ?settings, "Host settings loaded");

        Ok(settings)
    }
}

/// Name of the active profile directory, from `[Basic] ProfileDir`.
fn active_profile_dir(obs_config_dir: &Path) -> String {
    GLOBAL_FILES
        .iter()
        .map(|name| obs_config_dir.join(name))
        .filter(|path| path.is_file())
        .find_map(|path| {
            IniLookup::open(&path)
                .ok()
                .and_then(|ini| ini.string("Basic", "ProfileDir"))
                .filter(|dir| !dir.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_PROFILE_DIR.to_string())
}

/// Section+key lookups over an INI file.
struct IniLookup {
    inner: Config,
}

impl IniLookup {
    #[track_caller]
    fn open(path: &Path) -> CoreResult<Self> {
        let inner = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini).required(true))
            .build()
            .map_err(|e| MarkerError::ConfigUnavailable {
                reason: format!("Failed to read {:?}: {}", path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { inner })
    }

    /// Keys may be stored as written or lowercased depending on the loader,
    /// so both spellings are tried.
    fn string(&self, section: &str, key: &str) -> Option<String> {
        let exact = format!("{section}.{key}");
        self.inner
            .get_string(&exact)
            .or_else(|_| self.inner.get_string(&exact.to_lowercase()))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn integer(&self, section: &str, key: &str) -> Option<i64> {
        self.string(section, key)?.parse().ok()
    }

    fn unsigned(&self, section: &str, key: &str) -> Option<u32> {
        self.string(section, key)?.parse().ok()
    }
}
