use crate::config::{Config, DEFAULT_HOTKEY_BINDING, MARKER_LOG_FILE};

use std::{fs, path::PathBuf};

use tempfile::tempdir;

/// WHAT: A missing config file is created with defaults
/// WHY: First launch must not require hand-written configuration
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_loading_then_defaults_written() {
    // Given: An empty directory
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    // When: Loading from it
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults are returned and persisted
    assert_eq!(config, Config::default());
    assert_eq!(config.hotkey.binding, DEFAULT_HOTKEY_BINDING);
    assert!(config.export.premiere_xml);
    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: The hotkey binding survives a save/load cycle verbatim
/// WHY: User bindings persist across restarts
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_binding_when_saved_and_reloaded_then_unchanged() {
    // Given: A config with a custom binding and log path
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.hotkey.binding = "alt+F9".to_string();
    config.output.path = Some(dir.path().join("markers.jsonl"));

    // When: Saved then loaded
    config.save_to(&path).unwrap();
    let reloaded = Config::load_from(&path).unwrap();

    // Then: Identical
    assert_eq!(reloaded, config);
}

/// WHAT: Sections missing from the file take their defaults
/// WHY: Older config files keep loading after new settings are added
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_loading_then_missing_sections_defaulted() {
    // Given: A file with only an output section
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\npath = \"/tmp/marks.jsonl\"\n").unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Output honoured, everything else default
    assert_eq!(config.output.path, Some(PathBuf::from("/tmp/marks.jsonl")));
    assert_eq!(config.hotkey.binding, DEFAULT_HOTKEY_BINDING);
    assert!(config.export.premiere_xml);
    assert_eq!(config.host.obs_config_dir, None);
}

/// WHAT: Malformed TOML is a ConfigError
/// WHY: A broken file must not be silently replaced with defaults
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_file_when_loading_then_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[hotkey\nbinding = ").unwrap();

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(crate::AppError::ConfigError { .. })));
}

/// WHAT: The configured log path overrides the default
/// WHY: Users choose where marker logs land
#[test]
#[allow(clippy::unwrap_used)]
fn given_output_override_when_resolving_log_path_then_override_used() {
    let mut config = Config::default();
    config.output.path = Some(PathBuf::from("/data/markers.jsonl"));

    assert_eq!(
        config.marker_log_path().unwrap(),
        PathBuf::from("/data/markers.jsonl")
    );
}

/// WHAT: The configured OBS directory overrides the platform default
/// WHY: Portable OBS installs keep their config beside the executable
#[test]
#[allow(clippy::unwrap_used)]
fn given_obs_dir_override_when_resolving_then_override_used() {
    let mut config = Config::default();
    config.host.obs_config_dir = Some(PathBuf::from("/opt/obs/config/obs-studio"));

    assert_eq!(
        config.obs_config_dir().unwrap(),
        PathBuf::from("/opt/obs/config/obs-studio")
    );
}

#[test]
fn marker_log_file_name_is_jsonl() {
    assert_eq!(MARKER_LOG_FILE, "timestamps.jsonl");
}
