use crate::{
    FpsType, FrameRate, HostConfigSource, MarkerError, ObsProfileConfig,
};

use std::{fs, path::Path};

use tempfile::TempDir;

#[allow(clippy::unwrap_used)]
fn write_profile(obs_dir: &Path, profile: &str, basic_ini: &str) {
    let dir = obs_dir.join("basic").join("profiles").join(profile);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("basic.ini"), basic_ini).unwrap();
}

/// WHAT: The active profile is resolved from the global file
/// WHY: Users record with whichever profile is selected in the host
#[test]
#[allow(clippy::unwrap_used)]
fn given_global_ini_with_profile_when_loading_then_that_profile_read() {
    // Given: Two profiles, the global file pointing at the second
    let obs = TempDir::new().unwrap();
    fs::write(obs.path().join("global.ini"), "[Basic]\nProfile=Stream\nProfileDir=Stream\n").unwrap();
    write_profile(obs.path(), "Untitled", "[SimpleOutput]\nFilePath=/wrong\n");
    write_profile(
        obs.path(),
        "Stream",
        "[Output]\nMode=Simple\n\n[SimpleOutput]\nFilePath=/home/me/Videos\n\n[Video]\nFPSType=0\nFPSCommon=59.94\nOutputCX=2560\nOutputCY=1440\n",
    );

    // When: Loading host settings
    let settings = ObsProfileConfig::from_config_dir(obs.path()).load().unwrap();

    // Then: Values come from the selected profile
    assert_eq!(settings.recording_path, "/home/me/Videos");
    assert_eq!(settings.frame_rate.fps_type, FpsType::Common);
    assert_eq!(FrameRate::resolve(&settings.frame_rate), FrameRate::new(60_000, 1001));
    assert_eq!((settings.output_width, settings.output_height), (2560, 1440));
}

/// WHAT: Advanced output mode reads the advanced recording path
/// WHY: The host keeps separate paths per output mode
#[test]
#[allow(clippy::unwrap_used)]
fn given_advanced_mode_when_loading_then_advanced_path_and_fraction_used() {
    // Given: A default profile in advanced mode with a fractional rate
    let obs = TempDir::new().unwrap();
    write_profile(
        obs.path(),
        "Untitled",
        "[Output]\nMode=Advanced\n\n[SimpleOutput]\nFilePath=/simple\n\n[AdvOut]\nRecFilePath=/advanced\n\n[Video]\nFPSType=2\nFPSNum=120000\nFPSDen=1001\n",
    );

    // When: Loading without a global file
    let settings = ObsProfileConfig::from_config_dir(obs.path()).load().unwrap();

    // Then: Advanced path and explicit fields
    assert_eq!(settings.recording_path, "/advanced");
    assert_eq!(settings.frame_rate.fps_type, FpsType::Fraction);
    assert_eq!(FrameRate::resolve(&settings.frame_rate), FrameRate::new(120_000, 1001));
    assert_eq!((settings.output_width, settings.output_height), (1920, 1080));
}

/// WHAT: A profile file can be read directly
/// WHY: Portable installs keep profiles outside the default directory
#[test]
#[allow(clippy::unwrap_used)]
fn given_profile_file_when_loading_then_zero_denominator_clamped_on_resolve() {
    // Given: A profile with a zero denominator
    let dir = TempDir::new().unwrap();
    let ini = dir.path().join("basic.ini");
    fs::write(&ini, "[Video]\nFPSType=2\nFPSNum=25\nFPSDen=0\n").unwrap();

    // When: Loading
    let settings = ObsProfileConfig::from_profile_file(&ini).load().unwrap();

    // Then: Empty recording path and a usable rate
    assert_eq!(settings.recording_path, "");
    assert_eq!(FrameRate::resolve(&settings.frame_rate), FrameRate::new(25, 1));
}

/// WHAT: A missing config directory reports ConfigUnavailable
/// WHY: The session falls back to defaults on this error
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_obs_directory_when_loading_then_config_unavailable() {
    let dir = TempDir::new().unwrap();

    let result = ObsProfileConfig::from_config_dir(dir.path().join("obs-studio")).load();

    assert!(matches!(result, Err(MarkerError::ConfigUnavailable { .. })));
}

/// WHAT: A missing profile file reports ConfigUnavailable
/// WHY: A deleted profile must not abort recording
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_profile_file_when_loading_then_config_unavailable() {
    let obs = TempDir::new().unwrap();

    let result = ObsProfileConfig::from_config_dir(obs.path()).load();

    assert!(matches!(result, Err(MarkerError::ConfigUnavailable { .. })));
}
