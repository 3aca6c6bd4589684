mod frame_rate;
mod obs_profile;
mod settings;

pub use {
    frame_rate::{FpsType, FrameRate, FrameRateSettings},
    obs_profile::ObsProfileConfig,
    settings::{DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, HostConfigSource, HostSettings},
};
