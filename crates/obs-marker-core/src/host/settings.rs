use crate::{CoreResult, host::FrameRateSettings};

/// Default output width when the host does not report one.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 1920;

/// Default output height when the host does not report one.
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 1080;

/// Host values the marker log cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    /// Directory recordings are written into. Empty when unknown.
    pub recording_path: String,
    /// Frame-rate fields, resolved lazily.
    pub frame_rate: FrameRateSettings,
    /// Output video width in pixels.
    pub output_width: u32,
    /// Output video height in pixels.
    pub output_height: u32,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            recording_path: String::new(),
            frame_rate: FrameRateSettings::default(),
            output_width: DEFAULT_OUTPUT_WIDTH,
            output_height: DEFAULT_OUTPUT_HEIGHT,
        }
    }
}

/// Source of host settings, queried at every recording start.
pub trait HostConfigSource {
    /// Load the current settings.
    ///
    /// Errors are absorbed by the caller, which falls back to
    /// [`HostSettings::default`].
    fn load(&self) -> CoreResult<HostSettings>;
}

impl HostConfigSource for HostSettings {
    fn load(&self) -> CoreResult<HostSettings> {
        Ok(self.clone())
    }
}
