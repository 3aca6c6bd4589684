//! Frame-rate presets and resolution from host video settings.

use crate::{CoreResult, MarkerError};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::warn;

/// Named common rates and their exact rational values.
///
/// The suffixed labels are the ones OBS writes to `FPSCommon`; "24 NTSC" is
/// the 23.976 preset, not 24.
const PRESETS: [(&str, u32, u32); 10] = [
    ("60", 60, 1),
    ("59.94", 60_000, 1001),
    ("50 PAL", 50, 1),
    ("30", 30, 1),
    ("29.97", 30_000, 1001),
    ("25", 25, 1),
    ("25 PAL", 25, 1),
    ("24", 24, 1),
    ("24 NTSC", 24_000, 1001),
    ("23.976", 24_000, 1001),
];

/// How the host expresses its frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FpsType {
    /// A named common rate such as `"29.97"`.
    #[default]
    Common,
    /// A whole number of frames per second.
    Integer,
    /// An explicit numerator/denominator pair.
    Fraction,
}

impl FpsType {
    /// Map the host's numeric mode (0, 1, 2). Unknown values are treated as
    /// a fraction so the explicit fields are still honoured.
    pub fn from_host_value(value: i64) -> Self {
        match value {
            0 => FpsType::Common,
            1 => FpsType::Integer,
            _ => FpsType::Fraction,
        }
    }
}

/// Raw frame-rate fields as read from host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRateSettings {
    /// Which of the fields below is authoritative.
    pub fps_type: FpsType,
    /// Named common rate label.
    pub common: Option<String>,
    /// Integer rate.
    pub integer: Option<u32>,
    /// Explicit numerator.
    pub numerator: Option<u32>,
    /// Explicit denominator.
    pub denominator: Option<u32>,
}

impl FrameRateSettings {
    /// Frame rate from the explicit numerator/denominator fields.
    ///
    /// A missing or zero numerator is an error. A missing or zero denominator
    /// becomes 1.
    #[track_caller]
    pub fn explicit(&self) -> CoreResult<FrameRate> {
        let numerator = match self.numerator {
            Some(n) if n > 0 => n,
            other => {
                return Err(MarkerError::MalformedHostConfig {
                    reason: format!("frame rate numerator is {:?}", other),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let denominator = match self.denominator {
            Some(0) => {
                warn!(numerator, "Frame rate denominator is 0, clamping to 1");
                1
            }
            Some(d) => d,
            None => 1,
        };

        Ok(FrameRate::new(numerator, denominator))
    }
}

/// A rational frame rate. The denominator is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    /// Frames per `denominator` seconds.
    pub numerator: u32,
    /// Always at least 1.
    pub denominator: u32,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FrameRate {
    /// Rate used when host configuration is unavailable or unusable.
    pub const DEFAULT: FrameRate = FrameRate {
        numerator: 60,
        denominator: 1,
    };

    /// Create a rate, clamping a zero denominator to 1.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator: denominator.max(1),
        }
    }

    /// Look up a named common rate. Only whole labels match.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        PRESETS
            .iter()
            .find(|(name, _, _)| *name == label)
            .map(|&(_, num, den)| FrameRate::new(num, den))
    }

    /// Resolve host settings to a concrete rate, never failing.
    pub fn resolve(settings: &FrameRateSettings) -> Self {
        match settings.fps_type {
            FpsType::Common => {
                if let Some(rate) = settings.common.as_deref().and_then(Self::from_label) {
                    return rate;
                }
            }
            FpsType::Integer => {
                if let Some(n) = settings.integer.filter(|n| *n > 0) {
                    return Self::new(n, 1);
                }
            }
            FpsType::Fraction => {}
        }

        match settings.explicit() {
            Ok(rate) => rate,
            Err(e) => {
                warn!(error = %e, "Falling back to default frame rate");
                Self::DEFAULT
            }
        }
    }

    /// Whether this is a 1000/1001 drop-frame family rate.
    pub fn is_ntsc(&self) -> bool {
        self.denominator == 1001
    }

    /// Integer timebase an editor expects: NTSC rates round up to their
    /// nominal value, everything else truncates.
    pub fn timebase(&self) -> u32 {
        if self.is_ntsc() {
            self.numerator.div_ceil(self.denominator)
        } else {
            self.numerator / self.denominator
        }
    }

    /// Frame index at `ms` milliseconds, truncated.
    pub fn frames_at(&self, ms: u64) -> u64 {
        let frames =
            u128::from(ms) * u128::from(self.numerator) / (1000 * u128::from(self.denominator));
        u64::try_from(frames).unwrap_or(u64::MAX)
    }
}
