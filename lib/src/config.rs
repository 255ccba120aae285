use crate::brightness::BrightnessMethod;
use crate::error::AsciiError;

/// Smallest accepted resize ratio
pub const MIN_RATIO: f64 = 0.01;
/// Largest accepted resize ratio
pub const MAX_RATIO: f64 = 2.0;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Brightness strategy, default hsp
    pub method: BrightnessMethod,
    /// Nearest-neighbor resize ratio, 0.01-2.0, default 1.0
    pub ratio: f64,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            method: BrightnessMethod::default(),
            ratio: 1.0,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), AsciiError> {
        // Written so that NaN is rejected too
        if !(MIN_RATIO..=MAX_RATIO).contains(&self.ratio) {
            return Err(AsciiError::InvalidRatio {
                ratio: self.ratio,
                min: MIN_RATIO,
                max: MAX_RATIO,
            });
        }
        Ok(())
    }
}
