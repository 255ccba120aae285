use crate::ascii::render;
use crate::config::AsciiConfig;
use crate::error::AsciiError;
use crate::resample::{PixelGrid, resample};

/// Converts a decoded image into ASCII art text
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Resample with nearest-neighbor lookup (skipped for ratio 1.0)
/// 3. Score each pixel's brightness with the configured method
/// 4. Map scores to ramp glyphs and compose the lines
///
/// # Arguments
/// * `input` - The decoded 16-bit image
/// * `config` - Method and resize ratio
///
/// # Returns
/// The complete rendered text, or `InvalidRatio` if the config is rejected
pub fn process_image(input: &PixelGrid, config: &AsciiConfig) -> Result<String, AsciiError> {
    config.validate()?;

    let working = resample(input, config.ratio);
    let (width, height) = working.dimensions();
    log::debug!(
        "rendering {width}x{height} grid with <{}> brightness",
        config.method
    );

    Ok(render(&working, config.method))
}
