use std::borrow::Cow;

use image::{ImageBuffer, Rgba};

/// Decoded image, 16 bits per channel
pub type PixelGrid = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Target dimensions for a resize ratio: `floor(w * ratio) x floor(h * ratio)`
pub fn scaled_dimensions(width: u32, height: u32, ratio: f64) -> (u32, u32) {
    (
        (f64::from(width) * ratio).floor() as u32,
        (f64::from(height) * ratio).floor() as u32,
    )
}

/// Rescale a pixel grid with nearest-neighbor lookup
///
/// Destination pixel `(x, y)` is a verbatim copy of source pixel
/// `(floor(x / ratio), floor(y / ratio))`; nothing is blended.
/// A ratio of exactly `1.0` borrows the source unchanged.
///
/// The ratio is not range-checked here (see `AsciiConfig::validate`), but it
/// must be a positive, finite number.
///
/// # Arguments
/// * `src` - Source grid
/// * `ratio` - Scale factor
///
/// # Returns
/// The resampled grid, or the source itself for the identity ratio
pub fn resample(src: &PixelGrid, ratio: f64) -> Cow<'_, PixelGrid> {
    assert!(
        ratio.is_finite() && ratio > 0.0,
        "Resize ratio must be positive and finite"
    );

    if ratio == 1.0 {
        return Cow::Borrowed(src);
    }

    let (src_width, src_height) = src.dimensions();
    let (width, height) = scaled_dimensions(src_width, src_height, ratio);
    log::debug!("resampling {src_width}x{src_height} -> {width}x{height} (ratio {ratio})");

    let source_coord = |dst: u32, limit: u32| -> u32 {
        // Float rounding must not step past the last source pixel
        ((f64::from(dst) / ratio).floor() as u32).min(limit - 1)
    };

    Cow::Owned(PixelGrid::from_fn(width, height, |x, y| {
        *src.get_pixel(source_coord(x, src_width), source_coord(y, src_height))
    }))
}
