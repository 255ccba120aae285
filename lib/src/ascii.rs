use crate::brightness::{BrightnessGrid, BrightnessMethod, brightness_grid};
use crate::lut::{REPEAT, glyph_for};
use crate::resample::PixelGrid;

/// Compose a brightness grid into text
///
/// Each cell becomes its ramp glyph written `REPEAT` times; every row ends
/// with a newline. An empty grid yields an empty string.
///
/// # Arguments
/// * `grid` - Brightness scores in `[0, 65535]`
///
/// # Returns
/// Row-major text, `width * REPEAT` glyphs per line
pub fn compose(grid: &BrightnessGrid) -> String {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return String::new();
    }

    let mut text = String::with_capacity((width as usize * REPEAT + 1) * height as usize);
    for row in grid.rows() {
        for cell in row {
            let ch = glyph_for(cell[0]);
            for _ in 0..REPEAT {
                text.push(ch);
            }
        }
        text.push('\n');
    }

    text
}

/// Render a pixel grid as ASCII art
///
/// Scores every pixel with `method`, then composes the glyphs.
///
/// # Arguments
/// * `pixels` - Pixel grid to render, already resampled if needed
/// * `method` - Brightness strategy
///
/// # Returns
/// The rendered text
pub fn render(pixels: &PixelGrid, method: BrightnessMethod) -> String {
    compose(&brightness_grid(pixels, method))
}
