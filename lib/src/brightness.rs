use std::fmt;
use std::str::FromStr;

use image::{ImageBuffer, Luma};
use rayon::prelude::*;
use thiserror::Error;

use crate::resample::PixelGrid;

/// Per-pixel brightness scores, one 16-bit value per cell
pub type BrightnessGrid = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Strategy for collapsing an RGB sample into a single brightness score
///
/// Every variant maps 16-bit channels to a score in `[0, 65535]` using integer
/// arithmetic only, and every variant returns `c` for a gray pixel `(c, c, c)`.
/// Reference: <https://alienryderflex.com/hsp.html>
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BrightnessMethod {
    /// Mean of the three channels
    Avg,
    /// Lightness of HSL: midpoint of the largest and smallest channel
    Hsl,
    /// Value of HSV: the largest channel
    Hsv,
    /// HSP perceived brightness, `sqrt(.299 R² + .587 G² + .114 B²)`
    #[default]
    Hsp,
    /// HSP as first shipped: weights blue's square twice and drops green
    HspLegacy,
}

impl BrightnessMethod {
    /// All methods, in the order they are listed to users
    pub const ALL: [BrightnessMethod; 5] = [
        BrightnessMethod::Avg,
        BrightnessMethod::Hsl,
        BrightnessMethod::Hsv,
        BrightnessMethod::Hsp,
        BrightnessMethod::HspLegacy,
    ];

    /// Name used to select this method
    pub fn name(self) -> &'static str {
        match self {
            BrightnessMethod::Avg => "avg",
            BrightnessMethod::Hsl => "hsl",
            BrightnessMethod::Hsv => "hsv",
            BrightnessMethod::Hsp => "hsp",
            BrightnessMethod::HspLegacy => "hsp-legacy",
        }
    }

    /// Look up a method by name, falling back to the default for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!(
                "unknown brightness method '{name}', using default <{}>",
                BrightnessMethod::default()
            );
            BrightnessMethod::default()
        })
    }

    /// Score one RGB sample
    pub fn brightness(self, r: u16, g: u16, b: u16) -> u16 {
        let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
        let score = match self {
            BrightnessMethod::Avg => (r + g + b) / 3,
            BrightnessMethod::Hsl => (r.max(g).max(b) + r.min(g).min(b)) / 2,
            BrightnessMethod::Hsv => r.max(g).max(b),
            BrightnessMethod::Hsp => weighted_root(r, g, b),
            BrightnessMethod::HspLegacy => weighted_root(r, b, b),
        };
        // Every formula is a mean or root-mean of 16-bit channels
        score as u16
    }
}

/// `isqrt((299 a² + 587 b² + 114 c²) / 1000)`, exact for gray inputs
fn weighted_root(a: u32, b: u32, c: u32) -> u32 {
    let (a, b, c) = (u64::from(a), u64::from(b), u64::from(c));
    let sum = (299 * a * a + 587 * b * b + 114 * c * c) / 1000;
    sum.isqrt() as u32
}

impl fmt::Display for BrightnessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a brightness method name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown brightness method '{0}'")]
pub struct UnknownMethod(pub String);

impl FromStr for BrightnessMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrightnessMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Score every pixel of a grid
///
/// Rows are scored in parallel; the result keeps the input's row order and
/// dimensions. Alpha is ignored.
///
/// # Arguments
/// * `pixels` - 16-bit RGBA pixel grid
/// * `method` - Brightness strategy
///
/// # Returns
/// Brightness grid with the same dimensions as `pixels`
pub fn brightness_grid(pixels: &PixelGrid, method: BrightnessMethod) -> BrightnessGrid {
    let (width, height) = pixels.dimensions();
    let mut output = BrightnessGrid::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    let row_len = width as usize * 4;
    output
        .par_chunks_mut(width as usize)
        .zip(pixels.as_raw().par_chunks(row_len))
        .for_each(|(out_row, in_row)| {
            for (out, px) in out_row.iter_mut().zip(in_row.chunks_exact(4)) {
                *out = method.brightness(px[0], px[1], px[2]);
            }
        });

    output
}
