//! Glyph ramp lookup
//!
//! The ramp orders printable ASCII characters by how much ink they put on a
//! cell, from the sparsest (index 0, darkest) to the densest (last index,
//! brightest).

/// Glyph ramp, darkest to brightest
pub const GLYPH_RAMP: &[u8] =
    b"`.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// Largest brightness value a pixel can score (one full 16-bit channel)
pub const MAX_BRIGHTNESS: u32 = u16::MAX as u32;

/// Divisor used to turn a brightness into a ramp index.
///
/// One past `MAX_BRIGHTNESS`, so that `len * MAX_BRIGHTNESS / INDEX_DIVISOR`
/// is always the last ramp index.
pub const INDEX_DIVISOR: u32 = MAX_BRIGHTNESS + 1;

/// Number of times each glyph is written per pixel.
///
/// Terminal cells are roughly twice as tall as wide; doubling every glyph
/// keeps the picture's proportions.
pub const REPEAT: usize = 2;

/// Map a brightness score to its ramp index
///
/// # Arguments
/// * `brightness` - Brightness in `[0, MAX_BRIGHTNESS]`
///
/// # Returns
/// Index into `GLYPH_RAMP`, `floor(len * brightness / INDEX_DIVISOR)`
pub fn ramp_index(brightness: u16) -> usize {
    GLYPH_RAMP.len() * brightness as usize / INDEX_DIVISOR as usize
}

/// Get the glyph for a brightness score
pub fn glyph_for(brightness: u16) -> char {
    GLYPH_RAMP[ramp_index(brightness)] as char
}
