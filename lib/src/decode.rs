//! Image loading
//!
//! Only JPEG, PNG and GIF are rendered. The format is detected from the
//! content, not the file extension, and anything else is rejected even when
//! the `image` crate could decode it.
//!
//! Channels are widened to 16 bits and premultiplied by alpha.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use image::{ImageFormat, ImageReader, Rgba};

use crate::error::AsciiError;
use crate::resample::PixelGrid;

/// Formats accepted for rendering
pub const SUPPORTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Gif];

/// Open and decode an image file
///
/// Animated GIFs yield their first frame.
pub fn load_image(path: &Path) -> Result<PixelGrid, AsciiError> {
    let file = File::open(path).map_err(|e| AsciiError::io(path, e))?;
    decode_reader(BufReader::new(file))
}

/// Decode an in-memory image
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, AsciiError> {
    decode_reader(Cursor::new(bytes))
}

fn decode_reader<R: BufRead + Seek>(reader: R) -> Result<PixelGrid, AsciiError> {
    let reader = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;

    match reader.format() {
        Some(format) if !SUPPORTED_FORMATS.contains(&format) => {
            return Err(AsciiError::UnsupportedFormat {
                format: format_name(format),
            });
        }
        // Unrecognised content falls through; the decoder reports it
        _ => {}
    }

    let mut grid = reader.decode()?.to_rgba16();
    grid.pixels_mut().for_each(premultiply);
    Ok(grid)
}

/// Scale color channels by alpha, so transparent pixels score as black
fn premultiply(px: &mut Rgba<u16>) {
    let alpha = u32::from(px[3]);
    for c in &mut px.0[..3] {
        *c = (u32::from(*c) * alpha / u32::from(u16::MAX)) as u16;
    }
}

fn format_name(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map_or_else(|| format!("{format:?}").to_lowercase(), |ext| (*ext).to_string())
}
