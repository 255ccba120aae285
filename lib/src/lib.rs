//! asciify - image to ASCII text converter
//!
//! Every pixel is scored for brightness and replaced by a glyph from a fixed
//! ramp ordered by visual density. Images can be scaled beforehand with
//! nearest-neighbor resampling.
//!
//! # Example
//! ```no_run
//! use asciify::{AsciiConfig, BrightnessMethod, load_image, process_image, write_text};
//! use std::path::Path;
//!
//! let input = load_image(Path::new("photo.png")).unwrap();
//! let config = AsciiConfig { method: BrightnessMethod::Hsl, ratio: 0.25 };
//! let text = process_image(&input, &config).unwrap();
//! write_text(Path::new("out/ascii.txt"), &text).unwrap();
//! ```

pub mod ascii;
pub mod brightness;
pub mod config;
pub mod decode;
pub mod error;
pub mod lut;
pub mod output;
pub mod processor;
pub mod resample;

// Re-export main types for convenience
pub use ascii::render;
pub use brightness::{BrightnessGrid, BrightnessMethod};
pub use config::AsciiConfig;
pub use decode::{decode_image, load_image};
pub use error::AsciiError;
pub use output::{DEFAULT_OUTPUT_PATH, write_text};
pub use processor::process_image;
pub use resample::{PixelGrid, resample};
