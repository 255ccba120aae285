use std::path::PathBuf;

use asciify::{AsciiConfig, BrightnessMethod, DEFAULT_OUTPUT_PATH};
use clap::Parser;

/// Convert a JPEG, PNG or GIF image into ASCII art text.
#[derive(Parser, Debug)]
#[command(name = "asciify", version, about, long_about = None)]
pub struct Cli {
    /// Image to convert (JPEG, PNG or GIF).
    pub image: PathBuf,

    /// Where to write the text.
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Brightness calculation method: avg, hsl, hsv, hsp or hsp-legacy.
    /// Unknown names fall back to hsp.
    #[arg(short = 'c', long = "method", default_value = "hsp")]
    pub method: String,

    /// Nearest-neighbor resize ratio, between 0.01 and 2.0.
    #[arg(short, long, default_value_t = 1.0)]
    pub ratio: f64,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Build the render configuration from the parsed arguments.
    ///
    /// An unknown method name is not an error: it logs a warning and uses the
    /// default method.
    pub fn to_config(&self) -> AsciiConfig {
        AsciiConfig {
            method: BrightnessMethod::from_name_or_default(&self.method),
            ratio: self.ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["asciify", "cat.png"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("cat.png"));
        assert_eq!(cli.output, PathBuf::from("out/ascii.txt"));
        assert_eq!(cli.to_config(), AsciiConfig::default());
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "asciify", "-c", "avg", "-r", "0.5", "cat.gif", "art/cat.txt",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("art/cat.txt"));
        let config = cli.to_config();
        assert_eq!(config.method, BrightnessMethod::Avg);
        assert_eq!(config.ratio, 0.5);
    }

    #[test]
    fn test_unknown_method_falls_back() {
        let cli = Cli::try_parse_from(["asciify", "--method", "luma", "cat.png"]).unwrap();
        assert_eq!(cli.to_config().method, BrightnessMethod::Hsp);
    }

    #[test]
    fn test_missing_image_is_rejected() {
        assert!(Cli::try_parse_from(["asciify"]).is_err());
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        assert!(Cli::try_parse_from(["asciify", "a.png", "b.txt", "c.txt"]).is_err());
    }
}
