mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    run(&cli)?;
    Ok(())
}

/// Load, render and write one image. Returns the number of bytes written.
///
/// Nothing is written unless every earlier step succeeded.
fn run(cli: &Cli) -> Result<usize> {
    // Reject a bad ratio before touching the image
    let config = cli.to_config();
    config.validate()?;
    log::info!("Brightness calculation method: {}", config.method);

    let input = asciify::load_image(&cli.image)
        .with_context(|| format!("failed to load {}", cli.image.display()))?;
    let (width, height) = input.dimensions();
    log::info!("Image loaded with size {width}x{height}");

    let text = asciify::process_image(&input, &config)?;

    let written = asciify::write_text(&cli.output, &text)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!(
        "ASCII art generated: {written} bytes written to {}",
        cli.output.display()
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciify::AsciiError;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::path::Path;

    fn save(path: &Path, format: ImageFormat) {
        RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        })
        .save_with_format(path, format)
        .unwrap();
    }

    fn args(image: &Path, output: &Path, extra: &[&str]) -> Cli {
        let mut argv = vec!["asciify".to_string()];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv.push(image.display().to_string());
        argv.push(output.display().to_string());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("in.png");
        let output = dir.path().join("out/ascii.txt");
        save(&image, ImageFormat::Png);

        let written = run(&args(&image, &output, &["-c", "avg"])).unwrap();

        assert_eq!(written, 2 * (4 * 2 + 1));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "````@@@@\n````@@@@\n"
        );
    }

    #[test]
    fn test_bad_ratio_fails_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("missing.png");
        let output = dir.path().join("ascii.txt");

        let err = run(&args(&image, &output, &["-r", "3.5"])).unwrap_err();

        assert!(
            matches!(
                err.downcast_ref::<AsciiError>(),
                Some(AsciiError::InvalidRatio { .. })
            ),
            "{err:?}"
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("in.bmp");
        let output = dir.path().join("out/ascii.txt");
        save(&image, ImageFormat::Bmp);

        let err = run(&args(&image, &output, &[])).unwrap_err();

        assert!(
            matches!(
                err.downcast_ref::<AsciiError>(),
                Some(AsciiError::UnsupportedFormat { .. })
            ),
            "{err:?}"
        );
        assert!(!output.exists());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_image_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ascii.txt");

        let err = run(&args(&dir.path().join("nope.png"), &output, &[])).unwrap_err();

        assert!(
            matches!(err.downcast_ref::<AsciiError>(), Some(AsciiError::Io { .. })),
            "{err:?}"
        );
        assert!(!output.exists());
    }
}
