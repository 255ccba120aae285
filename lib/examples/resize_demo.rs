use asciify::{AsciiConfig, PixelGrid, process_image};
use image::Rgba;

fn main() {
    println!("asciify - Nearest-Neighbor Resize Demo");
    println!("======================================\n");

    // Diagonal gradient
    let (width, height) = (64, 32);
    let img = PixelGrid::from_fn(width, height, |x, y| {
        let v = ((x + y) * u32::from(u16::MAX) / (width + height - 2)) as u16;
        Rgba([v, v, v, u16::MAX])
    });

    let ratios = [0.25, 0.5, 1.0];

    for ratio in ratios {
        let config = AsciiConfig {
            ratio,
            ..Default::default()
        };

        let text = process_image(&img, &config).expect("ratio within range");
        let rows = text.lines().count();
        let cols = text.lines().next().map_or(0, str::len);

        println!("Ratio {ratio}: {width}x{height} -> {cols} columns x {rows} rows");
        println!("{text}");
    }

    // Out-of-range ratios are rejected before any work is done
    let config = AsciiConfig {
        ratio: 4.0,
        ..Default::default()
    };
    match process_image(&img, &config) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Ratio 4.0 rejected: {e}"),
    }
}
