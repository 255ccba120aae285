/// Basic example: render a synthetic image as ASCII art
///
/// Draws a bright disc on a horizontal gradient and prints it with every
/// brightness method.
use asciify::{AsciiConfig, BrightnessMethod, PixelGrid, process_image};
use image::Rgba;

fn main() {
    println!("asciify - Basic Example");
    println!("=======================\n");

    let width = 40;
    let height = 20;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 7.0;

    let img = PixelGrid::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        // Rows are rendered at twice the glyph width, so stretch vertically
        let dy = (y as f32 - center_y) * 2.0;
        if (dx * dx + dy * dy).sqrt() < radius * 2.0 {
            Rgba([u16::MAX, 52000, 20000, u16::MAX])
        } else {
            let v = (x * u32::from(u16::MAX) / (width - 1)) as u16 / 2;
            Rgba([v, v, v, u16::MAX])
        }
    });

    println!("Created test image: {}x{}\n", width, height);

    for method in BrightnessMethod::ALL {
        let config = AsciiConfig {
            method,
            ratio: 1.0,
        };
        let text = process_image(&img, &config).expect("valid config");
        println!("Method: {method}");
        println!("{text}");
    }
}
