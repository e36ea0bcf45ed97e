//! Example: grow two regions on a scan and write the overlays.
//!
//! Loads the image named on the command line, converts it to grayscale,
//! grows a region from each of two seed points, and writes three PNGs
//! next to the input: one overlay per region and one with both.
//!
//! Run from the workspace root:
//!   cargo run -p seedgrow --example segment -- brain.png

use std::path::Path;
use std::process::ExitCode;

use seedgrow::io::ImageFormat;
use seedgrow::region::{Color, GrowOptions, RenderOptions, grow, render_mask, render_masks};
use seedgrow::{Point, io};

const SEED_LEFT: Point = Point::new(120, 130);
const SEED_RIGHT: Point = Point::new(350, 200);
const THRESHOLD: f64 = 70.0;

fn run(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let source = io::read_image(input)?;
    let gray = source.to_gray()?;
    println!(
        "loaded {input}: {}x{}, threshold {THRESHOLD}",
        gray.width(),
        gray.height()
    );

    let options = GrowOptions::new(THRESHOLD);

    // Each call owns its own mask, mean, and count; the two regions
    // cannot interfere with each other.
    let left = grow(&gray, SEED_LEFT, &options)?;
    let right = grow(&gray, SEED_RIGHT, &options)?;
    println!(
        "  left  ({}, {}): {} pixels",
        SEED_LEFT.x,
        SEED_LEFT.y,
        left.count()
    );
    println!(
        "  right ({}, {}): {} pixels",
        SEED_RIGHT.x,
        SEED_RIGHT.y,
        right.count()
    );

    let stem = Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let dir = Path::new(input)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let red = RenderOptions::new(Color::RED);
    let green = RenderOptions::new(Color::GREEN);
    let outputs = [
        (
            render_mask(&source, &left, &red)?,
            dir.join(format!("{stem}_left.png")),
        ),
        (
            render_mask(&source, &right, &green)?,
            dir.join(format!("{stem}_right.png")),
        ),
        (
            render_masks(&source, &[(&left, Color::RED), (&right, Color::GREEN)])?,
            dir.join(format!("{stem}_both.png")),
        ),
    ];
    for (overlay, path) in &outputs {
        io::write_image(overlay, path, ImageFormat::Png)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: segment <image>");
        return ExitCode::FAILURE;
    };

    match run(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("segment: {e}");
            ExitCode::FAILURE
        }
    }
}
