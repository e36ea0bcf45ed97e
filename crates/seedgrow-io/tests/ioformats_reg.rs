//! Round-trip regression tests for the file-level I/O entry points

use seedgrow_core::{PixelFormat, Raster};
use seedgrow_io::{ImageFormat, detect_format, read_image, write_image};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("seedgrow-io-{}-{}", std::process::id(), name));
    path
}

fn gradient_gray(width: u32, height: u32) -> Raster {
    let pix = Raster::new(width, height, PixelFormat::Gray8).unwrap();
    let mut pm = pix.try_into_mut().unwrap();
    for y in 0..height {
        for x in 0..width {
            pm.set_gray(x, y, ((x * 7 + y * 13) % 256) as u8).unwrap();
        }
    }
    pm.into()
}

#[test]
fn test_png_file_roundtrip() {
    let path = temp_path("roundtrip.png");
    let pix = gradient_gray(20, 15);

    write_image(&pix, &path, ImageFormat::Png).unwrap();
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);

    let pix2 = read_image(&path).unwrap();
    assert_eq!(pix2.format(), PixelFormat::Gray8);
    assert_eq!(pix2.data(), pix.data());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_pnm_file_roundtrip() {
    let path = temp_path("roundtrip.pgm");
    let pix = gradient_gray(9, 9);

    write_image(&pix, &path, ImageFormat::Pnm).unwrap();
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Pnm);

    let pix2 = read_image(&path).unwrap();
    assert_eq!(pix2.data(), pix.data());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_read_missing_file() {
    assert!(read_image(temp_path("does-not-exist.png")).is_err());
}

#[test]
fn test_write_unknown_format() {
    let pix = gradient_gray(4, 4);
    let path = temp_path("unknown.dat");
    assert!(write_image(&pix, &path, ImageFormat::Unknown).is_err());
}
