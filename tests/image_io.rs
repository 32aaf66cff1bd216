#![cfg(feature = "image-io")]

use simmatch::io::{load_gray_image, load_rgb_image};
use simmatch::SimMatchError;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simmatch-{}-{name}", std::process::id()))
}

#[test]
fn rgba_png_loads_as_rgb_and_gray() {
    let path = temp_path("rgba.png");
    let rgba = image::RgbaImage::from_raw(2, 1, vec![255, 0, 0, 128, 80, 80, 80, 255]).unwrap();
    rgba.save(&path).unwrap();

    let rgb = load_rgb_image(&path).unwrap();
    let gray = load_gray_image(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!((rgb.width(), rgb.height(), rgb.channels()), (2, 1, 3));
    assert_eq!(rgb.data(), &[255u8, 0, 0, 80, 80, 80]);

    assert_eq!((gray.width(), gray.height(), gray.channels()), (2, 1, 1));
    assert_eq!(gray.view().pixel(1, 0).unwrap(), &[80u8]);
}

#[test]
fn loaded_images_feed_the_matcher() {
    let path = temp_path("scene.png");
    let mut scene = image::RgbImage::new(12, 9);
    for (x, y, px) in scene.enumerate_pixels_mut() {
        *px = image::Rgb([(x * 21) as u8, (y * 27) as u8, ((x ^ y) * 13) as u8]);
    }
    scene.save(&path).unwrap();

    let image = load_rgb_image(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let template = image.view().roi(4, 3, 5, 4).unwrap();

    let verdict = simmatch::match_squared_difference(image.view(), template, None).unwrap();
    assert_eq!(verdict.location, simmatch::Location { x: 4, y: 3 });
    assert!(verdict.passed);
}

#[test]
fn missing_file_reports_io_error() {
    let path = temp_path("does-not-exist.png");
    assert!(matches!(
        load_rgb_image(&path),
        Err(SimMatchError::ImageIo { .. })
    ));
    assert!(matches!(
        load_gray_image(&path),
        Err(SimMatchError::ImageIo { .. })
    ));
}
