//! Image loading through the `image` crate.
//!
//! Available when the `image-io` feature is enabled. The matching core never
//! calls these helpers itself; they are the loading collaborator for callers
//! that start from file paths.

use crate::image::ImageBuffer;
use crate::util::{SimMatchError, SimMatchResult};
use std::path::Path;

/// Creates an owned 3-channel image from an RGB buffer.
pub fn owned_from_rgb_image(img: &image::RgbImage) -> SimMatchResult<ImageBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageBuffer::new(img.as_raw().clone(), width, height, 3)
}

/// Creates an owned 1-channel image from a grayscale buffer.
pub fn owned_from_gray_image(img: &image::GrayImage) -> SimMatchResult<ImageBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageBuffer::new(img.as_raw().clone(), width, height, 1)
}

fn open(path: &Path) -> SimMatchResult<image::DynamicImage> {
    image::open(path).map_err(|err| SimMatchError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })
}

/// Loads an image from disk as 3-channel RGB, dropping any alpha channel.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> SimMatchResult<ImageBuffer> {
    let img = open(path.as_ref())?;
    owned_from_rgb_image(&img.to_rgb8())
}

/// Loads an image from disk and converts it to a 1-channel grayscale image.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> SimMatchResult<ImageBuffer> {
    let img = open(path.as_ref())?;
    owned_from_gray_image(&img.to_luma8())
}
