//! Color to grayscale conversion.
//!
//! Uses the Rec. 601 luma weights `0.299 R + 0.587 G + 0.114 B` in 14-bit
//! fixed point with round-half-up, which keeps the conversion exact and
//! deterministic across platforms.

use crate::image::{ImageBuffer, ImageView};
use crate::util::SimMatchResult;

const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Converts one RGB pixel to its luma value.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32 + LUMA_ROUND;
    (sum >> LUMA_SHIFT) as u8
}

/// Converts a 1- or 3-channel view into a single-channel buffer.
///
/// Single-channel input is copied unchanged; 3-channel input is treated as RGB.
pub fn to_gray(image: ImageView<'_>) -> SimMatchResult<ImageBuffer> {
    let width = image.width();
    let height = image.height();
    if image.channels() == 1 {
        return Ok(image.to_buffer());
    }

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        let Some(row) = image.row(y) else {
            break;
        };
        data.extend(row.chunks_exact(3).map(|px| luma(px[0], px[1], px[2])));
    }
    ImageBuffer::new(data, width, height, 1)
}

#[cfg(test)]
mod tests {
    use super::{luma, to_gray};
    use crate::image::ImageView;

    #[test]
    fn luma_preserves_gray_levels() {
        for v in [0u8, 1, 77, 128, 200, 255] {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn luma_weights_green_highest() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn to_gray_reduces_rgb_to_one_channel() {
        let data = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 10, 10, 10];
        let view = ImageView::from_slice(&data, 2, 2, 3).unwrap();
        let gray = to_gray(view).unwrap();
        assert_eq!(gray.channels(), 1);
        assert_eq!(gray.data(), &[76u8, 150, 29, 10]);
    }

    #[test]
    fn to_gray_copies_single_channel_input() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let view = ImageView::from_slice(&data, 3, 2, 1).unwrap();
        let gray = to_gray(view).unwrap();
        assert_eq!(gray.data(), &data);
    }
}
