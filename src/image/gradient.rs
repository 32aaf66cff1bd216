//! Sobel gradient magnitude used by the cross-correlation metric.
//!
//! The image is reduced to gray, filtered with the 3x3 Sobel kernels in both
//! directions, and the saturated absolute responses are averaged with equal
//! weight. Samples outside the image replicate the nearest edge pixel.

use crate::image::convert::to_gray;
use crate::image::{ImageBuffer, ImageView};
use crate::trace::trace_span;
use crate::util::math::saturate_u8;
use crate::util::SimMatchResult;

/// Sobel kernel responding to intensity change along x, row-major.
pub static HORIZONTAL_SOBEL: [i32; 9] = [-1, 0, 1, -2, 0, 2, -1, 0, 1];

/// Sobel kernel responding to intensity change along y, row-major.
pub static VERTICAL_SOBEL: [i32; 9] = [-1, -2, -1, 0, 0, 0, 1, 2, 1];

/// Computes the combined edge strength of a 1- or 3-channel view.
///
/// Each output pixel is `(|gx| + |gy| + 1) / 2`, where `|gx|` and `|gy|` are
/// the Sobel responses saturated to `0..=255`. The result has one channel and
/// the same size as the input. Halves round up: a lone saturated response
/// (`|gx| == 255`, `|gy| == 0`) gives 128, not 127.
pub fn gradient_magnitude(image: ImageView<'_>) -> SimMatchResult<ImageBuffer> {
    let _span = trace_span!(
        "gradient_magnitude",
        width = image.width(),
        height = image.height()
    )
    .entered();

    let gray = to_gray(image)?;
    let width = gray.width();
    let height = gray.height();
    let src = gray.data();

    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let rows = [y.saturating_sub(1), y, (y + 1).min(height - 1)];
        for x in 0..width {
            let cols = [x.saturating_sub(1), x, (x + 1).min(width - 1)];
            let mut gx = 0i32;
            let mut gy = 0i32;
            for (ky, &sy) in rows.iter().enumerate() {
                let row = &src[sy * width..(sy + 1) * width];
                for (kx, &sx) in cols.iter().enumerate() {
                    let value = row[sx] as i32;
                    gx += HORIZONTAL_SOBEL[ky * 3 + kx] * value;
                    gy += VERTICAL_SOBEL[ky * 3 + kx] * value;
                }
            }
            let abs_x = saturate_u8(gx.abs()) as u16;
            let abs_y = saturate_u8(gy.abs()) as u16;
            out.push(((abs_x + abs_y + 1) / 2) as u8);
        }
    }

    ImageBuffer::new(out, width, height, 1)
}
