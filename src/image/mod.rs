//! Image buffers and views.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer of interleaved `u8`
//! samples with an explicit stride. The stride counts samples (not pixels)
//! between the starts of consecutive rows, so a stride larger than
//! `width * channels` represents padded rows. ROI slices are zero-copy views
//! into the same backing slice and retain the original stride.
//!
//! `ImageBuffer` is the owned, contiguous counterpart. Only 1 (gray) and
//! 3 (RGB) channels are supported.

use crate::util::{SimMatchError, SimMatchResult};

pub mod convert;
pub mod gradient;
#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed 2D image view with interleaved channels and an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
}

impl<'a> ImageView<'a> {
    /// Creates a contiguous view with `stride == width * channels`.
    pub fn from_slice(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> SimMatchResult<Self> {
        let row_len = row_len(width, height, channels)?;
        Self::new(data, width, height, channels, row_len)
    }

    /// Creates a view with an explicit stride in samples.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
    ) -> SimMatchResult<Self> {
        let needed = required_len(width, height, channels, stride)?;
        if data.len() < needed {
            return Err(SimMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of interleaved channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the stride in samples between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the samples of the pixel at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&'a [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y
            .checked_mul(self.stride)?
            .checked_add(x.checked_mul(self.channels)?)?;
        self.data.get(start..start + self.channels)
    }

    /// Returns a contiguous slice for row `y` with `width * channels` samples.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width * self.channels)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(&self, x: usize, y: usize, width: usize, height: usize) -> SimMatchResult<Self> {
        if width == 0 || height == 0 {
            return Err(SimMatchError::InvalidDimensions { width, height });
        }

        let out_of_bounds = SimMatchError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let start = y * self.stride + x * self.channels;
        let data = self
            .data
            .get(start..)
            .ok_or(SimMatchError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, width, height, self.channels, self.stride)
    }

    /// Copies the view into an owned contiguous buffer.
    pub fn to_buffer(&self) -> ImageBuffer {
        let row_len = self.width * self.channels;
        let mut data = Vec::with_capacity(row_len * self.height);
        for y in 0..self.height {
            let start = y * self.stride;
            data.extend_from_slice(&self.data[start..start + row_len]);
        }
        ImageBuffer {
            data,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

/// Owned contiguous image buffer with interleaved channels.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl ImageBuffer {
    /// Creates an owned image; `data.len()` must equal `width * height * channels`.
    pub fn new(data: Vec<u8>, width: usize, height: usize, channels: usize) -> SimMatchResult<Self> {
        let row_len = row_len(width, height, channels)?;
        let needed = row_len
            .checked_mul(height)
            .ok_or(SimMatchError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(SimMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(SimMatchError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of interleaved channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the contiguous sample buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.width * self.channels,
        }
    }
}

fn check_channels(channels: usize) -> SimMatchResult<()> {
    match channels {
        1 | 3 => Ok(()),
        _ => Err(SimMatchError::UnsupportedChannels { channels }),
    }
}

fn row_len(width: usize, height: usize, channels: usize) -> SimMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(SimMatchError::InvalidDimensions { width, height });
    }
    check_channels(channels)?;
    width
        .checked_mul(channels)
        .ok_or(SimMatchError::InvalidDimensions { width, height })
}

fn required_len(
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
) -> SimMatchResult<usize> {
    let row_len = row_len(width, height, channels)?;
    if stride < row_len {
        return Err(SimMatchError::InvalidStride { row_len, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_len))
        .ok_or(SimMatchError::InvalidDimensions { width, height })
}
