//! Error types for simmatch.

use thiserror::Error;

/// Result alias for simmatch operations.
pub type SimMatchResult<T> = std::result::Result<T, SimMatchError>;

/// Errors that can occur while preparing buffers or computing a match.
///
/// A template that is not found is not an error; it is reported through
/// [`crate::MatchVerdict::passed`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimMatchError {
    /// Width or height is zero, or the sample count overflows.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The row stride is shorter than one row of samples.
    #[error("stride {stride} is smaller than row length {row_len}")]
    InvalidStride { row_len: usize, stride: usize },
    /// The backing buffer does not hold enough samples.
    #[error("buffer too small: needed {needed} samples, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Only 1 (gray) and 3 (RGB) channels are supported.
    #[error("unsupported channel count {channels}")]
    UnsupportedChannels { channels: usize },
    /// A region of interest does not fit inside the image.
    #[error(
        "roi {width}x{height} at ({x}, {y}) is out of bounds for {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Search image and template have different channel counts.
    #[error("channel mismatch: image has {image} channels, template has {template}")]
    ChannelMismatch { image: usize, template: usize },
    /// The template exceeds the search image in width or height.
    #[error(
        "template {tpl_width}x{tpl_height} does not fit in {img_width}x{img_height} image"
    )]
    TemplateTooLarge {
        tpl_width: usize,
        tpl_height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// A score surface with zero area was passed to the extremum locator.
    #[error("score surface is empty")]
    EmptySurface,
    /// The similarity threshold is NaN or infinite.
    #[error("threshold must be finite, got {value}")]
    InvalidThreshold { value: f32 },
    /// Image decoding failed (only produced by the `image-io` helpers).
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
