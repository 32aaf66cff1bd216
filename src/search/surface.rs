//! Dense score surface over all template placements.

use crate::util::{SimMatchError, SimMatchResult};

/// Grid of scores, one per top-left template placement, stored row-major.
///
/// Width is `image_width - template_width + 1` and height is
/// `image_height - template_height + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSurface {
    width: usize,
    height: usize,
    scores: Vec<f32>,
}

impl ScoreSurface {
    /// Wraps row-major scores; `scores.len()` must equal `width * height`.
    ///
    /// Zero-area surfaces are accepted here and rejected by the extremum
    /// locator.
    pub fn from_vec(width: usize, height: usize, scores: Vec<f32>) -> SimMatchResult<Self> {
        let needed = width
            .checked_mul(height)
            .ok_or(SimMatchError::InvalidDimensions { width, height })?;
        if scores.len() != needed {
            return Err(SimMatchError::BufferTooSmall {
                needed,
                got: scores.len(),
            });
        }
        Ok(Self {
            width,
            height,
            scores,
        })
    }

    /// Returns the number of placement columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of placement rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the surface has no placements.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns all scores in row-major order.
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Returns the score at placement `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.scores.get(y * self.width + x).copied()
    }

    /// Returns the scores of placement row `y`.
    pub fn row(&self, y: usize) -> Option<&[f32]> {
        if y >= self.height {
            return None;
        }
        self.scores.get(y * self.width..(y + 1) * self.width)
    }
}
