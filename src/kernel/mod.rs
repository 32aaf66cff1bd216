//! Per-placement scoring kernels.
//!
//! A kernel scores one template placement. The scan functions in
//! [`crate::search`] and the parallel variants in `kernel::rayon` evaluate a
//! kernel over every valid placement to build a [`crate::ScoreSurface`].

use crate::search::Metric;
use crate::template::TemplatePlan;
use crate::ImageView;

/// Kernel trait for normalized template scores.
///
/// Scores lie in `[0, 1]`; which end is the better match depends on
/// [`Kernel::METRIC`].
pub trait Kernel {
    /// Metric implemented by this kernel.
    const METRIC: Metric;

    /// Scores the placement with top-left corner `(x, y)`.
    ///
    /// The template must fit at `(x, y)` and share the image channel count;
    /// the scan functions check this once up front.
    fn score_window(image: ImageView<'_>, plan: &TemplatePlan, x: usize, y: usize) -> f32;

    /// Scores a single placement, or returns `None` if the template does not
    /// fit at `(x, y)` or the channel counts differ.
    fn score_at(image: ImageView<'_>, plan: &TemplatePlan, x: usize, y: usize) -> Option<f32> {
        if image.channels() != plan.channels() {
            return None;
        }
        let max_x = image.width().checked_sub(plan.width())?;
        let max_y = image.height().checked_sub(plan.height())?;
        if x > max_x || y > max_y {
            return None;
        }
        Some(Self::score_window(image, plan, x, y))
    }
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use scalar::{CcorrNormed, SqDiffNormed};
