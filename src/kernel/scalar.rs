//! Scalar kernels for the two normalized metrics.
//!
//! Window sums are accumulated in `u64`, which is exact for any realistic
//! template size, and normalized in `f64` before narrowing to `f32`.

use crate::kernel::Kernel;
use crate::search::Metric;
use crate::template::TemplatePlan;
use crate::util::math::normalized_ratio;
use crate::ImageView;

/// Normalized squared difference: `sum((S - T)^2) / sqrt(sum(S^2) * sum(T^2))`.
///
/// Zero is a perfect match. Scores are capped at 1. A zero denominator gives
/// 0 when both windows are black and 1 otherwise.
pub struct SqDiffNormed;

/// Normalized cross-correlation: `sum(S * T) / sqrt(sum(S^2) * sum(T^2))`.
///
/// One is a perfect match. A zero denominator gives 0.
pub struct CcorrNormed;

/// Folds `f(image_sample, template_sample)` over the window at `(x, y)`.
#[inline]
fn fold_window<F>(image: ImageView<'_>, plan: &TemplatePlan, x: usize, y: usize, mut f: F)
where
    F: FnMut(u64, u64),
{
    let row_len = plan.row_len();
    let offset = x * plan.channels();
    let samples = plan.samples();
    for ty in 0..plan.height() {
        let img_row = match image.row(y + ty) {
            Some(row) => &row[offset..offset + row_len],
            None => return,
        };
        let tpl_row = &samples[ty * row_len..(ty + 1) * row_len];
        for (&s, &t) in img_row.iter().zip(tpl_row) {
            f(s as u64, t as u64);
        }
    }
}

impl Kernel for SqDiffNormed {
    const METRIC: Metric = Metric::SqDiffNormed;

    fn score_window(image: ImageView<'_>, plan: &TemplatePlan, x: usize, y: usize) -> f32 {
        let mut sq_diff = 0u64;
        let mut energy_i = 0u64;
        fold_window(image, plan, x, y, |s, t| {
            let diff = s.abs_diff(t);
            sq_diff += diff * diff;
            energy_i += s * s;
        });

        match normalized_ratio(sq_diff as f64, energy_i as f64, plan.energy() as f64) {
            Some(ratio) => ratio.min(1.0) as f32,
            None if sq_diff == 0 => 0.0,
            None => 1.0,
        }
    }
}

impl Kernel for CcorrNormed {
    const METRIC: Metric = Metric::CcorrNormed;

    fn score_window(image: ImageView<'_>, plan: &TemplatePlan, x: usize, y: usize) -> f32 {
        let mut dot = 0u64;
        let mut energy_i = 0u64;
        fold_window(image, plan, x, y, |s, t| {
            dot += s * t;
            energy_i += s * s;
        });

        match normalized_ratio(dot as f64, energy_i as f64, plan.energy() as f64) {
            Some(ratio) => ratio.min(1.0) as f32,
            None => 0.0,
        }
    }
}
