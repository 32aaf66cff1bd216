//! Rayon-parallel scan (feature-gated).
//!
//! Rows of the score surface are computed independently and concatenated in
//! order, so the result is bit-identical to [`crate::search::scan_full`].

use crate::kernel::Kernel;
use crate::search::scan::surface_size;
use crate::search::ScoreSurface;
use crate::template::TemplatePlan;
use crate::trace::trace_span;
use crate::util::SimMatchResult;
use crate::ImageView;
use rayon::prelude::*;

/// Row-parallel full scan with kernel `K`.
///
/// Parallelizes over placement rows, with each task scoring every x position
/// of its row.
pub fn scan_full_par<K>(image: ImageView<'_>, plan: &TemplatePlan) -> SimMatchResult<ScoreSurface>
where
    K: Kernel,
{
    let (width, height) = surface_size(image, plan)?;
    let _span = trace_span!(
        "scan_full_par",
        metric = K::METRIC.name(),
        width = width,
        height = height
    )
    .entered();

    let rows: Vec<Vec<f32>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| K::score_window(image, plan, x, y))
                .collect()
        })
        .collect();

    ScoreSurface::from_vec(width, height, rows.concat())
}
