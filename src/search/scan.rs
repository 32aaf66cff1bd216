//! Dense sequential scan over all placements.

use crate::kernel::Kernel;
use crate::search::surface::ScoreSurface;
use crate::template::TemplatePlan;
use crate::trace::trace_span;
use crate::util::{SimMatchError, SimMatchResult};
use crate::ImageView;

/// Checks that a `tpl_width x tpl_height` template with `tpl_channels` can be
/// placed inside `image` and returns the surface size `(width, height)`.
pub(crate) fn check_fit(
    image: ImageView<'_>,
    tpl_width: usize,
    tpl_height: usize,
    tpl_channels: usize,
) -> SimMatchResult<(usize, usize)> {
    if image.channels() != tpl_channels {
        return Err(SimMatchError::ChannelMismatch {
            image: image.channels(),
            template: tpl_channels,
        });
    }

    let img_width = image.width();
    let img_height = image.height();
    if img_width < tpl_width || img_height < tpl_height {
        return Err(SimMatchError::TemplateTooLarge {
            tpl_width,
            tpl_height,
            img_width,
            img_height,
        });
    }

    Ok((img_width - tpl_width + 1, img_height - tpl_height + 1))
}

pub(crate) fn surface_size(
    image: ImageView<'_>,
    plan: &TemplatePlan,
) -> SimMatchResult<(usize, usize)> {
    check_fit(image, plan.width(), plan.height(), plan.channels())
}

/// Scans every valid placement with kernel `K` and returns the score surface.
pub fn scan_full<K: Kernel>(
    image: ImageView<'_>,
    plan: &TemplatePlan,
) -> SimMatchResult<ScoreSurface> {
    let (width, height) = surface_size(image, plan)?;
    let _span = trace_span!(
        "scan_full",
        metric = K::METRIC.name(),
        width = width,
        height = height
    )
    .entered();

    let mut scores = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            scores.push(K::score_window(image, plan, x, y));
        }
    }

    ScoreSurface::from_vec(width, height, scores)
}
