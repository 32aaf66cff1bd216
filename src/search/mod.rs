//! Sliding-window search and the high-level matcher.
//!
//! [`Matcher`] validates its inputs, prepares both buffers for the configured
//! metric, scans every placement, and evaluates the best one against the
//! threshold. [`match_squared_difference`] and [`match_cross_correlation`] are
//! one-shot wrappers around it.

pub(crate) mod extremum;
pub(crate) mod scan;
pub(crate) mod surface;

pub use extremum::{min_max_loc, Extremum, Location};
pub use scan::scan_full;
pub use surface::ScoreSurface;

use crate::image::gradient::gradient_magnitude;
#[cfg(feature = "rayon")]
use crate::kernel::rayon::scan_full_par;
use crate::kernel::{CcorrNormed, Kernel, SqDiffNormed};
use crate::template::TemplatePlan;
use crate::trace::{trace_event, trace_span};
use crate::util::SimMatchResult;
use crate::verdict::{check_threshold, evaluate, MatchVerdict, DEFAULT_THRESHOLD};
use crate::ImageView;

/// Similarity metric used to score placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Normalized squared difference on the raw channels; lower scores are
    /// better. Sensitive to color.
    SqDiffNormed,
    /// Normalized cross-correlation on Sobel gradient magnitude; higher scores
    /// are better. Compares shape and ignores color.
    CcorrNormed,
}

impl Metric {
    /// Returns a short lowercase name for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Metric::SqDiffNormed => "sq_diff",
            Metric::CcorrNormed => "ccorr",
        }
    }
}

/// Configuration for [`Matcher`].
#[derive(Clone, Debug, PartialEq)]
pub struct MatchConfig {
    /// Metric used for scoring.
    pub metric: Metric,
    /// Minimum similarity for a passing verdict.
    pub threshold: f32,
    /// Scan rows in parallel. Only honored with the `rayon` feature.
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            metric: Metric::SqDiffNormed,
            threshold: DEFAULT_THRESHOLD,
            parallel: false,
        }
    }
}

/// Template matcher producing a [`MatchVerdict`] per call.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the given configuration.
    pub fn new(cfg: MatchConfig) -> Self {
        Self { cfg }
    }

    /// Locates `template` in `image` and evaluates the best placement.
    ///
    /// The threshold, channel counts, and template size are checked before any
    /// scoring is done. A template that scores below the threshold is returned
    /// as a verdict with `passed == false`, not as an error.
    pub fn match_image(
        &self,
        image: ImageView<'_>,
        template: ImageView<'_>,
    ) -> SimMatchResult<MatchVerdict> {
        let cfg = &self.cfg;
        let _span = trace_span!(
            "match_image",
            metric = cfg.metric.name(),
            image_width = image.width(),
            image_height = image.height(),
            template_width = template.width(),
            template_height = template.height()
        )
        .entered();

        check_threshold(cfg.threshold)?;
        scan::check_fit(
            image,
            template.width(),
            template.height(),
            template.channels(),
        )?;

        let surface = match cfg.metric {
            Metric::SqDiffNormed => {
                let plan = TemplatePlan::from_view(template);
                self.scan::<SqDiffNormed>(image, &plan)?
            }
            Metric::CcorrNormed => {
                let image_grad = gradient_magnitude(image)?;
                let template_grad = gradient_magnitude(template)?;
                let plan = TemplatePlan::from_view(template_grad.view());
                self.scan::<CcorrNormed>(image_grad.view(), &plan)?
            }
        };

        let extremum = min_max_loc(&surface)?;
        let verdict = evaluate(&extremum, cfg.metric, cfg.threshold)?;
        trace_event!(
            "match_found",
            x = verdict.location.x,
            y = verdict.location.y,
            min_value = extremum.min_value,
            max_value = extremum.max_value,
            similarity = verdict.similarity,
            passed = verdict.passed,
        );

        Ok(verdict)
    }

    fn scan<K: Kernel>(
        &self,
        image: ImageView<'_>,
        plan: &TemplatePlan,
    ) -> SimMatchResult<ScoreSurface> {
        #[cfg(feature = "rayon")]
        {
            if self.cfg.parallel {
                return scan_full_par::<K>(image, plan);
            }
        }
        scan_full::<K>(image, plan)
    }
}

/// Matches with normalized squared difference on the raw channels.
///
/// `threshold` defaults to [`DEFAULT_THRESHOLD`]. Similarity is
/// `1 - min score` at the best placement.
pub fn match_squared_difference(
    image: ImageView<'_>,
    template: ImageView<'_>,
    threshold: Option<f32>,
) -> SimMatchResult<MatchVerdict> {
    one_shot(Metric::SqDiffNormed, image, template, threshold)
}

/// Matches with normalized cross-correlation on gradient magnitude.
///
/// `threshold` defaults to [`DEFAULT_THRESHOLD`]. Similarity is the max score
/// at the best placement.
pub fn match_cross_correlation(
    image: ImageView<'_>,
    template: ImageView<'_>,
    threshold: Option<f32>,
) -> SimMatchResult<MatchVerdict> {
    one_shot(Metric::CcorrNormed, image, template, threshold)
}

fn one_shot(
    metric: Metric,
    image: ImageView<'_>,
    template: ImageView<'_>,
    threshold: Option<f32>,
) -> SimMatchResult<MatchVerdict> {
    let matcher = Matcher::new(MatchConfig {
        metric,
        threshold: threshold.unwrap_or(DEFAULT_THRESHOLD),
        ..MatchConfig::default()
    });
    matcher.match_image(image, template)
}
