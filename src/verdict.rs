//! Similarity evaluation and pass/fail verdicts.

use crate::search::{Extremum, Location, Metric};
use crate::util::math::clamp_unit;
use crate::util::{SimMatchError, SimMatchResult};

/// Threshold used when the caller does not supply one.
pub const DEFAULT_THRESHOLD: f32 = 0.95;

/// Outcome of a single match.
///
/// `passed == false` is a complete result meaning the template did not reach
/// the threshold; errors are reserved for inputs that cannot be matched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchVerdict {
    /// Similarity of the best placement, in `[0, 1]`.
    pub similarity: f32,
    /// `similarity >= threshold`.
    pub passed: bool,
    /// Top-left corner of the best placement.
    pub location: Location,
    /// Threshold the similarity was compared against.
    pub threshold: f32,
    /// Metric that produced the scores.
    pub metric: Metric,
    /// Raw surface extremes, kept for diagnostics.
    pub extremum: Extremum,
}

/// Rejects NaN and infinite thresholds.
///
/// Finite values outside `[0, 1]` are accepted: at or below zero every match
/// passes, above one none does.
pub fn check_threshold(threshold: f32) -> SimMatchResult<()> {
    if threshold.is_finite() {
        Ok(())
    } else {
        Err(SimMatchError::InvalidThreshold { value: threshold })
    }
}

/// Converts surface extremes into a similarity and compares it with `threshold`.
///
/// Squared difference uses `1 - min_value` at `min_loc`; cross-correlation
/// uses `max_value` at `max_loc`. The similarity is clamped to `[0, 1]`.
pub fn evaluate(
    extremum: &Extremum,
    metric: Metric,
    threshold: f32,
) -> SimMatchResult<MatchVerdict> {
    check_threshold(threshold)?;

    let (similarity, location) = match metric {
        Metric::SqDiffNormed => (1.0 - extremum.min_value, extremum.min_loc),
        Metric::CcorrNormed => (extremum.max_value, extremum.max_loc),
    };
    let similarity = clamp_unit(similarity);

    Ok(MatchVerdict {
        similarity,
        passed: similarity >= threshold,
        location,
        threshold,
        metric,
        extremum: *extremum,
    })
}
