//! Minimum and maximum location over a score surface.

use crate::search::surface::ScoreSurface;
use crate::util::{SimMatchError, SimMatchResult};

/// Placement coordinates: the top-left corner of the template in the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Column of the template's left edge.
    pub x: usize,
    /// Row of the template's top edge.
    pub y: usize,
}

/// Extreme scores of a surface and where they first occur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    pub min_value: f32,
    pub max_value: f32,
    pub min_loc: Location,
    pub max_loc: Location,
}

/// Finds the minimum and maximum scores of `surface`.
///
/// Ties resolve to the first location in row-major order.
pub fn min_max_loc(surface: &ScoreSurface) -> SimMatchResult<Extremum> {
    if surface.is_empty() {
        return Err(SimMatchError::EmptySurface);
    }

    let mut best = Extremum {
        min_value: f32::INFINITY,
        max_value: f32::NEG_INFINITY,
        min_loc: Location::default(),
        max_loc: Location::default(),
    };
    for y in 0..surface.height() {
        let Some(row) = surface.row(y) else {
            break;
        };
        for (x, &score) in row.iter().enumerate() {
            if score < best.min_value {
                best.min_value = score;
                best.min_loc = Location { x, y };
            }
            if score > best.max_value {
                best.max_value = score;
                best.max_loc = Location { x, y };
            }
        }
    }

    Ok(best)
}
