//! SimMatch scores how closely a template appears in an image and turns the
//! score into a pass/fail verdict for visual verification.
//!
//! Two metrics are provided: normalized squared difference on the raw
//! channels (color sensitive) and normalized cross-correlation on Sobel
//! gradient magnitude (shape sensitive). Both scan every placement of the
//! template, pick the best one, and report a similarity in `[0, 1]`.
//! Row-parallel scanning is available via the `rayon` feature and image
//! loading via the `image-io` feature.

pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod search;
pub mod template;
mod trace;
pub mod util;
pub mod verdict;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{ImageBuffer, ImageView};
pub use search::{
    match_cross_correlation, match_squared_difference, Extremum, Location, MatchConfig, Matcher,
    Metric, ScoreSurface,
};
pub use util::{SimMatchError, SimMatchResult};
pub use verdict::{MatchVerdict, DEFAULT_THRESHOLD};
