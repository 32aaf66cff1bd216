//! Low-level building blocks for custom matching pipelines.
//!
//! These expose the individual stages behind [`crate::Matcher`]: gradient
//! extraction, template plans, kernels, dense scans, extremum location, and
//! verdict evaluation. Most users should prefer [`crate::match_squared_difference`]
//! and [`crate::match_cross_correlation`].

pub use crate::image::convert::{luma, to_gray};
pub use crate::image::gradient::{gradient_magnitude, HORIZONTAL_SOBEL, VERTICAL_SOBEL};
#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_full_par;
pub use crate::kernel::{CcorrNormed, Kernel, SqDiffNormed};
pub use crate::search::{min_max_loc, scan_full};
pub use crate::template::TemplatePlan;
pub use crate::verdict::{check_threshold, evaluate};
