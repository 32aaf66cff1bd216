//! Template planning utilities.

mod plan;

pub use plan::TemplatePlan;
