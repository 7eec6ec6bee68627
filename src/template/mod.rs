//! Interrogation window planning.

mod plan;

pub use plan::TemplatePlan;
