//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints on the manifest
//! - [`LowerPhase`] - groups resources by type and sorts them by key
//! - [`PlanPhase`] - partitions each resource set into shards
//! - [`EmitPhase`] - emits containers and accessor bindings

mod emit;
mod lower;
mod plan;
mod validate;

pub use emit::EmitPhase;
pub use lower::{LowerPhase, lower_manifest};
pub use plan::PlanPhase;
pub use validate::{
    DuplicateResourceLint, DuplicateVariantLint, EmptyVariantsLint, Lint, ResourceNamingLint,
    ValidatePhase,
};
