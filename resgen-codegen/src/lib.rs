//! Shard planning and accessor emission for the resgen resource accessor generator.
//!
//! This crate holds the language-agnostic half of code generation: the
//! planner that partitions resources into bounded shards, the emitter that
//! turns a plan into shard containers and accessor bindings, and the
//! compilation pipeline that drives both from a parsed manifest.
//!
//! # Module Organization
//!
//! - [`planner`] - Shard Planner (`ShardCapacity`, `plan`)
//! - [`emitter`] - Accessor Emitter (`emit`, `resolve_binding`)
//! - [`pipeline`] - Phases, lints, plugins and diagnostics
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//!
//! # Example
//!
//! ```
//! use resgen_codegen::{ResourceType, plan_and_emit};
//! use resgen_ir::{ResourceEntry, ResourceVariant};
//!
//! let entries: Vec<ResourceEntry> = ["a", "b", "c"]
//!     .into_iter()
//!     .map(|key| {
//!         ResourceEntry::new(
//!             ResourceType::Drawable,
//!             key,
//!             vec![ResourceVariant::new(format!("drawable/{key}.xml"))],
//!         )
//!     })
//!     .collect();
//!
//! let emission = plan_and_emit(ResourceType::Drawable, entries, 2).unwrap();
//! assert_eq!(emission.containers.len(), 2);
//! assert_eq!(emission.containers[1].name(), "Drawable1");
//! ```

pub mod builder;
pub mod emitter;
mod error;
pub mod language;
pub mod pipeline;
pub mod planner;

pub use error::{Error, ManifestIssue, Result};
pub use resgen_core::ResourceType;
use resgen_ir::{Emission, ResourceEntry};

/// Plan and emit one resource type in a single call.
///
/// `capacity` is taken as configured; a non-positive value fails with
/// [`Error::Configuration`] before any entry is looked at.
pub fn plan_and_emit(
    kind: ResourceType,
    entries: Vec<ResourceEntry>,
    capacity: i64,
) -> Result<Emission> {
    let capacity = planner::ShardCapacity::new(capacity)?;
    let plan = planner::plan(kind, entries, capacity)?;
    emitter::emit(plan)
}
