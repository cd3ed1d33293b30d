//! Intermediate representation types for the resgen generator.
//!
//! These types carry resources from the manifest through shard planning and
//! accessor emission to the language serializers.
//!
//! # Architecture
//!
//! ```text
//! resources.toml → resgen-manifest (parsing) → ResourceSet → ShardPlan → Emission → serializer
//! ```
//!
//! The IR types are:
//! - Language-agnostic (no Rust-specific naming or escaping)
//! - Immutable once produced; each stage consumes the previous one
//! - Serializable, so pipeline snapshots can be written as JSON

mod emission;
mod resource;
mod shard;

pub use emission::{AccessorBinding, Emission, ShardContainer};
pub use resource::{ResourceEntry, ResourceKey, ResourceSet, ResourceVariant};
pub use resgen_core::ResourceType;
pub use shard::{Shard, ShardId, ShardPlan};
