//! Manifest types and parsing for resources.toml files.

mod file;
mod generator;
mod parse;
mod resource;
mod validate;

pub use file::ResourcesToml;
pub use generator::{DEFAULT_SHARD_CAPACITY, GeneratorConfig};
pub use parse::parse_manifest;
pub use resource::{ResourceDecl, VariantDecl};
use resgen_core::ResourceType;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for resources.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Sharding and output settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Declared resources, in file order
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceDecl>,
}

impl Manifest {
    /// Resources of one type, in file order.
    pub fn resources_of(&self, kind: ResourceType) -> impl Iterator<Item = &ResourceDecl> {
        self.resources.iter().filter(move |r| r.kind == kind)
    }

    /// Resource types that have at least one declaration, in planning order.
    pub fn kinds(&self) -> Vec<ResourceType> {
        ResourceType::ALL
            .into_iter()
            .filter(|kind| self.resources.iter().any(|r| r.kind == *kind))
            .collect()
    }

    /// Total number of declared resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if no resources are declared.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
