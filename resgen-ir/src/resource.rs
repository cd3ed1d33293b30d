//! Resource declarations as seen by the planner.

use std::{borrow::Borrow, fmt};

use resgen_core::ResourceType;
use serde::Serialize;

/// Unique identifier of one resource within its type.
///
/// Used verbatim as the accessor name and as the lookup key inside the
/// owning shard container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ResourceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One concrete form of a resource.
///
/// Qualifiers (density, locale, theme, ...) are opaque here; picking a
/// variant at runtime is the resource library's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceVariant {
    /// Qualifier set, in declaration order.
    pub qualifiers: Vec<String>,
    /// Path relative to the resources root.
    pub path: String,
}

impl ResourceVariant {
    /// A variant without qualifiers.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            qualifiers: Vec::new(),
            path: path.into(),
        }
    }

    /// Add a qualifier.
    pub fn qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifiers.push(qualifier.into());
        self
    }
}

/// A resource key together with its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub key: ResourceKey,
    /// `"<type>:<key>"`, e.g. `"drawable:icon_0"`.
    pub logical_id: String,
    pub variants: Vec<ResourceVariant>,
}

impl ResourceEntry {
    /// Create an entry, deriving the logical id from the resource type.
    pub fn new(
        kind: ResourceType,
        key: impl Into<ResourceKey>,
        variants: Vec<ResourceVariant>,
    ) -> Self {
        let key = key.into();
        Self {
            logical_id: format!("{}:{}", kind.as_str(), key),
            key,
            variants,
        }
    }
}

/// All entries of one resource type, in planning order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSet {
    pub kind: ResourceType,
    pub entries: Vec<ResourceEntry>,
}

impl ResourceSet {
    pub fn new(kind: ResourceType, entries: Vec<ResourceEntry>) -> Self {
        Self { kind, entries }
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
