//! Shard planning output.

use std::fmt;

use resgen_core::ResourceType;
use serde::Serialize;

use crate::ResourceEntry;

/// Stable identity of a shard: its resource type plus its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ShardId {
    pub kind: ResourceType,
    pub index: usize,
}

impl ShardId {
    pub fn new(kind: ResourceType, index: usize) -> Self {
        Self { kind, index }
    }

    /// Deterministic container name, e.g. `Drawable0`.
    pub fn name(&self) -> String {
        format!("{}{}", self.kind.type_name(), self.index)
    }
}

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.type_name(), self.index)
    }
}

/// An ordered group of entries holding at most the plan's capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shard {
    pub index: usize,
    pub entries: Vec<ResourceEntry>,
}

impl Shard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The partitioning of one resource type into shards.
///
/// Shard `i` holds a contiguous slice of the planner's input that precedes
/// the slice held by shard `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardPlan {
    pub kind: ResourceType,
    pub capacity: usize,
    pub shards: Vec<Shard>,
}

impl ShardPlan {
    /// Number of shards.
    pub fn len(&self) -> usize {
        self.shards.len()
    }

    /// Returns true if the plan has no shards (empty input).
    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Total number of entries across all shards.
    pub fn entry_count(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    /// Sizes of every shard in order.
    pub fn shard_sizes(&self) -> Vec<usize> {
        self.shards.iter().map(Shard::len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_id_name() {
        assert_eq!(ShardId::new(ResourceType::Drawable, 0).name(), "Drawable0");
        assert_eq!(ShardId::new(ResourceType::String, 12).name(), "String12");
        assert_eq!(
            ShardId::new(ResourceType::Font, 3).to_string(),
            ShardId::new(ResourceType::Font, 3).name()
        );
    }

    #[test]
    fn test_empty_plan() {
        let plan = ShardPlan {
            kind: ResourceType::Drawable,
            capacity: 10,
            shards: Vec::new(),
        };
        assert!(plan.is_empty());
        assert_eq!(plan.entry_count(), 0);
        assert!(plan.shard_sizes().is_empty());
    }
}
