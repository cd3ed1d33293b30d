//! Emitter output: shard containers and the accessor bindings into them.

use resgen_core::ResourceType;
use serde::Serialize;

use crate::{ResourceEntry, ResourceKey, ShardId};

/// The emitted holder for one shard.
///
/// Owns its entries; no entry appears in more than one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardContainer {
    pub id: ShardId,
    pub entries: Vec<ResourceEntry>,
}

impl ShardContainer {
    /// Container name, e.g. `Drawable0`.
    pub fn name(&self) -> String {
        self.id.name()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Forwarding link from a resource key to its slot in a shard container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorBinding {
    pub key: ResourceKey,
    pub shard: ShardId,
    /// Position of the entry inside the shard container.
    pub slot: usize,
}

/// Containers and bindings for one resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emission {
    pub kind: ResourceType,
    /// Containers ordered by shard index.
    pub containers: Vec<ShardContainer>,
    /// Bindings in input order.
    pub bindings: Vec<AccessorBinding>,
}

impl Emission {
    /// An emission with no containers or bindings.
    pub fn empty(kind: ResourceType) -> Self {
        Self {
            kind,
            containers: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Container for a shard, if that shard was produced.
    pub fn container(&self, shard: ShardId) -> Option<&ShardContainer> {
        if shard.kind != self.kind {
            return None;
        }
        self.containers.get(shard.index)
    }

    /// Entry a binding forwards to.
    ///
    /// Returns `None` when the binding points outside the produced
    /// containers or at a slot holding a different key.
    pub fn resolve(&self, binding: &AccessorBinding) -> Option<&ResourceEntry> {
        self.container(binding.shard)?
            .entries
            .get(binding.slot)
            .filter(|entry| entry.key == binding.key)
    }

    /// Bindings whose target lives in the given container, in slot order.
    pub fn bindings_for(&self, shard: ShardId) -> impl Iterator<Item = &AccessorBinding> {
        self.bindings.iter().filter(move |b| b.shard == shard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceVariant;

    fn emission() -> Emission {
        let kind = ResourceType::Drawable;
        let entry = |key: &str| {
            ResourceEntry::new(kind, key, vec![ResourceVariant::new(format!("drawable/{key}.xml"))])
        };
        Emission {
            kind,
            containers: vec![ShardContainer {
                id: ShardId::new(kind, 0),
                entries: vec![entry("a"), entry("b")],
            }],
            bindings: vec![
                AccessorBinding {
                    key: "a".into(),
                    shard: ShardId::new(kind, 0),
                    slot: 0,
                },
                AccessorBinding {
                    key: "b".into(),
                    shard: ShardId::new(kind, 0),
                    slot: 1,
                },
            ],
        }
    }

    #[test]
    fn test_resolve_valid_binding() {
        let emission = emission();
        let entry = emission.resolve(&emission.bindings[1]).unwrap();
        assert_eq!(entry.logical_id, "drawable:b");
    }

    #[test]
    fn test_resolve_rejects_dangling_bindings() {
        let emission = emission();
        let kind = ResourceType::Drawable;

        let wrong_shard = AccessorBinding {
            key: "a".into(),
            shard: ShardId::new(kind, 1),
            slot: 0,
        };
        let wrong_slot = AccessorBinding {
            key: "a".into(),
            shard: ShardId::new(kind, 0),
            slot: 1,
        };
        let wrong_kind = AccessorBinding {
            key: "a".into(),
            shard: ShardId::new(ResourceType::Font, 0),
            slot: 0,
        };

        assert!(emission.resolve(&wrong_shard).is_none());
        assert!(emission.resolve(&wrong_slot).is_none());
        assert!(emission.resolve(&wrong_kind).is_none());
    }

    #[test]
    fn test_bindings_for_shard() {
        let emission = emission();
        let keys: Vec<&str> = emission
            .bindings_for(ShardId::new(ResourceType::Drawable, 0))
            .map(|b| b.key.as_str())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
