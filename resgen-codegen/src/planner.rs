//! Shard Planner.
//!
//! Partitions the ordered entries of one resource type into shards of a
//! fixed capacity. The input order is kept as given: shard `i` holds a
//! contiguous run of the input that precedes the run held by shard `i + 1`.

use std::{collections::HashSet, num::NonZeroUsize};

use resgen_core::ResourceType;
use resgen_ir::{ResourceEntry, Shard, ShardPlan};
use resgen_manifest::DEFAULT_SHARD_CAPACITY;

use crate::{Error, ManifestIssue, Result};

/// A validated, positive shard capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShardCapacity(NonZeroUsize);

impl ShardCapacity {
    pub const DEFAULT: ShardCapacity =
        ShardCapacity(NonZeroUsize::new(DEFAULT_SHARD_CAPACITY as usize).unwrap());

    /// Validate a configured capacity.
    ///
    /// Zero and negative values are rejected with [`Error::Configuration`].
    pub fn new(capacity: i64) -> Result<Self> {
        usize::try_from(capacity)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(Error::Configuration { capacity })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ShardCapacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for ShardCapacity {
    type Error = Error;

    fn try_from(capacity: i64) -> Result<Self> {
        Self::new(capacity)
    }
}

impl From<NonZeroUsize> for ShardCapacity {
    fn from(capacity: NonZeroUsize) -> Self {
        Self(capacity)
    }
}

/// Check entries for problems that would make planning ambiguous.
///
/// Duplicate keys are reported before empty variant lists; the first
/// offending key in input order is named.
pub fn validate_entries(kind: ResourceType, entries: &[ResourceEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.key.as_str()) {
            return Err(Error::manifest(kind, &entry.key, ManifestIssue::DuplicateKey));
        }
    }

    if let Some(entry) = entries.iter().find(|e| e.variants.is_empty()) {
        return Err(Error::manifest(kind, &entry.key, ManifestIssue::NoVariants));
    }

    Ok(())
}

/// Partition `entries` into shards of at most `capacity` entries.
///
/// Greedy fixed-size chunking in a single pass. Empty input yields an
/// empty plan.
pub fn plan(
    kind: ResourceType,
    entries: Vec<ResourceEntry>,
    capacity: ShardCapacity,
) -> Result<ShardPlan> {
    validate_entries(kind, &entries)?;

    let size = capacity.get();
    let mut shards = Vec::with_capacity(entries.len().div_ceil(size));
    let mut remaining = entries.into_iter();

    loop {
        let chunk: Vec<ResourceEntry> = remaining.by_ref().take(size).collect();
        if chunk.is_empty() {
            break;
        }
        shards.push(Shard {
            index: shards.len(),
            entries: chunk,
        });
    }

    let plan = ShardPlan {
        kind,
        capacity: size,
        shards,
    };
    tracing::debug!(
        kind = %kind,
        entries = plan.entry_count(),
        shards = ?plan.shard_sizes(),
        capacity = size,
        "planned shards"
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use resgen_ir::ResourceVariant;

    use super::*;

    fn entries(keys: &[&str]) -> Vec<ResourceEntry> {
        keys.iter()
            .map(|key| {
                ResourceEntry::new(
                    ResourceType::Drawable,
                    *key,
                    vec![ResourceVariant::new(format!("drawable/{key}.xml"))],
                )
            })
            .collect()
    }

    fn capacity(n: i64) -> ShardCapacity {
        ShardCapacity::new(n).unwrap()
    }

    fn keys_per_shard(plan: &ShardPlan) -> Vec<Vec<&str>> {
        plan.shards
            .iter()
            .map(|s| s.entries.iter().map(|e| e.key.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_capacity_rejects_non_positive() {
        assert_eq!(
            ShardCapacity::new(0),
            Err(Error::Configuration { capacity: 0 })
        );
        assert_eq!(
            ShardCapacity::new(-3),
            Err(Error::Configuration { capacity: -3 })
        );
        assert_eq!(ShardCapacity::new(1).unwrap().get(), 1);
        assert_eq!(ShardCapacity::default().get(), 500);
    }

    #[test]
    fn test_five_keys_capacity_two() {
        let plan = plan(
            ResourceType::Drawable,
            entries(&["a", "b", "c", "d", "e"]),
            capacity(2),
        )
        .unwrap();

        assert_eq!(
            keys_per_shard(&plan),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]
        );
        assert_eq!(plan.shard_sizes(), [2, 2, 1]);
        let indices: Vec<usize> = plan.shards.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        let plan = plan(ResourceType::Drawable, Vec::new(), capacity(3)).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.entry_count(), 0);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_shard() {
        let plan = plan(
            ResourceType::Drawable,
            entries(&["a", "b", "c", "d"]),
            capacity(2),
        )
        .unwrap();
        assert_eq!(plan.shard_sizes(), [2, 2]);
    }

    #[test]
    fn test_single_entry() {
        let plan = plan(ResourceType::Drawable, entries(&["only"]), capacity(500)).unwrap();
        assert_eq!(plan.shard_sizes(), [1]);
    }

    #[test]
    fn test_does_not_resort() {
        let plan = plan(
            ResourceType::Drawable,
            entries(&["zeta", "alpha", "mid"]),
            capacity(2),
        )
        .unwrap();
        assert_eq!(
            keys_per_shard(&plan),
            vec![vec!["zeta", "alpha"], vec!["mid"]]
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = plan(
            ResourceType::Drawable,
            entries(&["icon_0", "icon_1", "icon_1"]),
            capacity(2),
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::Manifest {
                kind: ResourceType::Drawable,
                key: "icon_1".into(),
                issue: ManifestIssue::DuplicateKey,
            }
        );
    }

    #[test]
    fn test_empty_variants_rejected() {
        let mut input = entries(&["a", "b"]);
        input[1].variants.clear();

        let err = plan(ResourceType::Drawable, input, capacity(2)).unwrap_err();
        assert_eq!(err.key().map(|k| k.as_str()), Some("b"));
        assert!(matches!(
            err,
            Error::Manifest {
                issue: ManifestIssue::NoVariants,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicates_reported_before_empty_variants() {
        let mut input = entries(&["a", "b", "b"]);
        input[0].variants.clear();

        let err = plan(ResourceType::Drawable, input, capacity(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::Manifest {
                issue: ManifestIssue::DuplicateKey,
                ..
            }
        ));
    }
}
