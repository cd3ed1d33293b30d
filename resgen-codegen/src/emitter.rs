//! Accessor Emitter.
//!
//! Turns a [`ShardPlan`] into one [`ShardContainer`] per shard and one
//! [`AccessorBinding`] per entry. Variant data is moved into the containers
//! untouched.

use std::collections::HashSet;

use rayon::prelude::*;
use resgen_ir::{AccessorBinding, Emission, ResourceEntry, ShardContainer, ShardId, ShardPlan};

use crate::{Error, Result};

/// Emit containers and bindings for a plan.
///
/// Shards are independent once planned, so they are emitted in parallel.
/// Results are collected by shard index and never depend on completion
/// order.
pub fn emit(plan: ShardPlan) -> Result<Emission> {
    let kind = plan.kind;

    let parts: Vec<(ShardContainer, Vec<AccessorBinding>)> = plan
        .shards
        .into_par_iter()
        .map(|shard| {
            let id = ShardId::new(kind, shard.index);
            let bindings = shard
                .entries
                .iter()
                .enumerate()
                .map(|(slot, entry)| AccessorBinding {
                    key: entry.key.clone(),
                    shard: id,
                    slot,
                })
                .collect();
            let container = ShardContainer {
                id,
                entries: shard.entries,
            };
            (container, bindings)
        })
        .collect();

    let mut emission = Emission::empty(kind);
    for (container, bindings) in parts {
        emission.containers.push(container);
        emission.bindings.extend(bindings);
    }

    verify(&emission)?;

    tracing::debug!(
        kind = %kind,
        containers = emission.containers.len(),
        accessors = emission.bindings.len(),
        "emitted accessors"
    );

    Ok(emission)
}

/// Check that containers and bindings agree.
///
/// Every container sits at the position of its shard index, every key lives
/// in exactly one container, and every binding resolves to the entry it
/// names.
pub fn verify(emission: &Emission) -> Result<()> {
    let mut keys = HashSet::new();
    let mut entry_count = 0;

    for (position, container) in emission.containers.iter().enumerate() {
        if container.id.kind != emission.kind || container.id.index != position {
            return Err(Error::internal(format!(
                "container {} emitted at position {} of {} shards",
                container.id, position, emission.kind
            )));
        }
        for entry in &container.entries {
            if !keys.insert(entry.key.as_str()) {
                return Err(Error::internal(format!(
                    "key '{}' emitted into more than one container",
                    entry.key
                )));
            }
        }
        entry_count += container.len();
    }

    if emission.bindings.len() != entry_count {
        return Err(Error::internal(format!(
            "{} accessors emitted for {} {} entries",
            emission.bindings.len(),
            entry_count,
            emission.kind
        )));
    }

    for binding in &emission.bindings {
        resolve_binding(emission, binding)?;
    }

    Ok(())
}

/// Entry an accessor forwards to.
///
/// A binding that points at a shard or slot the plan did not produce is a
/// generator defect and fails with [`Error::InternalConsistency`].
pub fn resolve_binding<'a>(
    emission: &'a Emission,
    binding: &AccessorBinding,
) -> Result<&'a ResourceEntry> {
    emission.resolve(binding).ok_or_else(|| {
        Error::internal(format!(
            "accessor '{}' references {} slot {}, which holds no such entry",
            binding.key, binding.shard, binding.slot
        ))
    })
}
