//! Lower phase - groups manifest resources into planner input.

use eyre::Result;
use resgen_core::ResourceType;
use resgen_ir::{ResourceEntry, ResourceSet, ResourceVariant};
use resgen_manifest::{Manifest, ResourceDecl};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that turns the manifest into one [`ResourceSet`] per resource type.
///
/// Sets follow [`ResourceType`] order and entries are sorted by key in byte
/// order. Types with no declarations produce no set.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Group resources by type and sort them by key"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.resources = Some(lower_manifest(&ctx.manifest));
        Ok(())
    }
}

/// Lower a manifest into resource sets.
pub fn lower_manifest(manifest: &Manifest) -> Vec<ResourceSet> {
    manifest
        .kinds()
        .into_iter()
        .map(|kind| lower_kind(manifest, kind))
        .collect()
}

fn lower_kind(manifest: &Manifest, kind: ResourceType) -> ResourceSet {
    let mut entries: Vec<ResourceEntry> = manifest
        .resources_of(kind)
        .map(|decl| lower_resource(kind, decl))
        .collect();
    // stable: duplicates keep manifest order for the planner to report
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    ResourceSet::new(kind, entries)
}

fn lower_resource(kind: ResourceType, decl: &ResourceDecl) -> ResourceEntry {
    let variants = decl
        .variants
        .iter()
        .map(|v| ResourceVariant {
            qualifiers: v.qualifiers.clone(),
            path: v.path.clone(),
        })
        .collect();
    ResourceEntry::new(kind, decl.name.as_str(), variants)
}
