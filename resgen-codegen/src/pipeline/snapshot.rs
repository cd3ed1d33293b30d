//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the pipeline state after each phase so the intermediate
//! resource sets, shard plans and emissions can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use resgen_ir::{Emission, ResourceSet, ShardPlan};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// The pipeline state right after a phase completed.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    pub shard_capacity: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceSet>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<Vec<ShardPlan>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<Vec<Emission>>,

    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn capture(phase: &str, ctx: &CompilationContext) -> Self {
        Self {
            phase: phase.to_string(),
            shard_capacity: ctx.shard_capacity,
            resources: ctx.resources.clone(),
            plans: ctx.plans.clone(),
            emissions: ctx.emissions.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    /// File name the snapshot is written to, e.g. `plan.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.phase)
    }
}

/// A plugin that captures pipeline state after each phase.
///
/// Backs the `--visualize` flag.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".resgen/debug"));
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Snapshots are written here as soon as they are captured.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// All snapshots captured so far.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots into `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.snapshots() {
            write_snapshot(dir.as_ref(), &snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join(snapshot.file_name()), json)?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot::capture(phase, ctx);

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
            tracing::debug!(path = %dir.join(snapshot.file_name()).display(), "wrote snapshot");
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
