//! Pipeline orchestrator.

use eyre::Result;
use resgen_manifest::Manifest;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{EmitPhase, LowerPhase, PlanPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower, plan, emit) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .shard_capacity(100)
///     .plugin(SnapshotPlugin::with_output_dir(".resgen/debug"));
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
    shard_capacity: Option<i64>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
            shard_capacity: None,
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Override the manifest's shard capacity.
    pub fn shard_capacity(mut self, capacity: i64) -> Self {
        self.shard_capacity = Some(capacity);
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the shard capacity is not positive, validation
    /// reports errors, or any phase fails. The capacity is checked before
    /// any phase runs. Capacity, planner and emitter failures carry a
    /// [`crate::Error`] that can be recovered with `downcast_ref`.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        if let Some(capacity) = self.shard_capacity {
            ctx.shard_capacity = capacity;
        }
        ctx.capacity()?;

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(PlanPhase),
            Box::new(EmitPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "{}", phase.description());

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        tracing::debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
