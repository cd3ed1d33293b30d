//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use resgen_ir::{Emission, ResourceSet, ShardPlan};
use resgen_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};
use crate::planner::ShardCapacity;

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled.
    pub manifest: Manifest,
    /// Shard capacity in effect (manifest value unless overridden).
    pub shard_capacity: i64,
    /// `shard_capacity` once validated.
    capacity: Option<ShardCapacity>,
    /// Resources grouped by type (populated by LowerPhase).
    pub resources: Option<Vec<ResourceSet>>,
    /// One plan per resource type (populated by PlanPhase).
    pub plans: Option<Vec<ShardPlan>>,
    /// One emission per resource type (populated by EmitPhase).
    pub emissions: Option<Vec<Emission>>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a context using the manifest's own shard capacity.
    pub fn new(manifest: Manifest) -> Self {
        let shard_capacity = manifest.generator.shard_capacity;
        Self {
            manifest,
            shard_capacity,
            capacity: None,
            resources: None,
            plans: None,
            emissions: None,
            diagnostics: Vec::new(),
        }
    }

    /// The validated shard capacity.
    ///
    /// Validated on first use and cached. A non-positive value fails with
    /// [`crate::Error::Configuration`].
    pub fn capacity(&mut self) -> crate::Result<ShardCapacity> {
        if let Some(capacity) = self.capacity {
            return Ok(capacity);
        }
        let capacity = ShardCapacity::new(self.shard_capacity)?;
        self.capacity = Some(capacity);
        Ok(capacity)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the emissions out of the context.
    ///
    /// Fails if EmitPhase has not run.
    pub fn take_emissions(&mut self) -> Result<Vec<Emission>> {
        self.emissions
            .take()
            .ok_or_else(|| eyre!("emissions not set - did the emit phase run?"))
    }
}
