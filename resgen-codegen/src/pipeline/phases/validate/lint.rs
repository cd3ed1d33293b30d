//! Lint trait for manifest validation.

use resgen_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// A check over the manifest that reports diagnostics.
pub trait Lint: Send + Sync {
    /// The lint name, in kebab-case.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}
