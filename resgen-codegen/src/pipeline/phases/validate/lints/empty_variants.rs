//! Lint for resources without variants.

use resgen_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on resources that declare no variants.
pub struct EmptyVariantsLint;

impl Lint for EmptyVariantsLint {
    fn name(&self) -> &'static str {
        "empty-variants"
    }

    fn description(&self) -> &'static str {
        "Require at least one variant per resource"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for resource in manifest.resources.iter().filter(|r| r.variants.is_empty()) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!(
                        "{} resource '{}' has no variants",
                        resource.kind, resource.name
                    ),
                )
                .at(resource.location()),
            );
        }
    }
}
