//! Lint for repeated qualifier sets within one resource.

use std::collections::BTreeSet;

use resgen_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two variants of a resource share a qualifier set.
///
/// Qualifiers are compared as sets, so `["en", "night"]` and
/// `["night", "en"]` collide. The runtime would never pick the later one.
pub struct DuplicateVariantLint;

impl Lint for DuplicateVariantLint {
    fn name(&self) -> &'static str {
        "duplicate-variant"
    }

    fn description(&self) -> &'static str {
        "Detect variants with identical qualifier sets"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &manifest.resources {
            let mut seen: Vec<BTreeSet<&str>> = Vec::new();

            for variant in &resource.variants {
                let qualifiers: BTreeSet<&str> =
                    variant.qualifiers.iter().map(String::as_str).collect();
                if seen.contains(&qualifiers) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "{} resource '{}' declares qualifiers [{}] more than once",
                                resource.kind,
                                resource.name,
                                qualifiers.iter().copied().collect::<Vec<_>>().join(", ")
                            ),
                        )
                        .at(resource.location()),
                    );
                } else {
                    seen.push(qualifiers);
                }
            }
        }
    }
}
