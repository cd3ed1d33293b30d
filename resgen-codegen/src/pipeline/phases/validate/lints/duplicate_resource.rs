//! Lint for duplicate resource detection.

use std::collections::HashSet;

use resgen_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a resource type declares the same name twice.
///
/// Names are compared exactly; `icon` and `Icon` are distinct accessors.
pub struct DuplicateResourceLint;

impl Lint for DuplicateResourceLint {
    fn name(&self) -> &'static str {
        "duplicate-resource"
    }

    fn description(&self) -> &'static str {
        "Detect resources declared more than once"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for resource in &manifest.resources {
            let id = (resource.kind, resource.name.as_str());
            if !seen.insert(id) && reported.insert(id) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("duplicate {} resource '{}'", resource.kind, resource.name),
                    )
                    .at(resource.location()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_duplicate_reported_once() {
        let manifest = Manifest::from_str(
            r#"
            [[resource]]
            type = "drawable"
            name = "icon_1"
            variants = [{ path = "drawable/icon_1.xml" }]

            [[resource]]
            type = "drawable"
            name = "icon_1"
            variants = [{ path = "drawable/icon_1.png" }]

            [[resource]]
            type = "drawable"
            name = "icon_1"
            variants = [{ path = "drawable/icon_1.webp" }]
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateResourceLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].message, "duplicate drawable resource 'icon_1'");
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("resource.drawable.icon_1")
        );
    }

    #[test]
    fn test_same_name_different_types() {
        let manifest = Manifest::from_str(
            r#"
            [[resource]]
            type = "drawable"
            name = "logo"
            variants = [{ path = "drawable/logo.xml" }]

            [[resource]]
            type = "string"
            name = "logo"
            variants = [{ path = "values/strings.xml" }]
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateResourceLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
