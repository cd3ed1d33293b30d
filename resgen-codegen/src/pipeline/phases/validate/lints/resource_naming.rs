//! Lint for resource naming conventions.

use resgen_core::is_snake_case;
use resgen_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about resource names that aren't lower snake_case.
///
/// Accessor names are the resource names verbatim, so anything else shows
/// up as a `non_snake_case` warning in the generated code.
pub struct ResourceNamingLint;

impl Lint for ResourceNamingLint {
    fn name(&self) -> &'static str {
        "resource-naming"
    }

    fn description(&self) -> &'static str {
        "Check resource names follow snake_case conventions"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &manifest.resources {
            if !is_snake_case(resource.name.trim_start_matches('_')) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "{} resource '{}' should use snake_case (e.g., 'icon_home' not 'iconHome')",
                            resource.kind, resource.name
                        ),
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

    fn manifest_with(names: &[&str]) -> Manifest {
        let content: String = names
            .iter()
            .map(|name| {
                format!(
                    "[[resource]]\ntype = \"drawable\"\nname = \"{name}\"\nvariants = [{{ path = \"drawable/{name}.xml\" }}]\n"
                )
            })
            .collect();
        Manifest::from_str(&content).unwrap()
    }

    #[test]
    fn test_snake_case_names_pass() {
        let manifest = manifest_with(&["icon_0", "ic_launcher_24dp", "_hidden"]);
        let mut diagnostics = Vec::new();
        ResourceNamingLint.check(&manifest, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_snake_case_warns() {
        let manifest = manifest_with(&["iconHome", "Logo"]);
        let mut diagnostics = Vec::new();
        ResourceNamingLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("resource.drawable.iconHome")
        );
    }
}
