//! Validate phase - runs lints on the manifest.

mod lint;
pub mod lints;

use eyre::{Result, eyre};
pub use lint::Lint;
pub use lints::{DuplicateResourceLint, DuplicateVariantLint, EmptyVariantsLint, ResourceNamingLint};

use resgen_manifest::Manifest;

use super::lower_manifest;
use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    planner,
};

/// Phase that validates the manifest using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateResourceLint),
                Box::new(EmptyVariantsLint),
                Box::new(DuplicateVariantLint),
                Box::new(ResourceNamingLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint against a manifest without touching a context.
    pub fn diagnose(&self, manifest: &Manifest) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(manifest, &mut diagnostics);
        }
        diagnostics
    }
}

/// The planner error behind the first resource set that cannot be planned.
fn manifest_error(manifest: &Manifest) -> Option<crate::Error> {
    lower_manifest(manifest)
        .into_iter()
        .find_map(|set| planner::validate_entries(set.kind, &set.entries).err())
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check manifest integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let diagnostics = self.diagnose(&ctx.manifest);
        ctx.diagnostics.extend(diagnostics);

        // warnings are allowed
        if ctx.has_errors() {
            let errors: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
            let message = format!(
                "validation failed with {} error(s)\n{}",
                ctx.error_count(),
                errors.join("\n")
            );
            return Err(match manifest_error(&ctx.manifest) {
                Some(source) => eyre::Report::new(source).wrap_err(message),
                None => eyre!(message),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            [
                "duplicate-resource",
                "empty-variants",
                "duplicate-variant",
                "resource-naming"
            ]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(Manifest::default());
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed with 1 error(s)\n  error: forced error"
        );
        assert!(ctx.has_errors());
        assert!(err.downcast_ref::<crate::Error>().is_none());
    }

    #[test]
    fn test_empty_variants_carry_manifest_error() {
        let manifest = Manifest::from_str(
            r#"
            [[resource]]
            type = "font"
            name = "intro"
            variants = []
            "#,
        )
        .unwrap();
        let mut ctx = CompilationContext::new(manifest);

        let err = ValidatePhase::new().run(&mut ctx).unwrap_err();

        assert!(err.to_string().starts_with("validation failed with 1 error(s)"));
        assert_eq!(
            err.downcast_ref::<crate::Error>()
                .and_then(crate::Error::key)
                .map(|key| key.as_str()),
            Some("intro")
        );
    }

    #[test]
    fn test_warnings_allowed() {
        let manifest = Manifest::from_str(
            r#"
            [[resource]]
            type = "drawable"
            name = "IconHome"
            variants = [{ path = "drawable/IconHome.xml" }]
            "#,
        )
        .unwrap();
        let mut ctx = CompilationContext::new(manifest);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}
