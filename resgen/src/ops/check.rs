//! Check operation - manifest validation and shard plan preview.

use std::path::Path;

use eyre::Result;
use resgen_codegen::{
    pipeline::{Pipeline, Severity, phases::ValidatePhase},
    planner::ShardCapacity,
};
use resgen_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Checks the shard capacity, lints the manifest and, when both are free of
/// errors, runs the pipeline to report the shard plan. Capacity and planner
/// errors end up in the report rather than failing the operation.
pub fn check(
    manifest: &Manifest,
    config_path: &Path,
    shard_capacity: Option<i64>,
) -> Result<CheckReport> {
    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        shard_capacity: shard_capacity.unwrap_or(manifest.generator.shard_capacity),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
        plans: Vec::new(),
    };

    if let Err(err) = ShardCapacity::new(report.shard_capacity) {
        report.errors.push(err.to_string());
        return Ok(report);
    }

    for diag in ValidatePhase::new().diagnose(manifest) {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => report.errors.push(msg),
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }

    if !report.is_valid() {
        return Ok(report);
    }

    let mut pipeline = Pipeline::new();
    if let Some(capacity) = shard_capacity {
        pipeline = pipeline.shard_capacity(capacity);
    }

    match pipeline.run(manifest.clone()) {
        Ok(ctx) => {
            report.plans = super::summarize(ctx.emissions.as_deref().unwrap_or_default());
        }
        Err(err) => match err.downcast_ref::<resgen_codegen::Error>() {
            Some(planning) => report.errors.push(planning.to_string()),
            None => return Err(err),
        },
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use resgen_core::ResourceType;

    use super::*;

    fn manifest(toml: &str) -> Manifest {
        Manifest::from_str(toml).unwrap()
    }

    #[test]
    fn test_valid_manifest_reports_plans() {
        let manifest = manifest(
            r#"
            [[resource]]
            type = "string"
            name = "app_name"
            variants = [{ path = "values/strings.xml" }]

            [[resource]]
            type = "drawable"
            name = "icon"
            variants = [{ path = "drawable/icon.xml" }]
            "#,
        );

        let report = check(&manifest, Path::new("resources.toml"), None).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.shard_capacity, 500);
        let kinds: Vec<ResourceType> = report.plans.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, [ResourceType::Drawable, ResourceType::String]);
        assert_eq!(report.plans[1].shard_sizes, [1]);
    }

    #[test]
    fn test_lint_errors_are_collected() {
        let manifest = manifest(
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
            type = "font"
            name = "inter"
            "#,
        );

        let report = check(&manifest, Path::new("resources.toml"), None).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("icon_1"));
        assert!(report.plans.is_empty());
    }

    #[test]
    fn test_invalid_capacity_is_reported() {
        let manifest = manifest(
            r#"
            [[resource]]
            type = "drawable"
            name = "icon"
            variants = [{ path = "drawable/icon.xml" }]
            "#,
        );

        let report = check(&manifest, Path::new("resources.toml"), Some(-3)).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.shard_capacity, -3);
        assert!(report.errors[0].contains("-3"));
    }

    #[test]
    fn test_capacity_reported_before_lints() {
        let manifest = manifest(
            r#"
            [generator]
            shard_capacity = 0

            [[resource]]
            type = "drawable"
            name = "icon_1"
            variants = [{ path = "drawable/icon_1.xml" }]

            [[resource]]
            type = "drawable"
            name = "icon_1"
            variants = [{ path = "drawable/icon_1.png" }]
            "#,
        );

        let report = check(&manifest, Path::new("resources.toml"), None).unwrap();

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("invalid shard capacity 0"));
        assert!(report.plans.is_empty());
    }
}
