//! Generate operation - accessor code from the manifest.

use std::path::Path;

use eyre::{Context, Result};
use resgen_codegen::{
    language::LanguageCodegen,
    pipeline::{Pipeline, SnapshotPlugin},
};
use resgen_codegen_rust::Generator;
use resgen_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Overrides the manifest's shard capacity.
    pub shard_capacity: Option<i64>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and serializes the emissions to Rust.
/// Nothing is written unless every phase succeeds.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".resgen/debug");

    let mut pipeline = Pipeline::new();
    if let Some(capacity) = opts.shard_capacity {
        pipeline = pipeline.shard_capacity(capacity);
    }
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let mut ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx.warnings().map(|d| d.to_string()).collect();
    let emissions = ctx.take_emissions()?;
    let plans = super::summarize(&emissions);

    let generator = Generator::new(&emissions, &ctx.manifest.generator)
        .wrap_err("Failed to prepare generated files")?;

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        tracing::info!(
            written = gen_result.written.len(),
            unchanged = gen_result.unchanged.len(),
            removed = gen_result.removed.len(),
            "generated {} file(s)",
            gen_result.file_count()
        );

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            module: ctx.manifest.generator.module.clone(),
            written: gen_result.written,
            unchanged: gen_result.unchanged,
            removed: gen_result.removed,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        shard_capacity: ctx.shard_capacity,
        warnings,
        plans,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use resgen_core::ResourceType;
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
        [generator]
        shard_capacity = 2

        [[resource]]
        type = "drawable"
        name = "a"
        variants = [{ path = "drawable/a.xml" }]

        [[resource]]
        type = "drawable"
        name = "b"
        variants = [{ path = "drawable/b.xml" }]

        [[resource]]
        type = "drawable"
        name = "c"
        variants = [{ path = "drawable/c.xml" }]
    "#;

    fn options(output_dir: &Path) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            shard_capacity: None,
            dry_run: false,
            visualize: false,
        }
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(&manifest, options(temp.path())).unwrap();

        assert_eq!(report.plans.len(), 1);
        assert_eq!(report.plans[0].kind, ResourceType::Drawable);
        assert_eq!(report.plans[0].shard_sizes, [2, 1]);
        assert!(temp.path().join("res/mod.rs").exists());
        assert!(temp.path().join("res/drawable1.rs").exists());
        match report.result {
            GenerationResult::Written(written) => assert_eq!(written.written.len(), 3),
            GenerationResult::Preview(_) => panic!("Expected written result"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                dry_run: true,
                ..options(temp.path())
            },
        )
        .unwrap();

        assert!(!temp.path().join("res").exists());
        match report.result {
            GenerationResult::Preview(preview) => assert_eq!(preview.files.len(), 3),
            GenerationResult::Written(_) => panic!("Expected preview result"),
        }
    }

    #[test]
    fn test_capacity_override() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                shard_capacity: Some(1),
                ..options(temp.path())
            },
        )
        .unwrap();

        assert_eq!(report.shard_capacity, 1);
        assert_eq!(report.plans[0].shard_sizes, [1, 1, 1]);
    }

    #[test]
    fn test_invalid_capacity_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let err = generate(
            &manifest,
            GenerateOptions {
                shard_capacity: Some(0),
                ..options(temp.path())
            },
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<resgen_codegen::Error>(),
            Some(resgen_codegen::Error::Configuration { capacity: 0 })
        ));
        assert!(!temp.path().join("res").exists());
    }

    #[test]
    fn test_visualize_writes_snapshots() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                visualize: true,
                ..options(temp.path())
            },
        )
        .unwrap();

        let debug_dir = temp.path().join(".resgen/debug");
        assert!(debug_dir.join("plan.json").exists());
        match report.result {
            GenerationResult::Written(written) => assert_eq!(written.debug_dir, Some(debug_dir)),
            GenerationResult::Preview(_) => panic!("Expected written result"),
        }
    }
}
