//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    PlanSummary,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Shard capacity the plan was built with.
    pub shard_capacity: i64,

    /// Warning messages from pipeline.
    pub warnings: Vec<String>,

    /// Shard plan per resource type.
    pub plans: Vec<PlanSummary>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Generated module directory inside the output directory.
    pub module: String,
    /// Files created or rewritten.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
    /// Stale generated files that were deleted.
    pub removed: Vec<String>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        self.render_plans(out);
        out.newline();

        out.key_value(
            "Generated",
            &format!("{}/{}/", written.output_dir.display(), written.module),
        );

        if !written.written.is_empty() {
            out.newline();
            out.section("Updated files");
            for file in &written.written {
                out.added_item(file);
            }
        }

        if !written.removed.is_empty() {
            out.newline();
            out.section("Removed stale files");
            for file in &written.removed {
                out.removed_item(file);
            }
        }

        if written.written.is_empty() && written.removed.is_empty() {
            out.preformatted(&format!(
                "Everything up to date ({} files)",
                written.unchanged.len()
            ));
        }
    }

    fn render_plans(&self, out: &mut dyn Output) {
        let total: usize = self.plans.iter().map(|p| p.shard_sizes.len()).sum();
        out.section(&format!(
            "Shards ({}, capacity {})",
            total, self.shard_capacity
        ));
        for plan in &self.plans {
            out.list_item(&plan.describe());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_plans(out);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
