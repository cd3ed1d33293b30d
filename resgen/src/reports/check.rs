//! Check command report data structures.

use std::path::PathBuf;

use super::{
    PlanSummary,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Shard capacity in effect.
    pub shard_capacity: i64,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Shard plan per resource type; empty when there are errors.
    pub plans: Vec<PlanSummary>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Shard capacity", &self.shard_capacity.to_string());

        if self.plans.is_empty() {
            out.preformatted("No resources declared");
            return;
        }

        out.section("Shards");
        for plan in &self.plans {
            out.list_item(&plan.describe());
        }
    }
}
