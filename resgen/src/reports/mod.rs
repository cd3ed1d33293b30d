//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};

use resgen_core::ResourceType;

/// Shard plan of one resource type, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub kind: ResourceType,
    pub entries: usize,
    pub shard_sizes: Vec<usize>,
}

impl PlanSummary {
    /// e.g. `drawable: 1201 resources in 3 shards (500, 500, 201)`
    pub fn describe(&self) -> String {
        let sizes: Vec<String> = self.shard_sizes.iter().map(|s| s.to_string()).collect();
        format!(
            "{}: {} resource{} in {} shard{} ({})",
            self.kind,
            self.entries,
            plural(self.entries),
            self.shard_sizes.len(),
            plural(self.shard_sizes.len()),
            sizes.join(", ")
        )
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_plan() {
        let summary = PlanSummary {
            kind: ResourceType::Drawable,
            entries: 1201,
            shard_sizes: vec![500, 500, 201],
        };
        assert_eq!(
            summary.describe(),
            "drawable: 1201 resources in 3 shards (500, 500, 201)"
        );

        let summary = PlanSummary {
            kind: ResourceType::Font,
            entries: 1,
            shard_sizes: vec![1],
        };
        assert_eq!(summary.describe(), "font: 1 resource in 1 shard (1)");
    }
}
