//! Core operations.
//!
//! This module contains the business logic for resgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};

use resgen_ir::Emission;

use crate::reports::PlanSummary;

fn summarize(emissions: &[Emission]) -> Vec<PlanSummary> {
    emissions
        .iter()
        .map(|emission| PlanSummary {
            kind: emission.kind,
            entries: emission.bindings.len(),
            shard_sizes: emission.containers.iter().map(|c| c.len()).collect(),
        })
        .collect()
}
