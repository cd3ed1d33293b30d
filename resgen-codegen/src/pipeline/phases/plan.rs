//! Plan phase - partitions each resource set into shards.

use eyre::{Result, eyre};

use crate::{
    pipeline::{CompilationContext, Phase},
    planner,
};

/// Phase that runs the Shard Planner over every resource set.
///
/// Consumes the lowered resource sets. The capacity is the one validated
/// on the context, so a bad value fails before any set is planned.
pub struct PlanPhase;

impl Phase for PlanPhase {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn description(&self) -> &'static str {
        "Partition resources into bounded shards"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let capacity = ctx.capacity()?;
        let sets = ctx
            .resources
            .take()
            .ok_or_else(|| eyre!("resources not set - did the lower phase run?"))?;

        let plans = sets
            .into_iter()
            .map(|set| planner::plan(set.kind, set.entries, capacity))
            .collect::<crate::Result<Vec<_>>>()?;

        ctx.plans = Some(plans);
        Ok(())
    }
}
