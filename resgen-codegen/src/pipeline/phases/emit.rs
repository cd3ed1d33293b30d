//! Emit phase - turns shard plans into containers and accessor bindings.

use eyre::{Result, eyre};

use crate::{
    emitter,
    pipeline::{CompilationContext, Phase},
};

/// Phase that runs the Accessor Emitter over every shard plan.
///
/// Consumes the plans; only the emissions remain on the context.
pub struct EmitPhase;

impl Phase for EmitPhase {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn description(&self) -> &'static str {
        "Emit shard containers and accessor bindings"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let plans = ctx
            .plans
            .take()
            .ok_or_else(|| eyre!("plans not set - did the plan phase run?"))?;

        let emissions = plans
            .into_iter()
            .map(emitter::emit)
            .collect::<crate::Result<Vec<_>>>()?;

        ctx.emissions = Some(emissions);
        Ok(())
    }
}
