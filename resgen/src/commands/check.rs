use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use resgen_manifest::ResourcesToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to resources.toml (defaults to ./resources.toml)
    #[arg(short, long, default_value = "resources.toml")]
    pub config: PathBuf,

    /// Maximum number of resources per shard (overrides resources.toml)
    #[arg(long, allow_negative_numbers = true)]
    pub shard_capacity: Option<i64>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let resources_toml = ResourcesToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(resources_toml.manifest(), &self.config, self.shard_capacity)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
