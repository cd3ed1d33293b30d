use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use resgen_manifest::ResourcesToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to resources.toml (defaults to ./resources.toml)
    #[arg(short, long, default_value = "resources.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Maximum number of resources per shard (overrides resources.toml)
    #[arg(long, allow_negative_numbers = true)]
    pub shard_capacity: Option<i64>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of every pipeline phase to <output>/.resgen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let resources_toml = ResourcesToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            resources_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                shard_capacity: self.shard_capacity,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
