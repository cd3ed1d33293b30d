use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use eyre::Result;
use resgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use resgen_core::{GeneratedFile, WriteResult, is_generated};
use resgen_ir::Emission;
use resgen_manifest::GeneratorConfig;

use crate::files::{ResMod, ShardRs};

/// Rust serializer for the emissions of a pipeline run.
///
/// Produces `<module>/mod.rs` plus one `<module>/<container>.rs` per shard
/// container, in resource type order then shard index order.
#[derive(Debug, Clone)]
pub struct Generator {
    module: String,
    mod_rs: ResMod,
    shards: Vec<ShardRs>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    pub fn new(emissions: &[Emission], config: &GeneratorConfig) -> Result<Self> {
        let mut shards = Vec::new();
        for emission in emissions {
            for container in &emission.containers {
                shards.push(ShardRs::new(emission, container, config)?);
            }
        }

        Ok(Self {
            module: config.module.clone(),
            mod_rs: ResMod::new(emissions, config),
            shards,
        })
    }

    /// Number of shard files, not counting `mod.rs`.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn files(&self) -> impl Iterator<Item = &dyn GeneratedFile> {
        std::iter::once(&self.mod_rs as &dyn GeneratedFile)
            .chain(self.shards.iter().map(|s| s as &dyn GeneratedFile))
    }

    fn relative(path: &Path, base: &Path) -> String {
        path.strip_prefix(base)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn preview_files(&self) -> Vec<PreviewFile> {
        let base = Path::new("");
        self.files()
            .map(|file| PreviewFile {
                path: file.path(base).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        let mut expected = HashSet::new();

        for file in self.files() {
            let path = file.path(output_dir);
            let relative = Self::relative(&path, output_dir);
            match file.write(output_dir)? {
                WriteResult::Written => {
                    tracing::debug!("wrote {}", relative);
                    result.written.push(relative);
                }
                WriteResult::Unchanged => result.unchanged.push(relative),
            }
            expected.insert(path);
        }

        for path in self.find_stale(output_dir, &expected)? {
            std::fs::remove_file(&path)?;
            let relative = Self::relative(&path, output_dir);
            tracing::debug!("removed stale {}", relative);
            result.removed.push(relative);
        }

        Ok(result)
    }

    /// Generated `.rs` files in the module directory that this run did not
    /// produce, e.g. shards left over from a larger resource set.
    ///
    /// Files without the generated header are never touched.
    pub fn find_stale(&self, output_dir: &Path, expected: &HashSet<PathBuf>) -> Result<Vec<PathBuf>> {
        let dir = output_dir.join(&self.module);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut stale = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            let is_rust = path.extension().is_some_and(|ext| ext == "rs");
            if is_rust && !expected.contains(&path) && is_generated(&path) {
                stale.push(path);
            }
        }
        stale.sort();
        Ok(stale)
    }
}
