use serde::Deserialize;

/// Shard capacity used when the manifest does not set one.
pub const DEFAULT_SHARD_CAPACITY: i64 = 500;

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Crate path the generated code imports descriptor types from
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Name of the generated module (and its output directory)
    #[serde(default = "default_module")]
    pub module: String,

    /// Maximum number of resources per shard.
    ///
    /// Kept signed so that a non-positive value reaches the planner and is
    /// reported as a configuration error instead of a TOML type error.
    #[serde(default = "default_shard_capacity")]
    pub shard_capacity: i64,
}

fn default_runtime() -> String {
    "resources".to_string()
}

fn default_module() -> String {
    "res".to_string()
}

fn default_shard_capacity() -> i64 {
    DEFAULT_SHARD_CAPACITY
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            module: default_module(),
            shard_capacity: DEFAULT_SHARD_CAPACITY,
        }
    }
}
