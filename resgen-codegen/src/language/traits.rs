//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific serializers.
///
/// A serializer turns the emissions of a pipeline run into source files.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation. Paths are relative to the output directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files created or rewritten
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
    /// Stale generated files that were deleted
    pub removed: Vec<String>,
}

impl GenerateResult {
    /// Total number of files in the current output.
    pub fn file_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
