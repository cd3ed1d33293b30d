use std::path::{Path, PathBuf};

use eyre::Result;

/// Header written at the top of every generated source file.
///
/// Also used to recognise files owned by the generator when cleaning up
/// shards that no longer exist.
pub const GENERATED_HEADER: &str = "// @generated by resgen. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

/// Check whether the file at `path` was produced by the generator.
///
/// Returns `false` for missing or unreadable files.
pub fn is_generated(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .map(|content| content.starts_with(GENERATED_HEADER))
        .unwrap_or(false)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content and was left untouched
    Unchanged,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: write if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                let current = std::fs::read_to_string(&self.path).ok();
                if current.as_deref() == Some(self.content.as_str()) {
                    tracing::debug!("{} is up to date", self.path.display());
                    Ok(WriteResult::Unchanged)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Skip the write when the file already holds identical content, so
    /// regenerating from an unchanged manifest leaves timestamps alone
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("res").join("drawable0.rs");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mod.rs");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_changed_rewrites_different_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mod.rs");
        fs::write(&path, "old").unwrap();

        let result = File::new(&path, "new").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mod.rs");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same")
            .with_rules(FileRules {
                overwrite: Overwrite::Always,
            })
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
    }

    #[test]
    fn test_is_generated() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("drawable0.rs");
        let handwritten = temp.path().join("lib.rs");
        fs::write(&generated, format!("{}\n\nmod x;\n", GENERATED_HEADER)).unwrap();
        fs::write(&handwritten, "mod x;\n").unwrap();

        assert!(is_generated(&generated));
        assert!(!is_generated(&handwritten));
        assert!(!is_generated(&temp.path().join("missing.rs")));
    }

    #[test]
    fn test_generated_file_trait_write() {
        struct Greeting;

        impl GeneratedFile for Greeting {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("greeting.rs")
            }

            fn render(&self) -> String {
                "pub const HELLO: &str = \"hello\";\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Unchanged);
    }
}
