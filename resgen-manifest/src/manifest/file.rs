use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A resources.toml file with both raw content and parsed manifest.
pub struct ResourcesToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ResourcesToml {
    /// Open and parse a resources.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Consume the file, keeping only the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.toml");
        let content = "[[resource]]\ntype = \"font\"\nname = \"inter\"\nvariants = [{ path = \"font/inter.ttf\" }]\n";
        std::fs::write(&path, content).unwrap();

        let file = ResourcesToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.content(), content);
        assert_eq!(file.manifest().len(), 1);
    }

    #[test]
    fn test_open_rejects_invalid_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.toml");
        std::fs::write(&path, "[[resource]]\ntype = \"font\"\nname = \"1x\"\n").unwrap();

        let err = ResourcesToml::open(&path).err().unwrap();
        assert!(matches!(*err, crate::Error::InvalidIdentifier { .. }));
        assert!(err.to_string().contains("'1x'"));
    }
}
