use std::fmt;

use resgen_core::ResourceType;
use resgen_ir::ResourceKey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while planning and emitting shards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Shard capacity is not a positive integer.
    #[error("invalid shard capacity {capacity}: capacity must be at least 1")]
    Configuration { capacity: i64 },

    /// The manifest contents cannot be planned.
    #[error("{issue}: {kind} resource '{key}'")]
    Manifest {
        kind: ResourceType,
        key: ResourceKey,
        issue: ManifestIssue,
    },

    /// Emission produced a reference that planning did not.
    ///
    /// Always a generator defect.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),
}

impl Error {
    pub(crate) fn manifest(kind: ResourceType, key: &ResourceKey, issue: ManifestIssue) -> Self {
        Self::Manifest {
            kind,
            key: key.clone(),
            issue,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::InternalConsistency(message.into())
    }

    /// The offending resource key, for manifest errors.
    pub fn key(&self) -> Option<&ResourceKey> {
        match self {
            Error::Manifest { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// What is wrong with a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestIssue {
    DuplicateKey,
    NoVariants,
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestIssue::DuplicateKey => f.write_str("duplicate resource key"),
            ManifestIssue::NoVariants => f.write_str("resource has no variants"),
        }
    }
}
