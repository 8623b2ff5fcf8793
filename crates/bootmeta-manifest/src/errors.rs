use bootmeta_config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an application manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed manifest at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ManifestError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ManifestError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
