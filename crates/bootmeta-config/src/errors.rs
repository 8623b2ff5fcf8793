use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or applying reader configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse reader config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid manifest path '{}': {}", .path.display(), .reason)]
    InvalidManifestPath { path: PathBuf, reason: String },

    #[error("Application root not found: {}", .0.display())]
    RootNotFound(PathBuf),
}
