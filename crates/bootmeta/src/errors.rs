use thiserror::Error;

/// Errors from converting metadata to and from layer metadata TOML
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to parse metadata: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] toml::ser::Error),
}
