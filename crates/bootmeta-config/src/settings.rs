//! Reader settings
//!
//! A `ReaderConfig` can be built in code or loaded from a TOML document:
//!
//! ```toml
//! manifest-path = "META-INF/MANIFEST.MF"
//! missing-manifest = "error"
//! ```
//!
//! Keys that are left out take their defaults.

use crate::errors::ConfigError;
use crate::paths::DEFAULT_MANIFEST_PATH;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Component, Path, PathBuf};

/// What a manifest source does when the application has no manifest file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingManifest {
    /// Fail the read with a not-found error
    #[default]
    Error,
    /// Treat the manifest as present but empty
    Empty,
}

/// Settings for locating and reading an application manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReaderConfig {
    /// Manifest location relative to the application root
    pub manifest_path: PathBuf,
    pub missing_manifest: MissingManifest,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            missing_manifest: MissingManifest::Error,
        }
    }
}

impl ReaderConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ReaderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults if it doesn't exist
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ReaderConfig::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Use a different missing-manifest policy
    pub fn with_missing_manifest(mut self, policy: MissingManifest) -> Self {
        self.missing_manifest = policy;
        self
    }

    /// Check that the manifest path stays inside the application root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidManifestPath {
            path: self.manifest_path.clone(),
            reason: reason.to_string(),
        };

        if self.manifest_path.as_os_str().is_empty() {
            return Err(invalid("must not be empty"));
        }

        for component in self.manifest_path.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => return Err(invalid("must not contain '..'")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("must be relative to the application root"))
                }
            }
        }

        Ok(())
    }
}
