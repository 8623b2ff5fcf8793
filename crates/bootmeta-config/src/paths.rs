//! Manifest location helpers
//!
//! Packaged JVM applications keep their manifest under `META-INF/` at the
//! root of the exploded archive.

use crate::errors::ConfigError;
use crate::settings::ReaderConfig;
use std::path::{Path, PathBuf};

/// Directory holding archive metadata
pub const META_INF_DIR: &str = "META-INF";

/// Default manifest location relative to the application root
pub const DEFAULT_MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Resolve the manifest file path for an application root
///
/// # Arguments
///
/// * `application_root` - Root directory of the exploded application
/// * `config` - Reader settings naming the manifest location
///
/// # Returns
///
/// The joined manifest path. The file itself is not required to exist;
/// that decision belongs to the caller's missing-manifest policy.
pub fn resolve_manifest_path(
    application_root: &Path,
    config: &ReaderConfig,
) -> Result<PathBuf, ConfigError> {
    if !application_root.is_dir() {
        return Err(ConfigError::RootNotFound(application_root.to_path_buf()));
    }

    config.validate()?;
    Ok(application_root.join(&config.manifest_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_default_manifest_path() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = resolve_manifest_path(temp_dir.path(), &ReaderConfig::default());
        assert!(result.is_ok(), "Failed to resolve manifest path");
        assert!(result.is_ok_and(|p| p.ends_with("META-INF/MANIFEST.MF")));
    }

    #[test]
    fn test_resolve_custom_manifest_path() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let config = ReaderConfig {
            manifest_path: PathBuf::from("BOOT-INF/MANIFEST.MF"),
            ..Default::default()
        };
        let result = resolve_manifest_path(temp_dir.path(), &config);
        assert!(result.is_ok_and(|p| p == temp_dir.path().join("BOOT-INF/MANIFEST.MF")));
    }

    #[test]
    fn test_root_not_found() {
        let non_existent = PathBuf::from("/tmp/non_existent_application_12345");
        let result = resolve_manifest_path(&non_existent, &ReaderConfig::default());
        assert!(matches!(result, Err(ConfigError::RootNotFound(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let config = ReaderConfig {
            manifest_path: PathBuf::from("../MANIFEST.MF"),
            ..Default::default()
        };
        let result = resolve_manifest_path(temp_dir.path(), &config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidManifestPath { .. })
        ));
    }

    #[test]
    fn test_constants() {
        assert!(DEFAULT_MANIFEST_PATH.starts_with(META_INF_DIR));
    }
}
