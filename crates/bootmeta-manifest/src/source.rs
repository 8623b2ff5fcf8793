//! Manifest sources
//!
//! A [`ManifestSource`] yields the main attributes of an application's
//! manifest given the application root. [`JarManifestSource`] reads the file
//! from disk; closures and fixed [`Attributes`] maps work as sources too.

use crate::errors::ManifestError;
use crate::parser::parse_manifest;
use crate::types::{Attributes, Manifest};
use bootmeta_config::{resolve_manifest_path, MissingManifest, ReaderConfig};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Capability that reads manifest attributes for an application root
pub trait ManifestSource {
    fn read(&self, application_root: &Path) -> Result<Attributes, ManifestError>;
}

impl<F> ManifestSource for F
where
    F: Fn(&Path) -> Result<Attributes, ManifestError>,
{
    fn read(&self, application_root: &Path) -> Result<Attributes, ManifestError> {
        self(application_root)
    }
}

/// A fixed attribute map is a source that ignores the application root
impl ManifestSource for Attributes {
    fn read(&self, _application_root: &Path) -> Result<Attributes, ManifestError> {
        Ok(self.clone())
    }
}

/// Reads `META-INF/MANIFEST.MF` (or the configured path) from an exploded application
#[derive(Debug, Clone, Default)]
pub struct JarManifestSource {
    config: ReaderConfig,
}

impl JarManifestSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        JarManifestSource { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read and parse the whole manifest, including per-entry sections.
    pub fn read_manifest(&self, application_root: &Path) -> Result<Manifest, ManifestError> {
        let manifest_path = resolve_manifest_path(application_root, &self.config)?;

        debug!("Reading manifest from: {:?}", manifest_path);
        let content = match fs::read_to_string(&manifest_path) {
            Ok(content) => content,
            // Only a genuinely absent file falls under the missing-manifest policy
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return match self.config.missing_manifest {
                    MissingManifest::Error => Err(ManifestError::NotFound(manifest_path)),
                    MissingManifest::Empty => {
                        debug!("No manifest at {:?}, using empty manifest", manifest_path);
                        Ok(Manifest::default())
                    }
                };
            }
            Err(err) => return Err(ManifestError::Io(err)),
        };
        parse_manifest(&content)
    }
}

impl ManifestSource for JarManifestSource {
    fn read(&self, application_root: &Path) -> Result<Attributes, ManifestError> {
        let manifest = self.read_manifest(application_root)?;
        debug!("Manifest: {:?}", manifest.main);
        Ok(manifest.main)
    }
}

#[cfg(test)]
mod tests {
    use crate::source::*;
    use bootmeta_config::ConfigError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_manifest(root: &Path, content: &str) -> Option<()> {
        let meta_inf = root.join("META-INF");
        fs::create_dir_all(&meta_inf).ok()?;
        fs::write(meta_inf.join("MANIFEST.MF"), content).ok()
    }

    #[test]
    fn test_read_from_disk() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(()) = write_manifest(
            temp_dir.path(),
            "Manifest-Version: 1.0\nSpring-Boot-Version: 2.3.1\n",
        ) else {
            return;
        };

        let result = JarManifestSource::new().read(temp_dir.path());
        assert!(result.is_ok(), "Failed to read manifest");
        assert!(result.is_ok_and(|a| a.get("Spring-Boot-Version") == Some("2.3.1")));
    }

    #[test]
    fn test_read_returns_main_section_only() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(()) = write_manifest(
            temp_dir.path(),
            "Manifest-Version: 1.0\n\nName: BOOT-INF/lib/a.jar\nSpring-Boot-Version: 9.9\n",
        ) else {
            return;
        };

        let source = JarManifestSource::new();
        let attributes = source.read(temp_dir.path());
        assert!(attributes.is_ok_and(|a| !a.contains("Spring-Boot-Version")));

        let manifest = source.read_manifest(temp_dir.path());
        assert!(manifest.is_ok_and(|m| m.sections.len() == 1));
    }

    #[test]
    fn test_missing_manifest_is_error_by_default() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = JarManifestSource::new().read(temp_dir.path());
        assert!(matches!(result, Err(ManifestError::NotFound(_))));
    }

    #[test]
    fn test_missing_manifest_empty_policy() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let config = ReaderConfig::default().with_missing_manifest(MissingManifest::Empty);
        let result = JarManifestSource::with_config(config).read(temp_dir.path());
        assert!(result.is_ok_and(|a| a.is_empty()));
    }

    #[test]
    fn test_meta_inf_as_file_is_io_error() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Ok(()) = fs::write(temp_dir.path().join("META-INF"), "not a directory") else {
            return;
        };

        let result = JarManifestSource::new().read(temp_dir.path());
        assert!(matches!(result, Err(ManifestError::Io(_))));

        let config = ReaderConfig::default().with_missing_manifest(MissingManifest::Empty);
        let result = JarManifestSource::with_config(config).read(temp_dir.path());
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_manifest_directory_is_io_error() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Ok(()) = fs::create_dir_all(temp_dir.path().join("META-INF/MANIFEST.MF")) else {
            return;
        };

        let result = JarManifestSource::new().read(temp_dir.path());
        assert!(matches!(result, Err(ManifestError::Io(_))));

        let config = ReaderConfig::default().with_missing_manifest(MissingManifest::Empty);
        let result = JarManifestSource::with_config(config).read(temp_dir.path());
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_custom_manifest_path() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let boot_inf = temp_dir.path().join("BOOT-INF");
        let Ok(()) = fs::create_dir_all(&boot_inf) else {
            return;
        };
        let Ok(()) = fs::write(boot_inf.join("MANIFEST.MF"), "Main-Class: com.example.App\n")
        else {
            return;
        };

        let config = ReaderConfig {
            manifest_path: PathBuf::from("BOOT-INF/MANIFEST.MF"),
            ..Default::default()
        };
        let result = JarManifestSource::with_config(config).read(temp_dir.path());
        assert!(result.is_ok_and(|a| a.get("Main-Class") == Some("com.example.App")));
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let result = JarManifestSource::new().read(Path::new("/tmp/non_existent_application_12345"));
        assert!(matches!(
            result,
            Err(ManifestError::Config(ConfigError::RootNotFound(_)))
        ));
    }

    #[test]
    fn test_malformed_manifest_on_disk() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Some(()) = write_manifest(temp_dir.path(), "Manifest-Version 1.0\n") else {
            return;
        };
        let result = JarManifestSource::new().read(temp_dir.path());
        assert!(matches!(result, Err(ManifestError::Malformed { line: 1, .. })));
    }

    #[test]
    fn test_closure_source() {
        let source = |_: &Path| -> Result<Attributes, ManifestError> {
            Err(ManifestError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "file not found",
            )))
        };
        let result = source.read(Path::new("."));
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_fixed_attributes_source() {
        let attributes: Attributes = [("Main-Class", "com.example.App")].into_iter().collect();
        let result = attributes.read(Path::new("/anywhere"));
        assert!(result.is_ok_and(|a| a == attributes));
    }
}
