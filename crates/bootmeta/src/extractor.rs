//! Metadata extraction
//!
//! Extraction reads the manifest once, maps the attributes onto [`Metadata`]
//! and uses `Spring-Boot-Version` alone to decide whether the application is
//! a Spring Boot application. The three outcomes are:
//!
//! - `Ok(Some(metadata))` for a Spring Boot application
//! - `Ok(None)` when the manifest has no (or an empty) `Spring-Boot-Version`
//! - `Err(_)` when the source could not read or parse the manifest

use crate::metadata::Metadata;
use bootmeta_manifest::{ManifestError, ManifestSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extracts Spring Boot metadata for one application root
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    application_root: PathBuf,
}

impl MetadataExtractor {
    pub fn new(application_root: impl Into<PathBuf>) -> Self {
        MetadataExtractor {
            application_root: application_root.into(),
        }
    }

    pub fn application_root(&self) -> &Path {
        &self.application_root
    }

    /// Read the manifest through `source` and build the metadata record.
    ///
    /// Source errors are returned unchanged.
    pub fn extract<S>(&self, source: &S) -> Result<Option<Metadata>, ManifestError>
    where
        S: ManifestSource + ?Sized,
    {
        let attributes = source.read(&self.application_root)?;
        let metadata = Metadata::from_attributes(&attributes);

        if !metadata.is_spring_boot() {
            debug!(
                "No Spring-Boot-Version in manifest for {:?}",
                self.application_root
            );
            return Ok(None);
        }

        debug!(
            "Found {} in {:?}",
            metadata.identity(),
            self.application_root
        );
        Ok(Some(metadata))
    }
}

/// Extract metadata for `application_root` from `source`
pub fn extract<S>(source: &S, application_root: &Path) -> Result<Option<Metadata>, ManifestError>
where
    S: ManifestSource + ?Sized,
{
    MetadataExtractor::new(application_root).extract(source)
}
