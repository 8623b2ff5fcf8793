//! Spring Boot application metadata
//!
//! Reads the manifest attributes of an exploded application through a
//! [`ManifestSource`] and decides whether the application is a Spring Boot
//! application. A manifest without `Spring-Boot-Version` is not an error; it
//! simply describes some other kind of application and extraction reports it
//! as not found.
//!
//! ```no_run
//! use bootmeta::{JarManifestSource, MetadataExtractor};
//!
//! let extractor = MetadataExtractor::new("/workspace");
//! match extractor.extract(&JarManifestSource::new()) {
//!     Ok(Some(metadata)) => println!("{}", metadata.identity()),
//!     Ok(None) => println!("not a Spring Boot application"),
//!     Err(err) => eprintln!("failed to read manifest: {err}"),
//! }
//! ```

pub mod errors;
pub mod extractor;
pub mod identity;
pub mod metadata;

pub use errors::MetadataError;
pub use extractor::{extract, MetadataExtractor};
pub use identity::{identity, Identity, KIND};
pub use metadata::Metadata;

// Re-export the manifest capability so callers need only this crate
pub use bootmeta_config::{MissingManifest, ReaderConfig};
pub use bootmeta_manifest::{Attributes, JarManifestSource, ManifestError, ManifestSource};
