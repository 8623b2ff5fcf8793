//! Manifest reading for packaged JVM applications
//!
//! This crate turns the `META-INF/MANIFEST.MF` file shipped inside an exploded
//! application into a flat attribute map. Consumers depend on the
//! [`ManifestSource`] capability rather than on the file layout, so tests and
//! orchestration code can supply attributes from anywhere.

pub mod errors;
pub mod parser;
pub mod source;
pub mod types;

pub use errors::ManifestError;
pub use parser::parse_manifest;
pub use source::{JarManifestSource, ManifestSource};
pub use types::{Attributes, Manifest, Section};
