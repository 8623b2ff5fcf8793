//! Configuration for reading application manifests
//!
//! Holds the settings a manifest source needs to locate the manifest inside an
//! application root, plus the path helpers that apply them.

pub mod errors;
pub mod paths;
pub mod settings;

pub use errors::ConfigError;
pub use paths::{resolve_manifest_path, DEFAULT_MANIFEST_PATH, META_INF_DIR};
pub use settings::{MissingManifest, ReaderConfig};
