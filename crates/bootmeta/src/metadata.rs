//! The Spring Boot metadata record
//!
//! Each field is copied from one manifest attribute, with the empty string
//! standing in for an absent attribute. Serialized form uses the kebab-case
//! keys stored in build layer metadata.

use crate::errors::MetadataError;
use crate::identity::Identity;
use bootmeta_manifest::Attributes;
use serde::{Deserialize, Serialize};

/// Manifest attribute holding the application classes directory
pub const CLASSES_KEY: &str = "Spring-Boot-Classes";
/// Manifest attribute holding the layers index location
pub const LAYERS_INDEX_KEY: &str = "Spring-Boot-Layers-Index";
/// Manifest attribute holding the dependency library directory
pub const LIB_KEY: &str = "Spring-Boot-Lib";
/// Manifest attribute holding the entry point type
pub const MAIN_CLASS_KEY: &str = "Main-Class";
/// Manifest attribute holding the Spring Boot version
pub const VERSION_KEY: &str = "Spring-Boot-Version";

/// Metadata describing a Spring Boot application
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Metadata {
    classes: String,
    layers_index: String,
    lib: String,
    main_class: String,
    version: String,
}

impl Metadata {
    /// Map manifest attributes onto the record, one field per attribute.
    ///
    /// No field depends on another; an absent attribute becomes `""`.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        Metadata {
            classes: attributes.get_or(CLASSES_KEY, "").to_string(),
            layers_index: attributes.get_or(LAYERS_INDEX_KEY, "").to_string(),
            lib: attributes.get_or(LIB_KEY, "").to_string(),
            main_class: attributes.get_or(MAIN_CLASS_KEY, "").to_string(),
            version: attributes.get_or(VERSION_KEY, "").to_string(),
        }
    }

    /// `Spring-Boot-Classes`, e.g. `BOOT-INF/classes/`
    pub fn classes(&self) -> &str {
        &self.classes
    }

    /// `Spring-Boot-Layers-Index`, e.g. `BOOT-INF/layers.idx`
    pub fn layers_index(&self) -> &str {
        &self.layers_index
    }

    /// `Spring-Boot-Lib`, e.g. `BOOT-INF/lib/`
    pub fn lib(&self) -> &str {
        &self.lib
    }

    pub fn main_class(&self) -> &str {
        &self.main_class
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the record describes a Spring Boot application at all
    pub fn is_spring_boot(&self) -> bool {
        !self.version.is_empty()
    }

    pub fn identity(&self) -> Identity<'_> {
        Identity::new(&self.version)
    }

    /// Render as a layer metadata TOML table
    pub fn to_toml(&self) -> Result<String, MetadataError> {
        Ok(toml::to_string(self)?)
    }

    /// Read back metadata stored by [`Metadata::to_toml`]; missing keys become `""`.
    pub fn from_toml(content: &str) -> Result<Self, MetadataError> {
        Ok(toml::from_str(content)?)
    }
}
