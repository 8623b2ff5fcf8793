//! Manifest data types
//!
//! Attribute names and values are stored as `Arc<str>` so a parsed manifest
//! can be handed to several consumers without copying the text.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Flat attribute map of one manifest section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: AHashMap<Arc<str>, Arc<str>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the value it replaced
    pub fn insert(
        &mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
    ) -> Option<Arc<str>> {
        self.entries.insert(name.into(), value.into())
    }

    /// Look up an attribute by exact name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|value| value.as_ref())
    }

    /// Look up an attribute, substituting `default` when it is absent
    #[inline]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_ref()))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<Arc<str>>,
    V: Into<Arc<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// A named per-entry section following the main attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Value of the section's `Name` attribute
    pub name: Arc<str>,
    pub attributes: Attributes,
}

/// A parsed manifest: main attributes plus any per-entry sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub main: Attributes,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Manifest {
    /// Find a per-entry section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name.as_ref() == name)
    }
}
