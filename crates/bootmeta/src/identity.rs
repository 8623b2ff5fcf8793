//! Application identity: which kind of application, which version.

use crate::metadata::Metadata;
use std::fmt;

/// Kind label reported for every Spring Boot application
pub const KIND: &str = "Spring Boot";

/// Read-only `(kind, version)` projection of [`Metadata`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity<'a> {
    version: &'a str,
}

impl<'a> Identity<'a> {
    pub(crate) fn new(version: &'a str) -> Self {
        Identity { version }
    }

    pub fn kind(&self) -> &'static str {
        KIND
    }

    pub fn version(&self) -> &'a str {
        self.version
    }

    pub fn as_tuple(&self) -> (&'static str, &'a str) {
        (KIND, self.version)
    }
}

impl fmt::Display for Identity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", KIND, self.version)
    }
}

/// Return the kind label and version of `metadata`
pub fn identity(metadata: &Metadata) -> (&'static str, &str) {
    metadata.identity().as_tuple()
}
