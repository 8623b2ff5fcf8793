//! JAR manifest parser
//!
//! Reads the `Name: value` line format used by `META-INF/MANIFEST.MF`:
//!
//! - a line starting with a single space continues the previous value
//! - a blank line ends a section; the first section holds the main attributes
//! - every later section must open with a `Name` attribute
//!
//! Line endings may be LF, CRLF or CR.

use crate::errors::ManifestError;
use crate::types::{Attributes, Manifest, Section};
use std::sync::Arc;
use tracing::debug;

/// Longest attribute name the JAR format allows
const MAX_NAME_LEN: usize = 70;

/// Attribute that opens a per-entry section
const SECTION_NAME_ATTRIBUTE: &str = "Name";

/// Parse manifest text into main attributes and per-entry sections
pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    let mut parser = Parser::default();
    for (idx, line) in normalized.split('\n').enumerate() {
        parser.feed(idx + 1, line)?;
    }
    parser.finish()
}

#[derive(Default)]
struct Parser {
    manifest: Manifest,
    in_main: bool,
    main_done: bool,
    current: Attributes,
    current_start: usize,
    section_name: Option<Arc<str>>,
    pending: Option<(String, String)>,
}

impl Parser {
    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), ManifestError> {
        if line.is_empty() {
            return self.end_section();
        }

        if let Some(continued) = line.strip_prefix(' ') {
            let Some((_, value)) = self.pending.as_mut() else {
                return Err(ManifestError::malformed(
                    line_no,
                    "continuation line without a preceding attribute",
                ));
            };
            value.push_str(continued);
            return Ok(());
        }

        self.flush_pending();

        let Some((name, value)) = line.split_once(':') else {
            return Err(ManifestError::malformed(line_no, "missing ':' separator"));
        };
        validate_name(line_no, name)?;

        if !self.main_done {
            self.in_main = true;
        }
        if self.current.is_empty() && self.section_name.is_none() {
            self.current_start = line_no;
        }

        let value = value.strip_prefix(' ').unwrap_or(value);
        self.pending = Some((name.to_string(), value.to_string()));
        Ok(())
    }

    fn flush_pending(&mut self) {
        let Some((name, value)) = self.pending.take() else {
            return;
        };

        let opens_section = self.main_done
            && self.current.is_empty()
            && self.section_name.is_none()
            && name == SECTION_NAME_ATTRIBUTE;
        if opens_section {
            self.section_name = Some(Arc::from(value));
            return;
        }

        if let Some(previous) = self.current.insert(name.as_str(), value) {
            debug!(
                "Duplicate manifest attribute '{}', replacing '{}'",
                name, previous
            );
        }
    }

    fn end_section(&mut self) -> Result<(), ManifestError> {
        self.flush_pending();

        if !self.main_done {
            if self.in_main {
                self.manifest.main = std::mem::take(&mut self.current);
                self.main_done = true;
            }
            return Ok(());
        }

        let attributes = std::mem::take(&mut self.current);
        match self.section_name.take() {
            Some(name) => self.manifest.sections.push(Section { name, attributes }),
            None if attributes.is_empty() => {}
            None => {
                return Err(ManifestError::malformed(
                    self.current_start,
                    "section does not start with a Name attribute",
                ))
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Manifest, ManifestError> {
        self.end_section()?;
        debug!(
            "Parsed manifest with {} main attributes and {} sections",
            self.manifest.main.len(),
            self.manifest.sections.len()
        );
        Ok(self.manifest)
    }
}

fn validate_name(line_no: usize, name: &str) -> Result<(), ManifestError> {
    if name.is_empty() {
        return Err(ManifestError::malformed(line_no, "empty attribute name"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ManifestError::malformed(
            line_no,
            format!("attribute name longer than {} characters", MAX_NAME_LEN),
        ));
    }
    if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(ManifestError::malformed(
            line_no,
            format!("attribute name '{}' must start with a letter or digit", name),
        ));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ManifestError::malformed(
            line_no,
            format!("invalid character {:?} in attribute name '{}'", c, name),
        ));
    }
    Ok(())
}
