//! Testspec parsing.
//!
//! A testspec is a text file with one `<name>:<description>` entry per
//! line. Blank lines and lines starting with `#` are ignored, and only the
//! first colon separates the name from the description.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::assets::AssetLocator;
use crate::error::{IoError, LineError, Result, SpecError};

const COMMENT_MARKER: char = '#';
const DELIMITER: char = ':';

/// Test names mapped to their descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRegistry {
    tests: HashMap<String, String>,
}

/// One registry entry, as emitted by `list --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts of the same name replace earlier ones.
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.tests.insert(name.into(), description.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tests.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tests.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Entries ordered by test name.
    pub fn entries(&self) -> Vec<TestEntry<'_>> {
        let mut entries: Vec<TestEntry<'_>> = self
            .tests
            .iter()
            .map(|(name, description)| TestEntry { name, description })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(b.name));
        entries
    }
}

/// Split one trimmed, non-comment line into name and description.
fn parse_line(line_no: usize, line: &str) -> std::result::Result<(&str, &str), LineError> {
    line.split_once(DELIMITER)
        .ok_or_else(|| LineError::MissingDelimiter {
            line: line_no,
            text: line.to_string(),
        })
}

/// Parse testspec `text`. `source` names the resource in errors.
pub fn parse_testspec(text: &str, source: &Path) -> std::result::Result<TestRegistry, SpecError> {
    let mut registry = TestRegistry::new();

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let (name, description) =
            parse_line(idx + 1, line).map_err(|e| SpecError::malformed(source, e))?;

        if registry.contains(name) {
            debug!(test = name, line = idx + 1, "duplicate test name, keeping last");
        }
        registry.insert(name, description);
    }

    Ok(registry)
}

/// Read the testspec stored under asset `name`.
pub fn read_testspec<L: AssetLocator + ?Sized>(locator: &L, name: &str) -> Result<TestRegistry> {
    let path = locator.locate(name)?;
    let text = std::fs::read_to_string(&path).map_err(|e| IoError::read_error(&path, e))?;

    let registry = parse_testspec(&text, &path)?;
    info!(
        path = %path.display(),
        tests = registry.len(),
        "loaded testspec"
    );
    Ok(registry)
}
