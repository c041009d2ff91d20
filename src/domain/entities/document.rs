//! Composite configuration document

use std::path::PathBuf;

use crate::domain::value_objects::{ConfigSection, SectionKind};

/// Raw per-switch configuration text holding marker-delimited sections.
///
/// Loaded once per target and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDocument {
    /// Where the document was read from (for diagnostics)
    pub path: PathBuf,
    pub content: String,
}

impl CompositeDocument {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Extract one section; re-scans the document on every call
    pub fn section(&self, kind: SectionKind) -> ConfigSection {
        ConfigSection::extract(&self.content, kind)
    }
}
