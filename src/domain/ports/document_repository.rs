//! Document Repository Port
//!
//! Loads per-switch composite configuration documents.

use std::path::Path;

use crate::domain::entities::CompositeDocument;
use crate::error::DeployResult;

/// Source of composite configuration documents
pub trait DocumentRepository {
    /// Load the document referenced by an inventory entry.
    ///
    /// A missing file is `DeployError::ConfigFileNotFound`.
    fn load(&self, config_file: &Path) -> DeployResult<CompositeDocument>;
}
