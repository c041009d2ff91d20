//! File System Document Repository
//!
//! Reads per-switch composite configuration files from the config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::CompositeDocument;
use crate::domain::ports::DocumentRepository;
use crate::error::{DeployError, DeployResult};

/// Document repository rooted at a configuration directory
#[derive(Debug, Clone)]
pub struct FsDocumentRepository {
    config_dir: PathBuf,
}

impl FsDocumentRepository {
    /// Fails with `ConfigDirNotFound` when `config_dir` is not a directory
    pub fn new(config_dir: impl Into<PathBuf>) -> DeployResult<Self> {
        let config_dir = config_dir.into();
        if !config_dir.is_dir() {
            return Err(DeployError::ConfigDirNotFound { path: config_dir });
        }
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

impl DocumentRepository for FsDocumentRepository {
    fn load(&self, config_file: &Path) -> DeployResult<CompositeDocument> {
        let path = self.config_dir.join(config_file);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(CompositeDocument::new(path, content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DeployError::ConfigFileNotFound { path })
            }
            Err(e) => Err(DeployError::Io(e)),
        }
    }
}
