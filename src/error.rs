//! Error types for evpn-deploy
//!
//! Uses `thiserror` for library errors. Per-step failures are classified by
//! the deploy use case and never leave it as errors; a document that cannot
//! be loaded fails only its own target.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for evpn-deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for loading inputs and running a batch
#[derive(Error, Debug)]
pub enum DeployError {
    /// Inventory file missing, unreadable or malformed
    #[error("failed to load inventory {path}: {message}")]
    InventoryLoad { path: PathBuf, message: String },

    /// One inventory entry failed validation
    #[error("invalid inventory entry '{name}': {message}")]
    InvalidTarget { name: String, message: String },

    /// Configuration directory does not exist
    #[error("configuration directory not found: {path}")]
    ConfigDirNotFound { path: PathBuf },

    /// Per-target composite configuration file does not exist
    #[error("configuration file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    /// Settings file could not be parsed
    #[error("invalid settings in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
