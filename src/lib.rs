//! evpn-deploy - EVPN switch configuration deployment
//!
//! Splits per-switch composite configuration files into their interfaces
//! and FRR sections and pushes them to Cumulus Linux switches over SSH,
//! one switch at a time, with a per-switch verdict and a batch summary.
//!
//! ## Layers
//!
//! - `domain` - Entities, value objects, the section extractor and ports
//! - `application` - `DeployUseCase` (one switch) and `BatchRunner`
//! - `infrastructure` - YAML inventory, config documents, OpenSSH, NDJSON events
//! - `presentation` - CLI definition and logging setup

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BatchReport, BatchRequest, BatchRunner, DeployOptions, DeployUseCase};
pub use config::Settings;
pub use domain::services::extract_section;
pub use error::{DeployError, DeployResult};
pub use infrastructure::parse_inventory;
