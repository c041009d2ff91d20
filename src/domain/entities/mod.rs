//! Domain Entities
//!
//! The switches being deployed, their inputs, and their outcomes.

mod document;
mod inventory;
mod outcome;
mod target;

pub use document::CompositeDocument;
pub use inventory::Inventory;
pub use outcome::DeploymentOutcome;
pub use target::{Credentials, TargetSpec, DEFAULT_SSH_PORT};
