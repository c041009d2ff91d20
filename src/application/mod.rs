//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Drives one switch through the step sequence
//! - `BatchRunner` - Runs `DeployUseCase` over the selected inventory

pub mod batch;
pub mod deploy;

pub use batch::{BatchReport, BatchRequest, BatchRunner};
pub use deploy::{DeployOptions, DeployUseCase, DeviceCommands, StepError};
