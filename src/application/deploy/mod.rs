//! Deploy Module
//!
//! Orchestrates the deployment of one switch.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `commands` - Device command lines (`DeviceCommands`)
//! - `use_case` - The step state machine (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use evpn_deploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(connector, delay, settings);
//! let outcome = use_case.execute(&target, &document, &DeployOptions::new());
//! ```

mod commands;
mod options;
mod use_case;

pub use commands::DeviceCommands;
pub use options::DeployOptions;
pub use use_case::{DeployUseCase, StepError};
