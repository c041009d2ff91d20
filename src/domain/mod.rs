//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (TargetSpec, DeploymentOutcome)
//! - `value_objects/` - Immutable value types (Step, Severity, ConfigSection)
//! - `services/` - Domain services (section extraction)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All device interaction goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
