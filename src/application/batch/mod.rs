//! Batch Module
//!
//! Runs the deploy use case over the selected inventory entries and
//! collects one verdict per target.
//!
//! ## Structure
//!
//! - `request` - Which targets to run and how (`BatchRequest`)
//! - `report` - Collected verdicts and the exit code (`BatchReport`)
//! - `runner` - The loop itself (`BatchRunner`)

mod report;
mod request;
mod runner;

pub use report::BatchReport;
pub use request::BatchRequest;
pub use runner::BatchRunner;
