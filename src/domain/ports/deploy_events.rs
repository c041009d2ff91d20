//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console progress, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::DeploymentOutcome;
use crate::domain::value_objects::{Step, StepResult};

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deployment to a target started
    TargetStarted {
        target: String,
        host: String,
        port: u16,
    },

    /// Dry run: what would have been deployed
    DryRun {
        target: String,
        host: String,
        config_file: PathBuf,
        sections: Vec<(String, usize)>,
    },

    /// A step finished (successfully or not)
    StepFinished { target: String, result: StepResult },

    /// Non-fatal problem inside a step
    Warning {
        target: String,
        step: Step,
        message: String,
    },

    /// Fixed wait started
    Waiting {
        target: String,
        step: Step,
        seconds: u64,
    },

    /// Output of a verification query
    Verification {
        target: String,
        host: String,
        step: Step,
        output: String,
    },

    /// Session released
    SessionClosed { target: String, host: String },

    /// Target could not be deployed before any step ran
    TargetError { target: String, message: String },

    /// Target finished with a verdict
    TargetFinished { outcome: DeploymentOutcome },

    /// Requested target could not be attempted
    TargetSkipped { target: String, reason: String },

    /// Batch completed
    BatchCompleted {
        succeeded: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
