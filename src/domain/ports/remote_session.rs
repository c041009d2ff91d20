//! Remote Session Port
//!
//! Abstracts the channel used to reach a switch: open a session, run
//! commands with a timeout, write files, close. The deploy use case only
//! talks to devices through these traits.

use std::time::Duration;
use thiserror::Error;

use crate::domain::entities::TargetSpec;

/// Failure of a session primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Could not establish or reuse the connection
    #[error("connection error: {0}")]
    Connection(String),

    /// The operation did not finish in time
    #[error("{operation} timed out after {}s", after.as_secs())]
    Timeout { operation: String, after: Duration },

    /// Writing a remote file failed
    #[error("transfer to {path} failed: {message}")]
    Transfer { path: String, message: String },

    /// The local helper process could not be started
    #[error("failed to start {program}: {message}")]
    Spawn { program: String, message: String },
}

/// Result of a remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(exit_status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_status == 0
    }
}

/// An open session with one switch
pub trait RemoteSession {
    /// Run `command` on the device, bounded by `timeout`
    fn run_command(&mut self, command: &str, timeout: Duration)
        -> Result<CommandOutput, SessionError>;

    /// Write `content` to `remote_path` on the device
    fn transfer_content(&mut self, content: &str, remote_path: &str) -> Result<(), SessionError>;

    /// Release the session. Idempotent and infallible.
    fn close(&mut self);
}

/// Opens sessions to switches
pub trait SessionConnector {
    type Session: RemoteSession;

    fn connect(&self, target: &TargetSpec, timeout: Duration)
        -> Result<Self::Session, SessionError>;
}
