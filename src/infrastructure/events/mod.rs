//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink lives in `ui`, next to the rest of the terminal output

mod json;

pub use json::JsonEventSink;
