//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Diagnostic logging setup (via tracing-subscriber)
//!
//! ## Structure
//!
//! - `cli` - The `Cli` definition
//! - `logging` - Subscriber initialization

pub mod cli;
pub mod logging;

pub use cli::{Cli, ColorWhen};
