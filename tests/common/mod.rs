//! Common test utilities for evpn-deploy CLI tests.
//!
//! - `TestEnv`: isolated inventory and config directory in a temp dir
//! - Fixtures: reusable inventory and composite configuration content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
