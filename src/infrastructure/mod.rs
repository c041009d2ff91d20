//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Inventory and configuration document loading
//! - `ssh/` - OpenSSH-backed remote sessions
//! - `events/` - NDJSON event sink
//! - `delay` - Thread-sleep delay

pub mod delay;
pub mod events;
pub mod repositories;
pub mod ssh;

// Re-export for convenience
pub use delay::ThreadDelay;
pub use events::JsonEventSink;
pub use repositories::{parse_inventory, FsDocumentRepository, YamlInventoryRepository};
pub use ssh::{SshConnector, SshSession};
