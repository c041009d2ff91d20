//! Repository Implementations
//!
//! Concrete loaders for the inventory and the per-switch documents.

mod documents;
mod inventory;

pub use documents::FsDocumentRepository;
pub use inventory::{parse_inventory, YamlInventoryRepository};
