//! Terminal output
//!
//! - `console` - Progress event sink
//! - `views` - Pure render functions (progress lines, summary)
//! - `context` / `terminal` - Color and unicode decisions

pub mod console;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
