//! Domain Services
//!
//! Pure business logic operating on configuration text.
//! These services have no I/O dependencies and are easily testable.

mod section_extractor;
mod shell;

pub use section_extractor::extract_section;
pub use shell::shell_quote;
