//! Domain Value Objects
//!
//! Immutable value types that represent deployment concepts.

mod section;
mod step;

pub use section::{ConfigSection, SectionKind, COMMENT_PREFIX};
pub use step::{Severity, Step, StepResult};
