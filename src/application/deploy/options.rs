//! Deploy Options
//!
//! Configuration types for deploy operations.

/// Options for the deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Dry run (never open a session)
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
