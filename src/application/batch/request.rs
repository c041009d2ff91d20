//! Batch request

/// What a batch should deploy
#[derive(Debug, Clone, Default)]
pub struct BatchRequest {
    /// Explicit target names, in run order. `None` means every inventory entry.
    pub selection: Option<Vec<String>>,
    pub dry_run: bool,
}

impl BatchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, names: Vec<String>) -> Self {
        self.selection = Some(names);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
