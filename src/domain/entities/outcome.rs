//! Per-target deployment verdict

/// The only per-target state a batch keeps.
///
/// Step-level detail goes to the event sink, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutcome {
    pub target: String,
    pub succeeded: bool,
}

impl DeploymentOutcome {
    pub fn success(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            succeeded: true,
        }
    }

    pub fn failure(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            succeeded: false,
        }
    }

    /// Summary label: `SUCCESS` or `FAILED`
    pub fn status_label(&self) -> &'static str {
        if self.succeeded {
            "SUCCESS"
        } else {
            "FAILED"
        }
    }
}
