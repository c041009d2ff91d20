//! Batch report

use crate::domain::entities::DeploymentOutcome;

/// Verdicts for one batch, in run order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<DeploymentOutcome>,
    /// Requested names that are not in the inventory
    pub skipped: Vec<String>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.succeeded)
    }

    /// 0 when every outcome succeeded and every requested name was found
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() && self.skipped.is_empty() {
            0
        } else {
            1
        }
    }
}
