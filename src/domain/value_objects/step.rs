//! Deployment steps and failure severity
//!
//! The step table is the single place that decides how a failure affects
//! the target's verdict.

use serde::Serialize;

/// How a step failure affects the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Logged as a warning; the deployment continues
    Soft,
    /// Aborts the remaining steps and fails the target
    Hard,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Soft => write!(f, "soft"),
            Severity::Hard => write!(f, "hard"),
        }
    }
}

/// One step of a per-switch deployment, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Connect,
    Backup,
    SetHostname,
    DeployInterfaces,
    DeployRoutingDaemon,
    ReloadNetworking,
    SettleDelay,
    RestartRoutingDaemon,
    ConvergenceDelay,
    VerifyPeering,
    VerifyOverlay,
}

impl Step {
    /// All steps in execution order
    pub const SEQUENCE: [Step; 11] = [
        Step::Connect,
        Step::Backup,
        Step::SetHostname,
        Step::DeployInterfaces,
        Step::DeployRoutingDaemon,
        Step::ReloadNetworking,
        Step::SettleDelay,
        Step::RestartRoutingDaemon,
        Step::ConvergenceDelay,
        Step::VerifyPeering,
        Step::VerifyOverlay,
    ];

    pub fn severity(&self) -> Severity {
        match self {
            Step::Connect
            | Step::DeployInterfaces
            | Step::DeployRoutingDaemon
            | Step::ReloadNetworking
            | Step::RestartRoutingDaemon => Severity::Hard,
            // Delays cannot fail; they are listed as soft for completeness.
            Step::Backup
            | Step::SetHostname
            | Step::SettleDelay
            | Step::ConvergenceDelay
            | Step::VerifyPeering
            | Step::VerifyOverlay => Severity::Soft,
        }
    }

    /// The step that follows this one, or `None` after the last step
    pub fn next(&self) -> Option<Step> {
        let index = Self::SEQUENCE.iter().position(|s| s == self)?;
        Self::SEQUENCE.get(index + 1).copied()
    }

    /// 1-based position in the sequence
    pub fn number(&self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|s| s == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    pub fn is_delay(&self) -> bool {
        matches!(self, Step::SettleDelay | Step::ConvergenceDelay)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Connect => "open session",
            Step::Backup => "backup configuration",
            Step::SetHostname => "set hostname",
            Step::DeployInterfaces => "deploy interfaces configuration",
            Step::DeployRoutingDaemon => "deploy FRR configuration",
            Step::ReloadNetworking => "reload networking",
            Step::SettleDelay => "wait for network to settle",
            Step::RestartRoutingDaemon => "restart FRR",
            Step::ConvergenceDelay => "wait for BGP to converge",
            Step::VerifyPeering => "verify BGP summary",
            Step::VerifyOverlay => "verify EVPN summary",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one executed step.
///
/// Produced and consumed within a single deployment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub step: Step,
    pub severity: Severity,
    pub succeeded: bool,
    pub message: String,
}

impl StepResult {
    pub fn success(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            severity: step.severity(),
            succeeded: true,
            message: message.into(),
        }
    }

    pub fn failure(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            severity: step.severity(),
            succeeded: false,
            message: message.into(),
        }
    }

    /// True when this result must abort the deployment
    pub fn is_hard_failure(&self) -> bool {
        !self.succeeded && self.severity == Severity::Hard
    }
}
