//! Deploy Use Case
//!
//! Drives one switch through the deployment sequence:
//! 1. Open session
//! 2. Backup existing configuration
//! 3. Set hostname
//! 4. Deploy interfaces section
//! 5. Deploy FRR section
//! 6. Reload networking, then wait for the network to settle
//! 7. Restart FRR, then wait for BGP to converge
//! 8. Verify BGP and EVPN summaries
//!
//! Each step's failure is classified once, through `Step::severity`. Soft
//! failures are reported and the sequence continues; hard failures abort
//! it. The session is closed on every exit path.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::Settings;
use crate::domain::entities::{CompositeDocument, DeploymentOutcome, TargetSpec};
use crate::domain::ports::{
    CommandOutput, Delay, DeployEvent, DeployEventSink, NoopEventSink, RemoteSession,
    SessionConnector, SessionError,
};
use crate::domain::value_objects::{SectionKind, Step, StepResult};

use super::commands::DeviceCommands;
use super::options::DeployOptions;

/// Why a step failed
#[derive(Error, Debug)]
pub enum StepError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("no {section} configuration found in {file}")]
    SectionMissing { section: SectionKind, file: String },

    #[error("{failed} of {total} backup copies failed")]
    Backup { failed: usize, total: usize },
}

impl StepError {
    fn command_failed(command: &str, output: &CommandOutput) -> Self {
        let stderr = output.stderr.trim();
        StepError::CommandFailed {
            command: command.to_string(),
            status: output.exit_status,
            stderr: if stderr.is_empty() {
                "(no output)".to_string()
            } else {
                stderr.to_string()
            },
        }
    }
}

/// Position in the per-target state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeployState {
    Running(Step),
    Done,
    Failed,
}

/// Closes the session when dropped, whichever way the run ends
struct SessionGuard<S: RemoteSession> {
    session: S,
    target: String,
    host: String,
    events: Arc<dyn DeployEventSink>,
}

impl<S: RemoteSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.session.close();
        tracing::debug!(target_name = %self.target, "session closed");
        self.events.on_event(DeployEvent::SessionClosed {
            target: self.target.clone(),
            host: self.host.clone(),
        });
    }
}

/// Deploy use case - orchestrates the deployment of one switch
///
/// Parameterized by its ports so the whole sequence runs against mocks.
pub struct DeployUseCase<C, D>
where
    C: SessionConnector,
    D: Delay,
{
    connector: C,
    delay: D,
    settings: Settings,
    commands: DeviceCommands,
    events: Arc<dyn DeployEventSink>,
    backup_timestamp: Option<String>,
}

impl<C, D> DeployUseCase<C, D>
where
    C: SessionConnector,
    D: Delay,
{
    pub fn new(connector: C, delay: D, settings: Settings) -> Self {
        let commands = DeviceCommands::new(settings.device.clone());
        Self {
            connector,
            delay,
            settings,
            commands,
            events: Arc::new(NoopEventSink),
            backup_timestamp: None,
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Use a fixed backup suffix instead of the current local time
    pub fn with_backup_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.backup_timestamp = Some(timestamp.into());
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Deploy `document` to `target` and return the verdict.
    ///
    /// Never fails: every problem is reported through the event sink and
    /// folded into the outcome.
    pub fn execute(
        &self,
        target: &TargetSpec,
        document: &CompositeDocument,
        options: &DeployOptions,
    ) -> DeploymentOutcome {
        if options.dry_run {
            self.dry_run(target, document);
            return DeploymentOutcome::success(&target.name);
        }

        // Step 1: Open session (hard), classified like every other step
        let connected = self
            .connector
            .connect(target, self.settings.timeouts.connect());
        let (session, opened) = match connected {
            Ok(session) => (Some(session), Ok(format!("Connected to {}", target.host))),
            Err(e) => {
                tracing::debug!(target_name = %target.name, error = %e, "connect failed");
                (None, Err(StepError::from(e)))
            }
        };
        self.report(target, self.classify(Step::Connect, opened));
        let Some(session) = session else {
            return DeploymentOutcome::failure(&target.name);
        };

        let mut guard = SessionGuard {
            session,
            target: target.name.clone(),
            host: target.host.clone(),
            events: Arc::clone(&self.events),
        };

        let succeeded = self.run_sequence(&mut guard.session, target, document);
        drop(guard);

        if succeeded {
            DeploymentOutcome::success(&target.name)
        } else {
            DeploymentOutcome::failure(&target.name)
        }
    }

    /// Steps after `Step::Connect`, over an open session
    fn run_sequence(
        &self,
        session: &mut C::Session,
        target: &TargetSpec,
        document: &CompositeDocument,
    ) -> bool {
        let mut state = Step::Connect
            .next()
            .map(DeployState::Running)
            .unwrap_or(DeployState::Done);

        loop {
            state = match state {
                DeployState::Running(step) => {
                    let result = self.classify(step, self.run_step(step, session, target, document));
                    let abort = result.is_hard_failure();
                    self.report(target, result);

                    if abort {
                        DeployState::Failed
                    } else {
                        step.next()
                            .map(DeployState::Running)
                            .unwrap_or(DeployState::Done)
                    }
                }
                DeployState::Done => return true,
                DeployState::Failed => return false,
            };
        }
    }

    /// The single classification point: step outcome -> `StepResult`
    fn classify(&self, step: Step, outcome: Result<String, StepError>) -> StepResult {
        match outcome {
            Ok(message) => StepResult::success(step, message),
            Err(e) => StepResult::failure(step, e.to_string()),
        }
    }

    fn run_step(
        &self,
        step: Step,
        session: &mut C::Session,
        target: &TargetSpec,
        document: &CompositeDocument,
    ) -> Result<String, StepError> {
        let timeouts = &self.settings.timeouts;

        match step {
            Step::Connect => unreachable!("the session is opened before the sequence starts"),
            Step::Backup => self.backup(session, target),
            Step::SetHostname => {
                let command = self.commands.set_hostname(&target.name);
                self.run_checked(session, &command, timeouts.command())?;
                Ok(format!("Set hostname to {}", target.name))
            }
            Step::DeployInterfaces => {
                self.deploy_section(session, target, document, SectionKind::Interfaces)
            }
            Step::DeployRoutingDaemon => {
                self.deploy_section(session, target, document, SectionKind::RoutingDaemon)
            }
            Step::ReloadNetworking => {
                let command = self.commands.reload_networking();
                self.run_checked(session, &command, timeouts.reload())?;
                Ok(format!("Reloaded networking on {}", target.host))
            }
            Step::SettleDelay => Ok(self.wait(target, step, self.settings.delays.settle_secs)),
            Step::RestartRoutingDaemon => {
                let command = self.commands.restart_routing_daemon();
                self.run_checked(session, &command, timeouts.restart())?;
                Ok(format!("Restarted FRR on {}", target.host))
            }
            Step::ConvergenceDelay => {
                Ok(self.wait(target, step, self.settings.delays.convergence_secs))
            }
            Step::VerifyPeering => {
                let command = self.commands.verify_peering();
                self.verify(session, target, step, &command, "BGP Summary")
            }
            Step::VerifyOverlay => {
                let command = self.commands.verify_overlay();
                self.verify(session, target, step, &command, "EVPN Summary")
            }
        }
    }

    fn backup(&self, session: &mut C::Session, target: &TargetSpec) -> Result<String, StepError> {
        let timestamp = self
            .backup_timestamp
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y%m%d-%H%M%S").to_string());

        let commands = self.commands.backups(&timestamp);
        let total = commands.len();
        let mut failed = 0;

        for command in &commands {
            match self.run_checked(session, command, self.settings.timeouts.command()) {
                Ok(_) => {}
                Err(StepError::Session(e)) => return Err(StepError::Session(e)),
                Err(e) => {
                    failed += 1;
                    self.events.on_event(DeployEvent::Warning {
                        target: target.name.clone(),
                        step: Step::Backup,
                        message: format!("Backup command failed: {}", e),
                    });
                }
            }
        }

        if failed > 0 {
            return Err(StepError::Backup { failed, total });
        }
        Ok(format!("Configuration backed up on {}", target.host))
    }

    fn deploy_section(
        &self,
        session: &mut C::Session,
        target: &TargetSpec,
        document: &CompositeDocument,
        kind: SectionKind,
    ) -> Result<String, StepError> {
        let section = document.section(kind);
        if section.is_empty() {
            return Err(StepError::SectionMissing {
                section: kind,
                file: document.path.display().to_string(),
            });
        }

        let staging = self
            .commands
            .staging_path(kind, chrono::Utc::now().timestamp_millis());
        tracing::debug!(
            target_name = %target.name,
            section = %kind,
            lines = section.line_count(),
            staging = %staging,
            "transferring section"
        );
        session.transfer_content(&section.file_content(), &staging)?;

        let command = self.commands.install(&staging, kind);
        self.run_checked(session, &command, self.settings.timeouts.command())?;

        Ok(format!(
            "Deployed {} configuration to {} ({} lines)",
            kind,
            target.host,
            section.line_count()
        ))
    }

    fn verify(
        &self,
        session: &mut C::Session,
        target: &TargetSpec,
        step: Step,
        command: &str,
        label: &str,
    ) -> Result<String, StepError> {
        let output = self.run_checked(session, command, self.settings.timeouts.verify())?;
        self.events.on_event(DeployEvent::Verification {
            target: target.name.clone(),
            host: target.host.clone(),
            step,
            output: output.stdout,
        });
        Ok(format!("{} collected from {}", label, target.host))
    }

    fn wait(&self, target: &TargetSpec, step: Step, seconds: u64) -> String {
        self.events.on_event(DeployEvent::Waiting {
            target: target.name.clone(),
            step,
            seconds,
        });
        self.delay.wait(Duration::from_secs(seconds));
        format!("Waited {}s", seconds)
    }

    /// Run a command; a non-zero exit status is a failure
    fn run_checked(
        &self,
        session: &mut C::Session,
        command: &str,
        timeout: Duration,
    ) -> Result<CommandOutput, StepError> {
        tracing::debug!(command, timeout_secs = timeout.as_secs(), "running remote command");
        let output = session.run_command(command, timeout)?;
        tracing::debug!(
            command,
            exit_status = output.exit_status,
            stderr = %output.stderr.trim(),
            "remote command finished"
        );

        if output.success() {
            Ok(output)
        } else {
            Err(StepError::command_failed(command, &output))
        }
    }

    fn dry_run(&self, target: &TargetSpec, document: &CompositeDocument) {
        let mut sections = Vec::new();
        for kind in SectionKind::ALL {
            let section = document.section(kind);
            if section.is_empty() {
                let step = match kind {
                    SectionKind::Interfaces => Step::DeployInterfaces,
                    SectionKind::RoutingDaemon => Step::DeployRoutingDaemon,
                };
                self.events.on_event(DeployEvent::Warning {
                    target: target.name.clone(),
                    step,
                    message: format!("No {} configuration found", kind),
                });
            }
            sections.push((self.commands.destination(kind).to_string(), section.line_count()));
        }

        tracing::debug!(target_name = %target.name, "dry run, no session opened");
        self.events.on_event(DeployEvent::DryRun {
            target: target.name.clone(),
            host: target.host.clone(),
            config_file: document.path.clone(),
            sections,
        });
    }

    fn report(&self, target: &TargetSpec, result: StepResult) {
        if result.succeeded {
            tracing::debug!(target_name = %target.name, step = %result.step, "step succeeded");
        } else {
            tracing::debug!(
                target_name = %target.name,
                step = %result.step,
                severity = %result.severity,
                message = %result.message,
                "step failed"
            );
        }
        self.events.on_event(DeployEvent::StepFinished {
            target: target.name.clone(),
            result,
        });
    }
}
