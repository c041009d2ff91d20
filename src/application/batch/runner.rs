//! Batch runner

use std::sync::Arc;

use crate::domain::entities::{DeploymentOutcome, Inventory, TargetSpec};
use crate::domain::ports::{
    Delay, DeployEvent, DeployEventSink, DocumentRepository, NoopEventSink, SessionConnector,
};

use super::{BatchReport, BatchRequest};
use crate::application::deploy::{DeployOptions, DeployUseCase};

/// Runs the deploy use case once per selected target, in order
pub struct BatchRunner<C, D, R>
where
    C: SessionConnector,
    D: Delay,
    R: DocumentRepository,
{
    deploy: DeployUseCase<C, D>,
    documents: R,
    events: Arc<dyn DeployEventSink>,
}

impl<C, D, R> BatchRunner<C, D, R>
where
    C: SessionConnector,
    D: Delay,
    R: DocumentRepository,
{
    pub fn new(deploy: DeployUseCase<C, D>, documents: R) -> Self {
        Self {
            deploy,
            documents,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report batch-level events to `events`.
    ///
    /// Pass the same sink to the deploy use case to get step events too.
    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn run(&self, inventory: &Inventory, request: &BatchRequest) -> BatchReport {
        let options = DeployOptions::new().with_dry_run(request.dry_run);
        let mut report = BatchReport::default();

        // Unknown names are reported where they appear in the selection
        for entry in select(inventory, request.selection.as_deref()) {
            match entry {
                Selected::Target(target) => {
                    report.outcomes.push(self.run_target(target, &options));
                }
                Selected::Unknown(name) => {
                    tracing::warn!(target_name = %name, "not found in inventory");
                    self.events.on_event(DeployEvent::TargetSkipped {
                        target: name.clone(),
                        reason: format!("Switch '{}' not found in inventory", name),
                    });
                    report.skipped.push(name);
                }
            }
        }

        self.events.on_event(DeployEvent::BatchCompleted {
            succeeded: report.succeeded(),
            failed: report.failed(),
            skipped: report.skipped.len(),
        });
        report
    }

    fn run_target(&self, target: &TargetSpec, options: &DeployOptions) -> DeploymentOutcome {
        self.events.on_event(DeployEvent::TargetStarted {
            target: target.name.clone(),
            host: target.host.clone(),
            port: target.port,
        });

        let outcome = match self.documents.load(&target.config_file) {
            Ok(document) => self.deploy.execute(target, &document, options),
            Err(e) => {
                tracing::debug!(target_name = %target.name, error = %e, "document not loaded");
                self.events.on_event(DeployEvent::TargetError {
                    target: target.name.clone(),
                    message: e.to_string(),
                });
                DeploymentOutcome::failure(&target.name)
            }
        };

        self.events.on_event(DeployEvent::TargetFinished {
            outcome: outcome.clone(),
        });
        outcome
    }
}

/// One entry of the working set
enum Selected<'a> {
    Target(&'a TargetSpec),
    Unknown(String),
}

/// Resolve the working set in run order.
///
/// A name requested twice is handled once, at its first position.
fn select<'a>(inventory: &'a Inventory, selection: Option<&[String]>) -> Vec<Selected<'a>> {
    let Some(names) = selection else {
        return inventory.targets().iter().map(Selected::Target).collect();
    };

    let mut seen: Vec<&str> = Vec::new();
    let mut entries = Vec::new();
    for name in names {
        if seen.contains(&name.as_str()) {
            continue;
        }
        seen.push(name);
        entries.push(match inventory.get(name) {
            Some(target) => Selected::Target(target),
            None => Selected::Unknown(name.clone()),
        });
    }
    entries
}
