//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::TargetStarted { target, host, port } => {
                serde_json::json!({
                    "event": "target_start",
                    "target": target,
                    "host": host,
                    "port": port,
                })
            }

            DeployEvent::DryRun {
                target,
                host,
                config_file,
                sections,
            } => {
                let sections: Vec<serde_json::Value> = sections
                    .into_iter()
                    .map(|(path, lines)| serde_json::json!({ "path": path, "lines": lines }))
                    .collect();
                serde_json::json!({
                    "event": "dry_run",
                    "target": target,
                    "host": host,
                    "config_file": config_file.display().to_string(),
                    "sections": sections,
                })
            }

            DeployEvent::StepFinished { target, result } => {
                let event = if result.succeeded {
                    "step_ok"
                } else {
                    "step_failed"
                };
                serde_json::json!({
                    "event": event,
                    "target": target,
                    "step": result.step,
                    "number": result.step.number(),
                    "severity": result.severity,
                    "message": result.message,
                })
            }

            DeployEvent::Warning {
                target,
                step,
                message,
            } => {
                serde_json::json!({
                    "event": "warning",
                    "target": target,
                    "step": step,
                    "message": message,
                })
            }

            DeployEvent::Waiting {
                target,
                step,
                seconds,
            } => {
                serde_json::json!({
                    "event": "wait",
                    "target": target,
                    "step": step,
                    "seconds": seconds,
                })
            }

            DeployEvent::Verification {
                target,
                host,
                step,
                output,
            } => {
                serde_json::json!({
                    "event": "verification",
                    "target": target,
                    "host": host,
                    "step": step,
                    "output": output,
                })
            }

            DeployEvent::SessionClosed { target, host } => {
                serde_json::json!({
                    "event": "session_closed",
                    "target": target,
                    "host": host,
                })
            }

            DeployEvent::TargetError { target, message } => {
                serde_json::json!({
                    "event": "target_error",
                    "target": target,
                    "error": message,
                })
            }

            DeployEvent::TargetFinished { outcome } => {
                let status = outcome.status_label();
                serde_json::json!({
                    "event": "target_done",
                    "target": outcome.target,
                    "status": status,
                })
            }

            DeployEvent::TargetSkipped { target, reason } => {
                serde_json::json!({
                    "event": "target_skipped",
                    "target": target,
                    "reason": reason,
                })
            }

            DeployEvent::BatchCompleted {
                succeeded,
                failed,
                skipped,
            } => {
                let status = if failed == 0 && skipped == 0 {
                    "success"
                } else {
                    "failed"
                };
                serde_json::json!({
                    "event": "summary",
                    "status": status,
                    "succeeded": succeeded,
                    "failed": failed,
                    "skipped": skipped,
                })
            }
        };

        self.write_event(json);
    }
}
