//! Console Event Sink
//!
//! Human-readable progress for interactive runs.

use std::io::{self, Write};
use std::sync::Mutex;

use evpn_deploy::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{paint, Tone};
use crate::ui::views::deploy::{
    render_dry_run, render_step, render_target_error, render_target_header, render_verification,
    render_wait, render_warning,
};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stdout(ctx: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ctx)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, ctx: &UiContext) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color: ctx.color,
            unicode: ctx.unicode,
            verbose: ctx.verbose > 0,
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let (color, unicode) = (self.color, self.unicode);
        let text = match event {
            DeployEvent::TargetStarted { target, host, port } => {
                render_target_header(&target, &host, port, color, unicode)
            }
            DeployEvent::DryRun {
                host,
                config_file,
                sections,
                ..
            } => render_dry_run(&config_file, &host, &sections, color, unicode),
            DeployEvent::StepFinished { result, .. } => {
                // Delay steps already announced themselves
                if result.succeeded && result.step.is_delay() {
                    return;
                }
                render_step(&result, color, unicode)
            }
            DeployEvent::Warning { message, .. } => render_warning(&message, color, unicode),
            DeployEvent::Waiting { step, seconds, .. } => {
                render_wait(step, seconds, color, unicode)
            }
            DeployEvent::Verification {
                host, step, output, ..
            } => render_verification(step, &host, &output, color),
            DeployEvent::SessionClosed { host, .. } if self.verbose => {
                format!("{}\n", paint(&format!("Closed session to {host}"), Tone::Dim, color))
            }
            DeployEvent::TargetError { message, .. } => {
                render_target_error(&message, color, unicode)
            }
            DeployEvent::TargetSkipped { reason, .. } => {
                render_target_error(&reason, color, unicode)
            }
            // Rendered by the summary view
            DeployEvent::SessionClosed { .. }
            | DeployEvent::TargetFinished { .. }
            | DeployEvent::BatchCompleted { .. } => return,
        };
        self.write(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evpn_deploy::domain::value_objects::{Step, StepResult};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn plain(verbose: u8) -> UiContext {
        UiContext {
            json: false,
            verbose,
            color: false,
            unicode: false,
        }
    }

    fn run(events: Vec<DeployEvent>, verbose: u8) -> String {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), &plain(verbose));
        for event in events {
            sink.on_event(event);
        }
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn prints_step_lines() {
        let out = run(
            vec![
                DeployEvent::StepFinished {
                    target: "leaf1".to_string(),
                    result: StepResult::success(Step::Connect, "Connected to 10.0.0.1"),
                },
                DeployEvent::TargetError {
                    target: "leaf2".to_string(),
                    message: "configuration file not found: configs/leaf2.conf".to_string(),
                },
            ],
            0,
        );
        assert_eq!(
            out,
            "[OK] Connected to 10.0.0.1\n[FAIL] configuration file not found: configs/leaf2.conf\n"
        );
    }

    #[test]
    fn successful_delays_are_not_repeated() {
        let out = run(
            vec![
                DeployEvent::Waiting {
                    target: "leaf1".to_string(),
                    step: Step::SettleDelay,
                    seconds: 5,
                },
                DeployEvent::StepFinished {
                    target: "leaf1".to_string(),
                    result: StepResult::success(Step::SettleDelay, "Waited 5s"),
                },
            ],
            0,
        );
        assert_eq!(out, "[WAIT] Waiting 5s for network to settle...\n");
    }

    #[test]
    fn session_close_only_when_verbose() {
        let event = || DeployEvent::SessionClosed {
            target: "leaf1".to_string(),
            host: "10.0.0.1".to_string(),
        };
        assert_eq!(run(vec![event()], 0), "");
        assert_eq!(run(vec![event()], 1), "Closed session to 10.0.0.1\n");
    }
}
