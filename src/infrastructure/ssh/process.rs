//! Child processes with a deadline

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::ports::{CommandOutput, SessionError};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Spawn `command`, feed it `input`, and collect its output.
///
/// The child is killed once `timeout` elapses and the call fails with
/// `SessionError::Timeout` naming `operation`.
pub(crate) fn run_with_timeout(
    command: &mut Command,
    input: Option<&str>,
    timeout: Duration,
    operation: &str,
) -> Result<CommandOutput, SessionError> {
    let spawned = command
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();
    let mut child = spawned.map_err(|e| spawn_error(command, e))?;

    // Writers and readers run on their own threads so a full pipe never
    // blocks the deadline check.
    let writer = match (input, child.stdin.take()) {
        (Some(input), Some(mut stdin)) => {
            let input = input.to_string();
            Some(thread::spawn(move || {
                let _ = stdin.write_all(input.as_bytes());
            }))
        }
        _ => None,
    };
    let stdout = child.stdout.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });
    let stderr = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    let status = wait_with_deadline(&mut child, timeout).ok_or_else(|| SessionError::Timeout {
        operation: operation.to_string(),
        after: timeout,
    })?;

    if let Some(writer) = writer {
        let _ = writer.join();
    }
    let collect = |handle: Option<thread::JoinHandle<Vec<u8>>>| {
        handle
            .and_then(|h| h.join().ok())
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    };

    Ok(CommandOutput::new(
        status.code().unwrap_or(-1),
        collect(stdout),
        collect(stderr),
    ))
}

/// Wait for `child` until `timeout`; on expiry kill it and return `None`.
///
/// A timeout too large to add to the current instant means no deadline.
pub(crate) fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now().checked_add(timeout);
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) if deadline.map_or(true, |d| Instant::now() < d) => {
                thread::sleep(POLL_INTERVAL)
            }
            Ok(None) | Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        }
    }
}

pub(crate) fn spawn_error(command: &Command, err: std::io::Error) -> SessionError {
    SessionError::Spawn {
        program: command.get_program().to_string_lossy().into_owned(),
        message: err.to_string(),
    }
}
