//! OpenSSH session adapter
//!
//! Drives the system `ssh` client. `connect` starts a ControlMaster in the
//! background; every command and transfer then reuses that master through
//! its socket, so authentication happens once per switch.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;

use crate::config::{Settings, SshSettings};
use crate::domain::entities::TargetSpec;
use crate::domain::ports::{CommandOutput, RemoteSession, SessionConnector, SessionError};
use crate::domain::services::shell_quote;

use super::process::{run_with_timeout, spawn_error, wait_with_deadline};

const CLOSE_TIMEOUT: Duration = Duration::from_secs(5);
const PASSWORD_ENV: &str = "SSHPASS";

/// Opens OpenSSH sessions
#[derive(Debug, Clone)]
pub struct SshConnector {
    ssh: SshSettings,
    transfer_timeout: Duration,
}

impl SshConnector {
    pub fn new(ssh: SshSettings, transfer_timeout: Duration) -> Self {
        Self {
            ssh,
            transfer_timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ssh.clone(), settings.timeouts.command())
    }

    /// Command that starts the master connection and backgrounds it once
    /// authenticated
    fn master_command(&self, target: &TargetSpec, socket: &Path, timeout: Duration) -> Command {
        let mut command = match &target.credentials.password {
            Some(password) => {
                let mut helper = Command::new(&self.ssh.password_helper);
                helper
                    .arg("-e")
                    .arg(&self.ssh.program)
                    .env(PASSWORD_ENV, password);
                helper
            }
            None => {
                let mut ssh = Command::new(&self.ssh.program);
                ssh.args(["-o", "BatchMode=yes"]);
                ssh
            }
        };

        command
            .args(["-M", "-N", "-f", "-S"])
            .arg(socket)
            .args(["-o", "ControlPersist=yes"])
            .arg("-o")
            .arg(format!("ConnectTimeout={}", timeout.as_secs().max(1)))
            .arg("-o")
            .arg(format!(
                "StrictHostKeyChecking={}",
                self.ssh.host_key_checking.as_ssh_option()
            ))
            .args(["-o", "NumberOfPasswordPrompts=1"])
            .args(endpoint_args(target));
        command
    }
}

impl SessionConnector for SshConnector {
    type Session = SshSession;

    fn connect(&self, target: &TargetSpec, timeout: Duration) -> Result<SshSession, SessionError> {
        let control_dir = tempfile::Builder::new()
            .prefix("evpn-deploy-")
            .tempdir()
            .map_err(|e| SessionError::Connection(format!("cannot create control directory: {e}")))?;
        let socket = control_dir.path().join("master.sock");
        let log_path = control_dir.path().join("master.log");

        // The backgrounded master inherits stdout/stderr, so they go to a
        // file rather than a pipe nobody would close.
        let log = File::create(&log_path)
            .map_err(|e| SessionError::Connection(format!("cannot create log file: {e}")))?;
        let mut command = self.master_command(target, &socket, timeout);
        tracing::debug!(
            host = %target.host,
            port = target.port,
            user = %target.credentials.username,
            password = target.credentials.uses_password(),
            "starting ssh master"
        );

        let spawned = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(log)
            .spawn();
        let mut child = spawned.map_err(|e| spawn_error(&command, e))?;

        let status = wait_with_deadline(&mut child, timeout).ok_or_else(|| SessionError::Timeout {
            operation: format!("connect to {}", target.host),
            after: timeout,
        })?;

        if !status.success() {
            let detail = fs::read_to_string(&log_path).unwrap_or_default();
            let detail = detail.trim();
            return Err(SessionError::Connection(if detail.is_empty() {
                format!(
                    "ssh to {} exited with status {}",
                    target.destination(),
                    status.code().unwrap_or(-1)
                )
            } else {
                detail.to_string()
            }));
        }

        Ok(SshSession {
            program: self.ssh.program.clone(),
            endpoint: endpoint_args(target),
            socket,
            transfer_timeout: self.transfer_timeout,
            closed: false,
            _control_dir: control_dir,
        })
    }
}

/// Session multiplexed over a ControlMaster socket
pub struct SshSession {
    program: String,
    endpoint: Vec<OsString>,
    socket: PathBuf,
    transfer_timeout: Duration,
    closed: bool,
    /// Removed (with the socket) when the session is dropped
    _control_dir: TempDir,
}

impl SshSession {
    fn client(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-S")
            .arg(&self.socket)
            .args(["-o", "BatchMode=yes"])
            .args(&self.endpoint);
        command
    }
}

impl RemoteSession for SshSession {
    fn run_command(
        &mut self,
        command: &str,
        timeout: Duration,
    ) -> Result<CommandOutput, SessionError> {
        if self.closed {
            return Err(SessionError::Connection("session is closed".to_string()));
        }
        let mut client = self.client();
        client.arg(command);
        run_with_timeout(&mut client, None, timeout, command)
    }

    fn transfer_content(&mut self, content: &str, remote_path: &str) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::Connection("session is closed".to_string()));
        }
        let mut client = self.client();
        client.arg(format!("cat > {}", shell_quote(remote_path)));

        let operation = format!("transfer to {remote_path}");
        let output = run_with_timeout(
            &mut client,
            Some(content),
            self.transfer_timeout,
            &operation,
        )?;
        if output.success() {
            Ok(())
        } else {
            Err(SessionError::Transfer {
                path: remote_path.to_string(),
                message: output.stderr.trim().to_string(),
            })
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        let mut client = self.client();
        client.args(["-O", "exit"]);
        match run_with_timeout(&mut client, None, CLOSE_TIMEOUT, "close") {
            Ok(output) if output.success() => tracing::trace!("ssh master stopped"),
            Ok(output) => tracing::debug!(stderr = %output.stderr.trim(), "ssh master exit request failed"),
            Err(e) => tracing::debug!(error = %e, "ssh master exit request failed"),
        }
    }
}

impl Drop for SshSession {
    fn drop(&mut self) {
        self.close();
    }
}

fn endpoint_args(target: &TargetSpec) -> Vec<OsString> {
    vec![
        "-p".into(),
        target.port.to_string().into(),
        "-l".into(),
        target.credentials.username.clone().into(),
        target.host.clone().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostKeyChecking;
    use crate::domain::entities::Credentials;
    use std::ffi::OsStr;

    fn target(password: Option<&str>) -> TargetSpec {
        TargetSpec::new(
            "leaf1",
            "192.168.200.11",
            Credentials::new("cumulus", password.map(str::to_string)),
            "leaf1.conf",
        )
        .with_port(2222)
    }

    fn args(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn connector() -> SshConnector {
        SshConnector::new(SshSettings::default(), Duration::from_secs(30))
    }

    #[test]
    fn key_auth_master_uses_batch_mode() {
        let socket = PathBuf::from("/tmp/x/master.sock");
        let command = connector().master_command(&target(None), &socket, Duration::from_secs(30));

        assert_eq!(command.get_program(), "ssh");
        let args = args(&command);
        assert!(args.contains(&"BatchMode=yes".to_string()));
        assert!(args.contains(&"ConnectTimeout=30".to_string()));
        assert!(args.contains(&"StrictHostKeyChecking=accept-new".to_string()));
        assert_eq!(
            &args[args.len() - 5..],
            ["-p", "2222", "-l", "cumulus", "192.168.200.11"]
        );
        assert!(command.get_envs().next().is_none());
    }

    #[test]
    fn password_goes_through_helper_environment() {
        let socket = PathBuf::from("/tmp/x/master.sock");
        let command = connector().master_command(
            &target(Some("CumulusLinux!")),
            &socket,
            Duration::from_secs(10),
        );

        assert_eq!(command.get_program(), "sshpass");
        let args = args(&command);
        assert_eq!(&args[..2], ["-e", "ssh"]);
        assert!(!args.iter().any(|a| a.contains("CumulusLinux!")));
        assert!(!args.contains(&"BatchMode=yes".to_string()));

        let envs: Vec<_> = command.get_envs().collect();
        assert_eq!(
            envs,
            vec![(OsStr::new("SSHPASS"), Some(OsStr::new("CumulusLinux!")))]
        );
    }

    #[test]
    fn host_key_policy_is_configurable() {
        let ssh = SshSettings {
            host_key_checking: HostKeyChecking::Yes,
            ..SshSettings::default()
        };
        let socket = PathBuf::from("/tmp/x/master.sock");
        let command = SshConnector::new(ssh, Duration::from_secs(30)).master_command(
            &target(None),
            &socket,
            Duration::from_secs(30),
        );
        assert!(args(&command).contains(&"StrictHostKeyChecking=yes".to_string()));
    }

    #[test]
    fn missing_ssh_program_fails_connect() {
        let ssh = SshSettings {
            program: "/nonexistent/ssh".to_string(),
            ..SshSettings::default()
        };
        let err = SshConnector::new(ssh, Duration::from_secs(1))
            .connect(&target(None), Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err, SessionError::Spawn { .. }));
    }
}
