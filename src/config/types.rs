//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DeployResult;

use super::loader::{self, ConfigWarning};

/// Per-operation timeouts, in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutSettings {
    #[serde(default = "default_connect_secs")]
    pub connect_secs: u64,

    /// Commands without a dedicated timeout (backup, hostname, install)
    #[serde(default = "default_command_secs")]
    pub command_secs: u64,

    #[serde(default = "default_reload_secs")]
    pub reload_secs: u64,

    #[serde(default = "default_restart_secs")]
    pub restart_secs: u64,

    #[serde(default = "default_verify_secs")]
    pub verify_secs: u64,
}

impl TimeoutSettings {
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    pub fn command(&self) -> Duration {
        Duration::from_secs(self.command_secs)
    }

    pub fn reload(&self) -> Duration {
        Duration::from_secs(self.reload_secs)
    }

    pub fn restart(&self) -> Duration {
        Duration::from_secs(self.restart_secs)
    }

    pub fn verify(&self) -> Duration {
        Duration::from_secs(self.verify_secs)
    }
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            connect_secs: default_connect_secs(),
            command_secs: default_command_secs(),
            reload_secs: default_reload_secs(),
            restart_secs: default_restart_secs(),
            verify_secs: default_verify_secs(),
        }
    }
}

/// Fixed waits after reload and restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelaySettings {
    #[serde(default = "default_settle_secs")]
    pub settle_secs: u64,

    #[serde(default = "default_convergence_secs")]
    pub convergence_secs: u64,
}

impl Default for DelaySettings {
    fn default() -> Self {
        Self {
            settle_secs: default_settle_secs(),
            convergence_secs: default_convergence_secs(),
        }
    }
}

/// Paths and commands on the switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSettings {
    #[serde(default = "default_interfaces_path")]
    pub interfaces_path: String,

    #[serde(default = "default_routing_config_path")]
    pub routing_config_path: String,

    #[serde(default = "default_hostname_path")]
    pub hostname_path: String,

    /// Where sections are staged before `sudo cp` installs them
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,

    #[serde(default = "default_reload_command")]
    pub reload_command: String,

    /// systemd unit restarted after deployment
    #[serde(default = "default_routing_service")]
    pub routing_service: String,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            interfaces_path: default_interfaces_path(),
            routing_config_path: default_routing_config_path(),
            hostname_path: default_hostname_path(),
            staging_dir: default_staging_dir(),
            reload_command: default_reload_command(),
            routing_service: default_routing_service(),
        }
    }
}

/// Host key policy passed to `StrictHostKeyChecking`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HostKeyChecking {
    Yes,
    #[default]
    AcceptNew,
    No,
}

impl HostKeyChecking {
    pub fn as_ssh_option(&self) -> &'static str {
        match self {
            HostKeyChecking::Yes => "yes",
            HostKeyChecking::AcceptNew => "accept-new",
            HostKeyChecking::No => "no",
        }
    }
}

/// OpenSSH client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshSettings {
    #[serde(default = "default_ssh_program")]
    pub program: String,

    /// Helper that feeds passwords to ssh (`sshpass -e`)
    #[serde(default = "default_password_helper")]
    pub password_helper: String,

    #[serde(default)]
    pub host_key_checking: HostKeyChecking,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            program: default_ssh_program(),
            password_helper: default_password_helper(),
            host_key_checking: HostKeyChecking::default(),
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub timeouts: TimeoutSettings,

    #[serde(default)]
    pub delays: DelaySettings,

    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub ssh: SshSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a TOML file, ignoring unknown-key warnings
    pub fn load(path: &Path) -> DeployResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load settings and collect non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}

fn default_connect_secs() -> u64 {
    30
}

fn default_command_secs() -> u64 {
    30
}

fn default_reload_secs() -> u64 {
    60
}

fn default_restart_secs() -> u64 {
    60
}

fn default_verify_secs() -> u64 {
    30
}

fn default_settle_secs() -> u64 {
    5
}

fn default_convergence_secs() -> u64 {
    10
}

fn default_interfaces_path() -> String {
    "/etc/network/interfaces".to_string()
}

fn default_routing_config_path() -> String {
    "/etc/frr/frr.conf".to_string()
}

fn default_hostname_path() -> String {
    "/etc/hostname".to_string()
}

fn default_staging_dir() -> String {
    "/tmp".to_string()
}

fn default_reload_command() -> String {
    "sudo ifreload -a".to_string()
}

fn default_routing_service() -> String {
    "frr".to_string()
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

fn default_password_helper() -> String {
    "sshpass".to_string()
}

fn default_true() -> bool {
    true
}
