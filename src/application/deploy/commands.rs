//! Device command lines
//!
//! Every shell command sent to a switch is built here from `DeviceSettings`.

use crate::config::DeviceSettings;
use crate::domain::services::shell_quote;
use crate::domain::value_objects::SectionKind;

/// Builds the command lines for one deployment
#[derive(Debug, Clone)]
pub struct DeviceCommands {
    device: DeviceSettings,
}

impl DeviceCommands {
    pub fn new(device: DeviceSettings) -> Self {
        Self { device }
    }

    /// Remote file a section is installed to
    pub fn destination(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Interfaces => &self.device.interfaces_path,
            SectionKind::RoutingDaemon => &self.device.routing_config_path,
        }
    }

    /// `sudo cp <file> <file>.backup.<timestamp>` for each managed file
    pub fn backups(&self, timestamp: &str) -> Vec<String> {
        [
            &self.device.interfaces_path,
            &self.device.routing_config_path,
            &self.device.hostname_path,
        ]
        .iter()
        .map(|path| {
            format!(
                "sudo cp {} {}",
                shell_quote(path),
                shell_quote(&format!("{path}.backup.{timestamp}"))
            )
        })
        .collect()
    }

    pub fn set_hostname(&self, hostname: &str) -> String {
        format!("sudo hostnamectl set-hostname {}", shell_quote(hostname))
    }

    /// Staging file for a section, unique per `stamp`
    pub fn staging_path(&self, kind: SectionKind, stamp: i64) -> String {
        let basename = self
            .destination(kind)
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(kind.name());
        format!(
            "{}/{}.{}",
            self.device.staging_dir.trim_end_matches('/'),
            basename,
            stamp
        )
    }

    pub fn install(&self, staging: &str, kind: SectionKind) -> String {
        format!(
            "sudo cp {} {}",
            shell_quote(staging),
            shell_quote(self.destination(kind))
        )
    }

    pub fn reload_networking(&self) -> String {
        self.device.reload_command.clone()
    }

    pub fn restart_routing_daemon(&self) -> String {
        format!(
            "sudo systemctl restart {}",
            shell_quote(&self.device.routing_service)
        )
    }

    pub fn verify_peering(&self) -> String {
        "sudo vtysh -c 'show bgp summary'".to_string()
    }

    pub fn verify_overlay(&self) -> String {
        "sudo vtysh -c 'show bgp l2vpn evpn summary'".to_string()
    }
}
