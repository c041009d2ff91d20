//! Target switch specification
//!
//! A `TargetSpec` is the validated form of one inventory entry. It is built
//! at the inventory boundary and read-only afterwards.

use std::path::PathBuf;

/// SSH port used when the inventory omits one
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Login credentials for a switch
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    /// `None` selects key-based authentication
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn uses_password(&self) -> bool {
        self.password.is_some()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// One deployable switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    /// Inventory key; also becomes the device hostname
    pub name: String,
    /// Address or DNS name used to reach the switch
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
    /// Composite configuration file, relative to the config directory
    pub config_file: PathBuf,
}

impl TargetSpec {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        credentials: Credentials,
        config_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port: DEFAULT_SSH_PORT,
            credentials,
            config_file: config_file.into(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `user@host` form used for display
    pub fn destination(&self) -> String {
        format!("{}@{}", self.credentials.username, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("cumulus", Some("CumulusLinux!".to_string()));
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("cumulus"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("CumulusLinux!"));
    }

    #[test]
    fn new_target_defaults_port() {
        let target = TargetSpec::new(
            "leaf1",
            "192.168.200.11",
            Credentials::new("cumulus", None),
            "leaf1.conf",
        );
        assert_eq!(target.port, DEFAULT_SSH_PORT);
        assert_eq!(target.with_port(2222).port, 2222);
    }

    #[test]
    fn destination_combines_user_and_host() {
        let target = TargetSpec::new(
            "spine1",
            "10.1.1.1",
            Credentials::new("admin", None),
            "spine1.conf",
        );
        assert_eq!(target.destination(), "admin@10.1.1.1");
    }
}
