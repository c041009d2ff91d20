//! YAML Inventory Repository
//!
//! Reads the switch inventory:
//!
//! ```yaml
//! switches:
//!   leaf1:
//!     hostname: 192.168.200.11
//!     username: cumulus
//!     password: CumulusLinux!
//!     config_file: leaf1.conf
//! ```
//!
//! Entry order is kept; it is the default deployment order.

use std::fs;
use std::path::Path;

use serde::{de, Deserialize, Deserializer};
use serde_yaml_ng::{Mapping, Value};

use crate::config::{find_line_number, suggest_from, ConfigWarning};
use crate::domain::entities::{Credentials, Inventory, TargetSpec, DEFAULT_SSH_PORT};
use crate::error::{DeployError, DeployResult};

const ENTRY_KEYS: &[&str] = &["hostname", "username", "password", "port", "config_file"];

/// One `switches.<name>` entry before validation
#[derive(Debug, Deserialize)]
struct RawSwitch {
    #[serde(default, deserialize_with = "scalar_text")]
    hostname: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    username: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    password: Option<String>,
    port: Option<u16>,
    #[serde(default, deserialize_with = "scalar_text")]
    config_file: Option<String>,
}

/// Accept any YAML scalar as text, so `password: 123456` needs no quotes
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(_) => Err(de::Error::custom("expected a scalar value")),
    }
}

/// Loads inventories from YAML files
pub struct YamlInventoryRepository;

impl YamlInventoryRepository {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate the inventory at `path`.
    ///
    /// Any problem with the file or any entry is an error; unknown keys are
    /// returned as warnings.
    pub fn load(&self, path: &Path) -> DeployResult<(Inventory, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path).map_err(|e| DeployError::InventoryLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse_inventory(&content, path)
    }
}

impl Default for YamlInventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse inventory text; `path` is only used in diagnostics
pub fn parse_inventory(
    content: &str,
    path: &Path,
) -> DeployResult<(Inventory, Vec<ConfigWarning>)> {
    let load_error = |message: String| DeployError::InventoryLoad {
        path: path.to_path_buf(),
        message,
    };

    let document: Value = serde_yaml_ng::from_str(content).map_err(|e| load_error(e.to_string()))?;
    let Value::Mapping(root) = document else {
        return Err(load_error("expected a mapping at the top level".to_string()));
    };

    let mut warnings = Vec::new();
    for key in root.keys() {
        if let Some(key) = key.as_str().filter(|k| *k != "switches") {
            warnings.push(warning(content, path, key, &["switches"]));
        }
    }

    let switches = match root.get("switches") {
        Some(Value::Mapping(switches)) => switches,
        Some(Value::Null) => return Err(load_error("'switches' is empty".to_string())),
        Some(_) => return Err(load_error("'switches' must be a mapping".to_string())),
        None => return Err(load_error("missing 'switches' key".to_string())),
    };

    let targets = parse_switches(switches, content, path, &mut warnings)?;
    Ok((Inventory::new(targets), warnings))
}

fn parse_switches(
    switches: &Mapping,
    content: &str,
    path: &Path,
    warnings: &mut Vec<ConfigWarning>,
) -> DeployResult<Vec<TargetSpec>> {
    let mut targets = Vec::with_capacity(switches.len());

    for (key, value) in switches {
        let name = match key {
            Value::String(name) if !name.trim().is_empty() => name.clone(),
            Value::Number(n) => n.to_string(),
            _ => {
                return Err(DeployError::InventoryLoad {
                    path: path.to_path_buf(),
                    message: "switch names must be non-empty strings".to_string(),
                })
            }
        };

        let mut unknown = Vec::new();
        let raw: RawSwitch = serde_ignored::deserialize(value.clone(), |p| {
            unknown.push(p.to_string());
        })
        .map_err(|e| invalid(&name, e.to_string()))?;

        for key in unknown {
            warnings.push(warning(content, path, &key, ENTRY_KEYS));
        }

        targets.push(validate(&name, raw)?);
    }

    Ok(targets)
}

fn validate(name: &str, raw: RawSwitch) -> DeployResult<TargetSpec> {
    let hostname = required(name, "hostname", raw.hostname)?;
    let username = required(name, "username", raw.username)?;
    let config_file = required(name, "config_file", raw.config_file)?;

    let port = raw.port.unwrap_or(DEFAULT_SSH_PORT);
    if port == 0 {
        return Err(invalid(name, "port must be between 1 and 65535".to_string()));
    }

    let credentials = Credentials::new(username, raw.password);
    Ok(TargetSpec::new(name, hostname, credentials, config_file).with_port(port))
}

fn required(name: &str, field: &str, value: Option<String>) -> DeployResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(invalid(name, format!("'{}' must not be empty", field))),
        None => Err(invalid(name, format!("missing '{}'", field))),
    }
}

fn invalid(name: &str, message: String) -> DeployError {
    DeployError::InvalidTarget {
        name: name.to_string(),
        message,
    }
}

fn warning(content: &str, path: &Path, key: &str, candidates: &[&str]) -> ConfigWarning {
    ConfigWarning {
        key: key.to_string(),
        file: path.to_path_buf(),
        line: find_line_number(content, key),
        suggestion: suggest_from(key, candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn parse(content: &str) -> DeployResult<(Inventory, Vec<ConfigWarning>)> {
        parse_inventory(content, &PathBuf::from("inventory.yaml"))
    }

    #[test]
    fn parses_entries_in_document_order() {
        let (inventory, warnings) = parse(
            r#"
switches:
  spine1:
    hostname: 192.168.200.1
    username: cumulus
    password: CumulusLinux!
    config_file: spine1.conf
  leaf1:
    hostname: 192.168.200.11
    username: cumulus
    password: CumulusLinux!
    port: 2222
    config_file: leaf1.conf
"#,
        )
        .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(inventory.names(), vec!["spine1", "leaf1"]);

        let leaf1 = inventory.get("leaf1").unwrap();
        assert_eq!(leaf1.host, "192.168.200.11");
        assert_eq!(leaf1.port, 2222);
        assert_eq!(leaf1.config_file, PathBuf::from("leaf1.conf"));
        assert_eq!(inventory.get("spine1").unwrap().port, 22);
    }

    #[test]
    fn password_is_optional() {
        let (inventory, _) = parse(
            "switches:\n  leaf1:\n    hostname: leaf1.lab\n    username: cumulus\n    config_file: leaf1.conf\n",
        )
        .unwrap();
        assert!(!inventory.get("leaf1").unwrap().credentials.uses_password());
    }

    #[test]
    fn numeric_password_is_read_as_text() {
        let (inventory, _) = parse(
            "switches:\n  leaf1:\n    hostname: leaf1.lab\n    username: cumulus\n    password: 123456\n    config_file: leaf1.conf\n",
        )
        .unwrap();
        assert_eq!(
            inventory.get("leaf1").unwrap().credentials.password.as_deref(),
            Some("123456")
        );
    }

    #[test]
    fn non_scalar_field_is_invalid_target() {
        let err = parse(
            "switches:\n  leaf1:\n    hostname: [a, b]\n    username: cumulus\n    config_file: leaf1.conf\n",
        )
        .unwrap_err();
        assert!(matches!(err, DeployError::InvalidTarget { .. }));
    }

    #[test]
    fn missing_switches_key_is_load_error() {
        let err = parse("devices: {}\n").unwrap_err();
        assert!(matches!(err, DeployError::InventoryLoad { .. }));
        assert!(err.to_string().contains("missing 'switches' key"));
    }

    #[test]
    fn malformed_yaml_is_load_error() {
        let err = parse("switches: [unclosed\n").unwrap_err();
        assert!(matches!(err, DeployError::InventoryLoad { .. }));
    }

    #[test]
    fn scalar_document_is_load_error() {
        assert!(parse("just text").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn missing_field_names_the_entry() {
        let err = parse("switches:\n  leaf1:\n    hostname: leaf1.lab\n    config_file: leaf1.conf\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid inventory entry 'leaf1': missing 'username'"
        );
    }

    #[test]
    fn empty_field_is_rejected() {
        let err = parse(
            "switches:\n  leaf1:\n    hostname: ''\n    username: cumulus\n    config_file: leaf1.conf\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("'hostname' must not be empty"));
    }

    #[test]
    fn port_zero_is_rejected() {
        let err = parse(
            "switches:\n  leaf1:\n    hostname: h\n    username: u\n    port: 0\n    config_file: c\n",
        )
        .unwrap_err();
        assert!(matches!(err, DeployError::InvalidTarget { .. }));
    }

    #[test]
    fn unknown_entry_key_warns_with_suggestion() {
        let (_, warnings) = parse(
            "switches:\n  leaf1:\n    hostname: h\n    username: u\n    passwrd: p\n    config_file: c\n",
        )
        .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "passwrd");
        assert_eq!(warnings[0].line, Some(5));
        assert_eq!(warnings[0].suggestion.as_deref(), Some("password"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = YamlInventoryRepository::new()
            .load(&dir.path().join("inventory.yaml"))
            .unwrap_err();
        assert!(matches!(err, DeployError::InventoryLoad { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.yaml");
        fs::write(
            &path,
            "switches:\n  leaf1:\n    hostname: h\n    username: u\n    config_file: c\n",
        )
        .unwrap();
        let (inventory, _) = YamlInventoryRepository::new().load(&path).unwrap();
        assert_eq!(inventory.len(), 1);
    }
}
