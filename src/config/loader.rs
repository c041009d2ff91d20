//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::Settings;

/// Settings file looked up next to the inventory when `--settings` is absent
pub const SETTINGS_FILE_NAME: &str = "evpn-deploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Settings together with where they came from
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> DeployResult<(Settings, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Resolve settings for a run.
///
/// An explicit path must exist. Without one, `evpn-deploy.toml` next to the
/// inventory is used when present, else built-in defaults. Environment
/// overrides are applied last.
pub fn resolve(explicit: Option<&Path>, inventory_dir: &Path) -> DeployResult<LoadedSettings> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let beside_inventory = inventory_dir.join(SETTINGS_FILE_NAME);
            beside_inventory.is_file().then_some(beside_inventory)
        }
    };

    let (settings, warnings) = match &candidate {
        Some(path) => {
            if !path.is_file() {
                return Err(DeployError::Settings {
                    path: path.clone(),
                    message: "file not found".to_string(),
                });
            }
            load_with_warnings(path)?
        }
        None => (Settings::default(), Vec::new()),
    };

    Ok(LoadedSettings {
        settings: with_env_overrides(settings),
        source: candidate,
        warnings,
    })
}

/// Apply environment variable overrides (EVPN_DEPLOY_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_overrides_from(settings, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secs) = parse_secs(&lookup, "EVPN_DEPLOY_SETTLE_SECS") {
        settings.delays.settle_secs = secs;
    }

    if let Some(secs) = parse_secs(&lookup, "EVPN_DEPLOY_CONVERGENCE_SECS") {
        settings.delays.convergence_secs = secs;
    }

    if let Some(secs) = parse_secs(&lookup, "EVPN_DEPLOY_CONNECT_TIMEOUT_SECS") {
        settings.timeouts.connect_secs = secs;
    }

    if let Some(program) = lookup("EVPN_DEPLOY_SSH_PROGRAM") {
        if !program.trim().is_empty() {
            settings.ssh.program = program.trim().to_string();
        }
    }

    settings
}

fn parse_secs<F>(lookup: &F, var: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(_) => {
            tracing::warn!(variable = var, value = %raw, "ignoring invalid value, expected whole seconds");
            None
        }
    }
}

pub(crate) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "timeouts",
        "connect_secs",
        "command_secs",
        "reload_secs",
        "restart_secs",
        "verify_secs",
        "delays",
        "settle_secs",
        "convergence_secs",
        "device",
        "interfaces_path",
        "routing_config_path",
        "hostname_path",
        "staging_dir",
        "reload_command",
        "routing_service",
        "ssh",
        "program",
        "password_helper",
        "host_key_checking",
        "output",
        "color",
        "unicode",
    ];

    suggest_from(unknown, CANDIDATES)
}

/// Closest candidate within edit distance 2
pub(crate) fn suggest_from(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
