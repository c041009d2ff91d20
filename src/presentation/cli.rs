//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single command: deploy the inventory (or a subset of it)
//! - `--json` swaps console progress for an NDJSON event stream

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deploy EVPN configuration to Cumulus Linux switches
#[derive(Parser, Debug)]
#[command(name = "evpn-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to inventory YAML file
    #[arg(short, long, value_name = "FILE")]
    pub inventory: PathBuf,

    /// Directory containing configuration files (default: `configs` next to the inventory)
    #[arg(short = 'c', long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Perform a dry run without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Specific switches to deploy (default: all)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub switches: Option<Vec<String>>,

    /// Settings file (default: `evpn-deploy.toml` next to the inventory)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Configuration directory, defaulting to `configs` beside the inventory
    pub fn resolved_config_dir(&self) -> PathBuf {
        match &self.config_dir {
            Some(dir) => dir.clone(),
            None => self.inventory_dir().join("configs"),
        }
    }

    /// Directory holding the inventory file
    pub fn inventory_dir(&self) -> PathBuf {
        self.inventory
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_inventory() {
        assert!(Cli::try_parse_from(["evpn-deploy"]).is_err());
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["evpn-deploy", "--inventory", "lab/inventory.yaml"]).unwrap();
        assert!(!cli.dry_run);
        assert!(!cli.json);
        assert!(cli.switches.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.resolved_config_dir(), PathBuf::from("lab/configs"));
    }

    #[test]
    fn test_cli_parse_switches_list() {
        let cli = Cli::try_parse_from([
            "evpn-deploy",
            "--inventory",
            "inventory.yaml",
            "--switches",
            "leaf1",
            "leaf2",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(
            cli.switches,
            Some(vec!["leaf1".to_string(), "leaf2".to_string()])
        );
        assert!(cli.dry_run);
        assert_eq!(cli.resolved_config_dir(), PathBuf::from("./configs"));
    }

    #[test]
    fn test_cli_switches_needs_a_value() {
        assert!(Cli::try_parse_from(["evpn-deploy", "-i", "inv.yaml", "--switches"]).is_err());
    }

    #[test]
    fn test_cli_explicit_config_dir_and_flags() {
        let cli = Cli::try_parse_from([
            "evpn-deploy",
            "-i",
            "inventory.yaml",
            "--config-dir",
            "/srv/configs",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.resolved_config_dir(), PathBuf::from("/srv/configs"));
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 2);
    }
}
