//! Test environment for running the evpn-deploy binary.
//!
//! Every `TestEnv` owns a temp directory holding `inventory.yaml` and a
//! `configs/` directory, so the default config-dir resolution is exercised
//! without touching the real filesystem.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the evpn-deploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines parsed as JSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("configs")).expect("Failed to create configs");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_evpn-deploy")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.path("inventory.yaml")
    }

    pub fn with_inventory(self, content: &str) -> Self {
        self.write_file("inventory.yaml", content);
        self
    }

    /// Write `configs/<name>`
    pub fn with_config(self, name: &str, content: &str) -> Self {
        self.write_file(&format!("configs/{name}"), content);
        self
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run with `--inventory <root>/inventory.yaml` prepended to `args`
    pub fn deploy(&self, args: &[&str]) -> TestResult {
        let inventory = self.inventory_path();
        let mut full = vec!["--inventory", inventory.to_str().expect("utf-8 temp path")];
        full.extend_from_slice(args);
        self.run(&full)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute evpn-deploy");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
