//! Test environment builder for isolated site-health runs.
//!
//! Provides `TestEnv` - a temp project directory and a temp config home,
//! plus helpers to run the CLI inside them.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a site-health CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated test environment.
///
/// `SITE_HEALTH_*` variables from the caller are cleared and the user config
/// directory points into a temp dir.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    /// Write `snapshot.json` into the project and return its path.
    pub fn with_snapshot(self, json: &str) -> Self {
        self.write_project_file("snapshot.json", json);
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_project_config(self, toml: &str) -> Self {
        self.write_project_file("site-health.toml", toml);
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_site-health"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("SITE_HEALTH_SNAPSHOT")
            .env_remove("SITE_HEALTH_FORMAT")
            .env_remove("SITE_HEALTH_ASYNC_POLICY")
            .env_remove("SITE_HEALTH_LOG")
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the CLI with the given arguments
    pub fn run(&self, args: &[&str]) -> TestResult {
        TestResult::from_output(self.command(args).output().unwrap())
    }

    /// Run the CLI against the project's `snapshot.json`
    pub fn run_with_snapshot(&self, args: &[&str]) -> TestResult {
        let mut full = vec!["--snapshot", "snapshot.json"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Run the CLI with `input` piped into stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        TestResult::from_output(child.wait_with_output().unwrap())
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}
