//! Where the host snapshot comes from.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use is_terminal::IsTerminal;
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::error::{SiteHealthError, SiteHealthResult};

use super::snapshot::HostSnapshot;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Source of a host snapshot document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// JSON file on disk
    File(PathBuf),
    /// JSON piped into standard input
    Stdin,
    /// Host-side export command printing JSON on stdout
    Command(Vec<String>),
}

impl SnapshotSource {
    /// Pick a source: an explicit path wins over configured ones.
    ///
    /// Within the config, a snapshot path wins over a command.
    pub fn resolve(explicit: Option<&Path>, host: &HostConfig) -> Option<Self> {
        if let Some(path) = explicit.or(host.snapshot.as_deref()) {
            return Some(Self::from_path(path));
        }

        host.command
            .as_ref()
            .filter(|argv| !argv.is_empty())
            .map(|argv| SnapshotSource::Command(argv.clone()))
    }

    fn from_path(path: &Path) -> Self {
        if path == Path::new(STDIN_PATH) {
            SnapshotSource::Stdin
        } else {
            SnapshotSource::File(path.to_path_buf())
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SnapshotSource::File(path) => path.display().to_string(),
            SnapshotSource::Stdin => "stdin".to_string(),
            SnapshotSource::Command(argv) => argv.join(" "),
        }
    }

    pub fn load(&self) -> SiteHealthResult<HostSnapshot> {
        info!(source = %self.describe(), "loading site health snapshot");

        match self {
            SnapshotSource::File(path) => HostSnapshot::from_path(path),
            SnapshotSource::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(SiteHealthError::InvalidSnapshot {
                        source_name: self.describe(),
                        message: "standard input is a terminal; pipe a snapshot into it".to_string(),
                    });
                }
                HostSnapshot::from_reader(stdin.lock(), "stdin")
            }
            SnapshotSource::Command(argv) => {
                let json = run_host_command(argv)?;
                HostSnapshot::from_json(&json, &self.describe())
            }
        }
    }
}

fn run_host_command(argv: &[String]) -> SiteHealthResult<String> {
    let command = argv.join(" ");
    let Some((program, args)) = argv.split_first() else {
        return Err(SiteHealthError::HostUnavailable);
    };

    debug!(command = %command, "running host export command");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| SiteHealthError::HostCommandFailed {
            command: command.clone(),
            status: "not started".to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(SiteHealthError::HostCommandFailed {
            command,
            status: output
                .status
                .code()
                .map(|c| format!("exit code {}", c))
                .unwrap_or_else(|| "terminated by signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
