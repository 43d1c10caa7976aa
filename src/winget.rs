//! Winget CLI capability
//!
//! This module provides:
//! - The `WingetRunner` trait isolating orchestration from the real CLI
//! - The system implementation that shells out to `winget`

use crate::domain::WingetVersion;
use std::fmt;
use std::process::Command;

/// Fixed unattended flag set for `winget install`
pub const WINGET_INSTALL_FLAGS: [&str; 4] = [
    "--accept-source-agreements",
    "--accept-package-agreements",
    "--silent",
    "--disable-interactivity",
];

/// Why a version probe failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The executable could not be launched at all
    NotInvocable { message: String },
    /// winget ran but exited non-zero
    NonZeroExit { exit_code: i32 },
    /// Output did not contain a parseable version
    Unparseable { output: String },
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::NotInvocable { message } => {
                write!(f, "winget could not be launched: {}", message)
            }
            ProbeFailure::NonZeroExit { exit_code } => {
                write!(f, "winget --version exited with code {}", exit_code)
            }
            ProbeFailure::Unparseable { output } => {
                write!(f, "could not parse version from output '{}'", output.trim())
            }
        }
    }
}

/// Trait for invoking the winget CLI
pub trait WingetRunner {
    /// Probe the installed winget version via `winget --version`
    fn probe_version(&self) -> Result<WingetVersion, ProbeFailure>;

    /// Install one application identifier with the fixed unattended flags,
    /// returning the child process exit code
    fn install(&self, id: &str) -> Result<i32, std::io::Error>;
}

/// Runner that executes the real winget executable
#[derive(Debug, Default)]
pub struct SystemWinget;

impl SystemWinget {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl WingetRunner for SystemWinget {
    fn probe_version(&self) -> Result<WingetVersion, ProbeFailure> {
        let output = Command::new("winget")
            .arg("--version")
            .output()
            .map_err(|e| ProbeFailure::NotInvocable {
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProbeFailure::NonZeroExit {
                exit_code: output.status.code().unwrap_or(-1),
            });
        }

        // Some builds print the version to stderr
        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        WingetVersion::parse(&text).ok_or(ProbeFailure::Unparseable { output: text })
    }

    fn install(&self, id: &str) -> Result<i32, std::io::Error> {
        let output = Command::new("winget")
            .args(["install", "--id", id])
            .args(WINGET_INSTALL_FLAGS)
            .output()?;

        Ok(output.status.code().unwrap_or(-1))
    }
}
