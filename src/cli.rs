//! CLI argument parsing module for wingetup

use clap::Parser;

/// Winget bootstrapper and unattended app installer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wingetup",
    version,
    about = "Winget bootstrapper and unattended app installer"
)]
pub struct CliArgs {
    /// Application identifiers to install (e.g. Mozilla.Firefox 7zip.7zip)
    #[arg(value_name = "APP_ID", conflicts_with = "setup")]
    pub app_ids: Vec<String>,

    /// Install winget, the App Installer bundle and its runtime dependencies
    #[arg(long)]
    pub setup: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output, no progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Check whether an invocation mode was selected at all
    pub fn has_mode(&self) -> bool {
        self.setup || !self.app_ids.is_empty()
    }

    /// Identifiers with blank entries removed, original order preserved
    pub fn effective_app_ids(&self) -> Vec<&str> {
        self.app_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .collect()
    }
}
