//! wingetup - Winget bootstrapper and unattended app installer
//!
//! Two mutually exclusive modes:
//! - `--setup` installs winget, the App Installer bundle and its runtime
//!   dependencies
//! - positional identifiers are installed sequentially via `winget install`

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use wingetup::batch;
use wingetup::cli::CliArgs;
use wingetup::platform::AppxPlatform;
use wingetup::progress::Progress;
use wingetup::release::{GitHubReleaseSource, HttpClient};
use wingetup::report::Reporter;
use wingetup::setup::{ensure_winget, SETTLE_DELAY};
use wingetup::winget::SystemWinget;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            println!("{} {:#}", format!("{:<5}", "ERROR").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let reporter = Reporter::new(args.verbose);

    // No mode selected: diagnose and exit without any partial action
    if !args.has_mode() {
        reporter.error("Nothing to do: pass --setup or at least one app identifier");
        return Ok(ExitCode::FAILURE);
    }

    if args.verbose {
        reporter.detail(format!("wingetup v{}", env!("CARGO_PKG_VERSION")));
    }

    let mut progress = Progress::new(!args.quiet);

    if args.setup {
        let client = HttpClient::new()?;
        let source = GitHubReleaseSource::new(client.clone());
        let platform = AppxPlatform::new();
        let runner = SystemWinget::new();

        ensure_winget(
            &source,
            &client,
            &platform,
            &runner,
            &reporter,
            &mut progress,
            SETTLE_DELAY,
        )
        .await?;

        reporter.ok("Setup complete");
        return Ok(ExitCode::SUCCESS);
    }

    let runner = SystemWinget::new();
    let summary = batch::install_apps(&runner, &reporter, &mut progress, &args.app_ids)?;

    if summary.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
