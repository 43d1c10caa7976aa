//! App batch installer
//!
//! Installs a list of application identifiers sequentially via winget.
//! One failing package never blocks the rest: failures are recorded in the
//! batch summary and processing continues with the next identifier.

use crate::domain::{AppInstallResult, BatchSummary};
use crate::error::BatchError;
use crate::progress::Progress;
use crate::report::Reporter;
use crate::winget::{ProbeFailure, WingetRunner};

/// Install every non-blank identifier in order and aggregate the outcome
///
/// Fails with [`BatchError::CliNotFound`] before any install is attempted
/// when winget cannot be launched at all. A probe that launches but
/// misbehaves (non-zero exit, unparseable version) is only a warning.
pub fn install_apps<R: WingetRunner>(
    runner: &R,
    reporter: &Reporter,
    progress: &mut Progress,
    ids: &[String],
) -> Result<BatchSummary, BatchError> {
    match runner.probe_version() {
        Ok(version) => reporter.detail(format!("winget {} available", version)),
        Err(ProbeFailure::NotInvocable { message }) => {
            return Err(BatchError::cli_not_found(message));
        }
        Err(failure) => reporter.warn(format!("winget version probe failed: {}", failure)),
    }

    let mut summary = BatchSummary::new();

    for raw in ids {
        let id = raw.trim();
        if id.is_empty() {
            reporter.detail("Skipping blank app identifier");
            continue;
        }

        reporter.info(format!("Installing app via winget: {}", id));
        progress.spinner(&format!("winget install {}", id));
        let install_result = runner.install(id);
        progress.finish_and_clear();

        match install_result {
            Ok(0) => {
                reporter.ok(format!("App installed successfully: {}", id));
                summary.record(AppInstallResult::from_exit_code(id, 0));
            }
            Ok(exit_code) => {
                reporter.error(format!(
                    "App install failed with exit code {}: {}",
                    exit_code, id
                ));
                summary.record(AppInstallResult::from_exit_code(id, exit_code));
            }
            Err(e) => {
                reporter.error(format!("App install could not start ({}): {}", e, id));
                summary.record(AppInstallResult::from_exit_code(id, -1));
            }
        }
    }

    reporter.info(format!(
        "{} of {} apps installed",
        summary.succeeded_count(),
        summary.total()
    ));

    if let Some(line) = summary.failed_line() {
        reporter.machine(line);
    }

    Ok(summary)
}
