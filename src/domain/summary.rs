//! Batch install result types
//!
//! Provides structures for tracking per-app outcomes and the aggregated
//! batch summary that is turned into the process exit status.

use serde::{Deserialize, Serialize};

/// Outcome of one `winget install` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInstallResult {
    /// The application identifier that was attempted
    pub id: String,
    /// Exit code reported by winget
    pub exit_code: i32,
    /// Whether the install succeeded (exit code 0)
    pub succeeded: bool,
}

impl AppInstallResult {
    /// Creates a result from an identifier and its exit code
    pub fn from_exit_code(id: impl Into<String>, exit_code: i32) -> Self {
        Self {
            id: id.into(),
            exit_code,
            succeeded: exit_code == 0,
        }
    }
}

/// Aggregated result of one batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BatchSummary {
    /// Individual results in attempt order
    pub results: Vec<AppInstallResult>,
}

impl BatchSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one per-app result
    pub fn record(&mut self, result: AppInstallResult) {
        self.results.push(result);
    }

    /// Returns the number of identifiers attempted (blanks were never
    /// recorded, so they are not counted)
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns the number of successful installs
    pub fn succeeded_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    /// Returns the failed identifiers in attempt order
    pub fn failed_ids(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.succeeded)
            .map(|r| r.id.as_str())
            .collect()
    }

    /// Returns true if every attempted install succeeded
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }

    /// Formats the machine-parsable failure line, or `None` when nothing
    /// failed
    pub fn failed_line(&self) -> Option<String> {
        let failed = self.failed_ids();
        if failed.is_empty() {
            None
        } else {
            Some(format!("FAILED_APPS: {}", failed.join(",")))
        }
    }
}
