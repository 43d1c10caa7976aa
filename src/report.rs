//! Severity-tagged progress output
//!
//! Every human-readable line goes to standard output with a fixed-width
//! severity tag (`INFO`, `OK`, `WARN`, `ERROR`). The companion GUI matches
//! lines with substring regexes, so the tag text must stay stable; colors
//! only wrap the tag, never the message.

use colored::Colorize;

/// Line-oriented reporter for progress and diagnostics
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    /// Whether verbose detail lines are printed
    verbose: bool,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an informational progress line
    pub fn info(&self, message: impl AsRef<str>) {
        println!("{} {}", format!("{:<5}", "INFO").cyan(), message.as_ref());
    }

    /// Print a success line
    pub fn ok(&self, message: impl AsRef<str>) {
        println!("{} {}", format!("{:<5}", "OK").green(), message.as_ref());
    }

    /// Print a warning line (non-fatal conditions)
    pub fn warn(&self, message: impl AsRef<str>) {
        println!("{} {}", format!("{:<5}", "WARN").yellow(), message.as_ref());
    }

    /// Print an error line
    pub fn error(&self, message: impl AsRef<str>) {
        println!("{} {}", format!("{:<5}", "ERROR").red().bold(), message.as_ref());
    }

    /// Print a detail line, only in verbose mode
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("{} {}", format!("{:<5}", "INFO").dimmed(), message.as_ref().dimmed());
        }
    }

    /// Print a machine-parsable line verbatim, without any tag
    pub fn machine(&self, line: impl AsRef<str>) {
        println!("{}", line.as_ref());
    }
}
