//! Winget version type
//!
//! winget reports 4-component versions (`1.12.210.0`), sometimes prefixed
//! with `v` and sometimes with trailing components omitted. Missing
//! components count as zero, so `v1.12` and `1.12.0.0` compare equal.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Minimum winget version required before a bundle install is skipped
pub const MIN_WINGET_VERSION: WingetVersion = WingetVersion::new(1, 12, 0, 0);

/// A 4-component version as reported by `winget --version`
///
/// Ordering is lexicographic by component (derived field order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WingetVersion {
    pub major: u64,
    pub minor: u64,
    pub build: u64,
    pub revision: u64,
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("invalid version pattern")
    })
}

impl WingetVersion {
    /// Creates a new version from its components
    pub const fn new(major: u64, minor: u64, build: u64, revision: u64) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Extracts a version from CLI output such as `v1.12.210.0`
    ///
    /// Returns `None` when no `major.minor` pair is present anywhere in the
    /// text. Surrounding noise (prefixes, trailing newline) is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = version_pattern().captures(text)?;
        let component = |i: usize| -> u64 {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };
        Some(Self::new(
            component(1),
            component(2),
            component(3),
            component(4),
        ))
    }

    /// Returns true if this version satisfies the given minimum
    /// (boundary inclusive)
    pub fn meets(&self, minimum: &WingetVersion) -> bool {
        self >= minimum
    }
}

impl fmt::Display for WingetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}
