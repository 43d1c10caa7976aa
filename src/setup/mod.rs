//! Setup workflow: winget bootstrap
//!
//! This module provides:
//! - Asset download with empty-file verification
//! - Runtime dependency installation from the dependency archive
//! - App Installer bundle installation and registration

mod bootstrap;
mod deps;
mod download;

pub use bootstrap::{ensure_winget, SETTLE_DELAY};
pub use deps::{
    collect_packages, extract_archive, install_dependencies, install_from_extracted,
    install_packages, DEPS_PLATFORM_DIR,
};
pub use download::download_asset;

use crate::error::SetupError;
use tempfile::TempDir;

/// Create a fresh randomized scratch directory under the system temp root
///
/// The directory is removed when the returned guard is dropped, on every
/// exit path.
pub(crate) fn scratch_dir() -> Result<TempDir, SetupError> {
    tempfile::Builder::new()
        .prefix("wingetup-")
        .tempdir()
        .map_err(|e| SetupError::io(std::env::temp_dir(), e))
}
