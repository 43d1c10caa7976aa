//! Runtime dependency installation
//!
//! Downloads the dependency archive, extracts it and installs every
//! package found directly under the platform subdirectory, in name-sorted
//! order. Dependencies are mandatory: the first install failure aborts the
//! whole operation, unlike the batch installer's continue-on-failure
//! policy.

use crate::error::{AppError, SetupError};
use crate::platform::PackagePlatform;
use crate::progress::Progress;
use crate::release::{HttpClient, ReleaseSource, DEPS_ASSET_NAME};
use crate::report::Reporter;
use crate::setup::{download_asset, scratch_dir};
use std::path::{Path, PathBuf};

/// Platform subdirectory holding the installable dependency packages
pub const DEPS_PLATFORM_DIR: &str = "x64";

/// Installer-package extensions found inside the dependency archive
const PACKAGE_EXTENSIONS: [&str; 2] = ["appx", "msix"];

/// Download, extract and install the winget runtime dependencies
pub async fn install_dependencies(
    source: &dyn ReleaseSource,
    client: &HttpClient,
    platform: &dyn PackagePlatform,
    reporter: &Reporter,
    progress: &mut Progress,
) -> Result<(), AppError> {
    // Scratch directory is removed on drop, on every exit path
    let scratch = scratch_dir()?;

    reporter.info("Resolving latest winget release");
    let assets = source.latest().await?;
    match assets.published_at {
        Some(published_at) => reporter.info(format!(
            "Latest release: {} (published {})",
            assets.tag,
            published_at.format("%Y-%m-%d")
        )),
        None => reporter.info(format!("Latest release: {}", assets.tag)),
    }

    let archive_path = scratch.path().join(DEPS_ASSET_NAME);
    let size = download_asset(
        client,
        &assets.deps_url,
        &archive_path,
        progress,
        DEPS_ASSET_NAME,
    )
    .await?;
    reporter.detail(format!("Downloaded {} ({} bytes)", DEPS_ASSET_NAME, size));

    let extract_dir = scratch.path().join("extracted");
    extract_archive(&archive_path, &extract_dir)?;

    install_from_extracted(platform, reporter, progress, &extract_dir)?;
    Ok(())
}

/// Install every package found under the platform subdirectory of an
/// extracted dependency archive
pub fn install_from_extracted(
    platform: &dyn PackagePlatform,
    reporter: &Reporter,
    progress: &mut Progress,
    extract_dir: &Path,
) -> Result<(), SetupError> {
    let platform_dir = extract_dir.join(DEPS_PLATFORM_DIR);
    if !platform_dir.is_dir() {
        return Err(SetupError::archive_layout(format!(
            "'{}' directory not found in dependency archive",
            DEPS_PLATFORM_DIR
        )));
    }

    let packages = collect_packages(&platform_dir)?;
    if packages.is_empty() {
        reporter.warn("Dependency archive contains no installable packages");
        return Ok(());
    }

    install_packages(platform, reporter, progress, &packages)
}

/// Extract a zip archive into `dest`
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<(), SetupError> {
    let file = std::fs::File::open(archive).map_err(|e| SetupError::io(archive, e))?;

    let mut zip = zip::ZipArchive::new(file).map_err(|e| {
        SetupError::archive_layout(format!("failed to read {}: {}", archive.display(), e))
    })?;

    zip.extract(dest).map_err(|e| {
        SetupError::archive_layout(format!("failed to extract {}: {}", archive.display(), e))
    })
}

/// Enumerate installer packages directly inside `dir`, sorted by filename
///
/// Later entries may depend on earlier ones (a runtime framework sorts
/// before a desktop-extension package), so the order is load-bearing.
pub fn collect_packages(dir: &Path) -> Result<Vec<PathBuf>, SetupError> {
    let entries = std::fs::read_dir(dir).map_err(|e| SetupError::io(dir, e))?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SetupError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_package = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                PACKAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false);
        if is_package {
            packages.push(path);
        }
    }

    packages.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(packages)
}

/// Install packages in order, aborting on the first failure
pub fn install_packages(
    platform: &dyn PackagePlatform,
    reporter: &Reporter,
    progress: &mut Progress,
    packages: &[PathBuf],
) -> Result<(), SetupError> {
    for package in packages {
        let name = package
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| package.display().to_string());

        reporter.info(format!("Installing dependency package: {}", name));
        progress.spinner(&format!("Add-AppxPackage {}", name));
        let result = platform.install_package_file(package);
        progress.finish_and_clear();

        match result {
            Ok(()) => reporter.ok(format!("Dependency package installed: {}", name)),
            Err(e) => {
                reporter.error(format!("{}", e));
                return Err(e);
            }
        }
    }
    Ok(())
}
