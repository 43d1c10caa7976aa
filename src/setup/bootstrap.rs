//! Winget installer/updater
//!
//! Checks the installed winget version and, when it is absent or below the
//! minimum, installs the runtime dependencies and the latest App Installer
//! bundle, then best-effort registers the package family and re-verifies.

use crate::domain::MIN_WINGET_VERSION;
use crate::error::AppError;
use crate::platform::{PackagePlatform, APP_INSTALLER_FAMILY};
use crate::progress::Progress;
use crate::release::{HttpClient, ReleaseSource};
use crate::report::Reporter;
use crate::setup::{deps, download_asset, scratch_dir};
use crate::winget::WingetRunner;
use std::time::Duration;

/// Pause after the bundle install so package registration can settle
pub const SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Local filename for the downloaded bundle
const BUNDLE_FILE_NAME: &str = "Microsoft.DesktopAppInstaller.msixbundle";

/// Ensure winget is installed and at least the minimum version
///
/// When the installed version already satisfies the minimum, this performs
/// no downloads and no installs. Version-probe failures are warnings that
/// merely force the install path; only download/extract/install failures
/// are fatal.
pub async fn ensure_winget(
    source: &dyn ReleaseSource,
    client: &HttpClient,
    platform: &dyn PackagePlatform,
    runner: &dyn WingetRunner,
    reporter: &Reporter,
    progress: &mut Progress,
    settle_delay: Duration,
) -> Result<(), AppError> {
    match runner.probe_version() {
        Ok(version) if version.meets(&MIN_WINGET_VERSION) => {
            reporter.ok(format!(
                "winget {} is up to date (minimum {})",
                version, MIN_WINGET_VERSION
            ));
            return Ok(());
        }
        Ok(version) => reporter.warn(format!(
            "winget {} is below the required {}",
            version, MIN_WINGET_VERSION
        )),
        Err(failure) => reporter.warn(format!(
            "winget version check failed, assuming install is needed: {}",
            failure
        )),
    }

    deps::install_dependencies(source, client, platform, reporter, progress).await?;

    reporter.info("Resolving latest winget release");
    let assets = source.latest().await?;

    // Scratch directory is removed on drop, on every exit path
    let scratch = scratch_dir()?;
    let bundle_path = scratch.path().join(BUNDLE_FILE_NAME);

    let size = download_asset(
        client,
        &assets.bundle_url,
        &bundle_path,
        progress,
        "App Installer bundle",
    )
    .await?;
    reporter.detail(format!("Downloaded bundle ({} bytes)", size));

    reporter.info(format!("Installing App Installer bundle {}", assets.tag));
    progress.spinner("Add-AppxPackage App Installer bundle");
    let install_result = platform.install_package_file(&bundle_path);
    progress.finish_and_clear();
    if let Err(e) = install_result {
        reporter.error(format!("{}", e));
        return Err(e.into());
    }
    reporter.ok("App Installer bundle installed");

    match platform.register_package_family(APP_INSTALLER_FAMILY) {
        Ok(()) => reporter.ok("App Installer registered for current user"),
        Err(e) => reporter.warn(format!("Registration failed, continuing: {}", e)),
    }

    reporter.info("Waiting for package registration to settle");
    tokio::time::sleep(settle_delay).await;

    match runner.probe_version() {
        Ok(version) if version.meets(&MIN_WINGET_VERSION) => {
            reporter.ok(format!("winget {} is ready", version));
        }
        Ok(version) => reporter.warn(format!(
            "winget still reports {} after install (minimum {})",
            version, MIN_WINGET_VERSION
        )),
        Err(failure) => reporter.warn(format!("winget version re-check failed: {}", failure)),
    }

    Ok(())
}
