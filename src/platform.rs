//! Native package installation capability
//!
//! This module provides:
//! - The `PackagePlatform` trait for install-from-file and
//!   register-by-family-name operations
//! - The Appx implementation that shells out to PowerShell

use crate::error::SetupError;
use std::path::Path;
use std::process::Command;

/// Package family of the App Installer (winget host)
pub const APP_INSTALLER_FAMILY: &str = "Microsoft.DesktopAppInstaller_8wekyb3d8bbwe";

/// Trait for the platform's native package-installation facility
pub trait PackagePlatform {
    /// Install a package file (.appx/.msix/.msixbundle)
    fn install_package_file(&self, path: &Path) -> Result<(), SetupError>;

    /// Register an already-installed package family for the current user
    fn register_package_family(&self, family: &str) -> Result<(), SetupError>;
}

/// Platform implementation driving Add-AppxPackage through PowerShell
#[derive(Debug, Default)]
pub struct AppxPlatform;

impl AppxPlatform {
    /// Create a new Appx platform
    pub fn new() -> Self {
        Self
    }

    /// Run a PowerShell command and capture its output
    fn run_powershell(&self, command: &str) -> std::io::Result<std::process::Output> {
        Command::new("powershell.exe")
            .args(["-NoLogo", "-NoProfile", "-Command", command])
            .output()
    }

    /// Quote a value for single-quoted PowerShell string literals
    fn ps_quote(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }
}

impl PackagePlatform for AppxPlatform {
    fn install_package_file(&self, path: &Path) -> Result<(), SetupError> {
        let package = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let command = format!(
            "Add-AppxPackage -Path {}",
            Self::ps_quote(&path.display().to_string())
        );

        let output = self
            .run_powershell(&command)
            .map_err(|e| SetupError::package_install(&package, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SetupError::package_install(
                &package,
                stderr.trim().to_string(),
            ))
        }
    }

    fn register_package_family(&self, family: &str) -> Result<(), SetupError> {
        let command = format!(
            "Add-AppxPackage -RegisterByFamilyName -MainPackage {} -DisableDevelopmentMode",
            Self::ps_quote(family)
        );

        let output = self
            .run_powershell(&command)
            .map_err(|e| SetupError::package_install(family, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SetupError::package_install(
                family,
                stderr.trim().to_string(),
            ))
        }
    }
}
