//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReleaseError: Issues with the GitHub releases API
//! - SetupError: Issues with downloads, archives and package installation
//! - BatchError: Issues preventing the app batch from starting at all

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Release resolution related errors
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// Setup (download/extract/install) related errors
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// Batch installation related errors
    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Errors related to resolving release assets from the releases API
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Network request failed; never retried
    #[error("failed to fetch release metadata from {url}: {message}")]
    Network { url: String, message: String },

    /// Expected asset absent from the latest release
    #[error("latest release {tag} has no asset matching '{asset}'")]
    AssetMissing { tag: String, asset: String },

    /// Response body could not be interpreted
    #[error("invalid release response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Errors related to downloads, archive handling and package installation
#[derive(Error, Debug)]
pub enum SetupError {
    /// Downloaded file is missing or empty
    #[error("download of {url} produced no usable file at {path}")]
    Download { url: String, path: PathBuf },

    /// Extracted archive does not have the expected layout
    #[error("unexpected archive layout: {message}")]
    ArchiveLayout { message: String },

    /// A native package failed to install
    #[error("failed to install package {package}: {message}")]
    PackageInstall { package: String, message: String },

    /// File system operation failed
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors preventing the app batch from starting
#[derive(Error, Debug)]
pub enum BatchError {
    /// winget is not invocable on the search path
    #[error("winget is not available on this system: {message}")]
    CliNotFound { message: String },
}

impl ReleaseError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new AssetMissing error
    pub fn asset_missing(tag: impl Into<String>, asset: impl Into<String>) -> Self {
        ReleaseError::AssetMissing {
            tag: tag.into(),
            asset: asset.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl SetupError {
    /// Creates a new Download error
    pub fn download(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        SetupError::Download {
            url: url.into(),
            path: path.into(),
        }
    }

    /// Creates a new ArchiveLayout error
    pub fn archive_layout(message: impl Into<String>) -> Self {
        SetupError::ArchiveLayout {
            message: message.into(),
        }
    }

    /// Creates a new PackageInstall error
    pub fn package_install(package: impl Into<String>, message: impl Into<String>) -> Self {
        SetupError::PackageInstall {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }
}

impl BatchError {
    /// Creates a new CliNotFound error
    pub fn cli_not_found(message: impl Into<String>) -> Self {
        BatchError::CliNotFound {
            message: message.into(),
        }
    }
}
