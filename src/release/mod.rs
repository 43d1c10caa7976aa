//! Release resolution against the GitHub releases API
//!
//! This module provides:
//! - HTTP client shared foundation
//! - The `ReleaseSource` trait for fetching the latest winget release
//! - The GitHub-backed implementation

mod client;
mod github;

pub use client::HttpClient;
pub use github::{GitHubReleaseSource, BUNDLE_SUFFIX, DEPS_ASSET_NAME};

use crate::domain::ReleaseAssets;
use crate::error::ReleaseError;
use async_trait::async_trait;

/// Trait for resolving the latest winget release assets
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch the latest published release and select its assets
    ///
    /// Every call re-queries the API; results are never cached.
    async fn latest(&self) -> Result<ReleaseAssets, ReleaseError>;
}
