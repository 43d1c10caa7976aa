//! GitHub releases API adapter
//!
//! Fetches the latest winget-cli release and selects the two assets the
//! setup flow needs: the App Installer msixbundle and the runtime
//! dependency archive. Selection is first-match in API response order.

use crate::domain::ReleaseAssets;
use crate::error::ReleaseError;
use crate::release::{HttpClient, ReleaseSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GitHub API base URL
const GITHUB_API_URL: &str = "https://api.github.com/repos";

/// Upstream project hosting the winget releases
const REPO_OWNER: &str = "microsoft";
const REPO_NAME: &str = "winget-cli";

/// Accept header for the releases API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Filename suffix identifying the App Installer bundle asset
pub const BUNDLE_SUFFIX: &str = ".msixbundle";

/// Exact filename of the runtime dependency archive asset
pub const DEPS_ASSET_NAME: &str = "DesktopAppInstaller_Dependencies.zip";

/// One asset of a GitHub release
#[derive(Debug, Deserialize)]
struct GitHubAsset {
    name: String,
    browser_download_url: String,
}

/// GitHub release response (the fields we consume)
#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
    published_at: Option<DateTime<Utc>>,
    assets: Vec<GitHubAsset>,
}

/// Release source backed by the GitHub releases API
pub struct GitHubReleaseSource {
    client: HttpClient,
    base_url: String,
}

impl GitHubReleaseSource {
    /// Create a new source for the fixed upstream project
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, GITHUB_API_URL)
    }

    /// Create a source against a custom API base URL (for testing)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the latest-release endpoint URL
    fn build_url(&self) -> String {
        format!(
            "{}/{}/{}/releases/latest",
            self.base_url, REPO_OWNER, REPO_NAME
        )
    }

    /// Select the bundle and dependency assets from a release
    fn select_assets(release: GitHubRelease) -> Result<ReleaseAssets, ReleaseError> {
        let bundle_url = release
            .assets
            .iter()
            .find(|a| a.browser_download_url.ends_with(BUNDLE_SUFFIX))
            .map(|a| a.browser_download_url.clone())
            .ok_or_else(|| ReleaseError::asset_missing(&release.tag_name, BUNDLE_SUFFIX))?;

        let deps_url = release
            .assets
            .iter()
            .find(|a| a.name == DEPS_ASSET_NAME)
            .map(|a| a.browser_download_url.clone())
            .ok_or_else(|| ReleaseError::asset_missing(&release.tag_name, DEPS_ASSET_NAME))?;

        let mut assets = ReleaseAssets::new(bundle_url, deps_url, release.tag_name);
        if let Some(published_at) = release.published_at {
            assets = assets.with_published_at(published_at);
        }
        Ok(assets)
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn latest(&self) -> Result<ReleaseAssets, ReleaseError> {
        let url = self.build_url();

        let response = self
            .client
            .inner()
            .get(&url)
            .header("Accept", GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|e| ReleaseError::network(&url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReleaseError::network(
                &url,
                format!("HTTP {}", response.status()),
            ));
        }

        let release = response
            .json::<GitHubRelease>()
            .await
            .map_err(|e| ReleaseError::invalid_response(&url, e.to_string()))?;

        Self::select_assets(release)
    }
}
