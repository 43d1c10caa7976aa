//! Release asset information
//!
//! Produced by one releases-API call, consumed immediately by the
//! installers, never cached across invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Download URLs and metadata of the latest winget release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAssets {
    /// Download URL of the App Installer msixbundle
    pub bundle_url: String,
    /// Download URL of the runtime dependency archive
    pub deps_url: String,
    /// Release tag, e.g. `v1.12.340`
    pub tag: String,
    /// Publication timestamp reported by the API
    pub published_at: Option<DateTime<Utc>>,
}

impl ReleaseAssets {
    /// Creates new release assets
    pub fn new(
        bundle_url: impl Into<String>,
        deps_url: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            bundle_url: bundle_url.into(),
            deps_url: deps_url.into(),
            tag: tag.into(),
            published_at: None,
        }
    }

    /// Sets the publication timestamp
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}
