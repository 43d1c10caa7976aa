//! Core domain models for wingetup
//!
//! This module contains the fundamental types used throughout the application:
//! - Release asset information resolved from the releases API
//! - The 4-component winget version with its ordering rules
//! - Per-app install results and the aggregated batch summary

mod release;
mod summary;
mod version;

pub use release::ReleaseAssets;
pub use summary::{AppInstallResult, BatchSummary};
pub use version::{WingetVersion, MIN_WINGET_VERSION};
