//! wingetup - Winget bootstrapper and unattended app installer
//!
//! This library provides the building blocks for the `wingetup` CLI:
//! - Resolving the latest winget release assets from GitHub
//! - Installing the winget runtime dependencies and the App Installer bundle
//! - Driving `winget install` over a list of application identifiers

pub mod batch;
pub mod cli;
pub mod domain;
pub mod error;
pub mod platform;
pub mod progress;
pub mod release;
pub mod report;
pub mod setup;
pub mod winget;
