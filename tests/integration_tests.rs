//! Integration tests for wingetup
//!
//! These tests verify:
//! - Dependency archive extraction and layout handling
//! - Ordered, abort-on-failure dependency installation
//! - Batch install flows through the public API

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use wingetup::domain::WingetVersion;
use wingetup::error::{BatchError, SetupError};
use wingetup::platform::PackagePlatform;
use wingetup::progress::Progress;
use wingetup::report::Reporter;
use wingetup::setup::{extract_archive, install_from_extracted};
use wingetup::winget::{ProbeFailure, WingetRunner};

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Platform double recording install order and failing on request
struct RecordingPlatform {
    fail_on: Option<String>,
    installed: RefCell<Vec<String>>,
}

impl RecordingPlatform {
    fn new() -> Self {
        Self {
            fail_on: None,
            installed: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            installed: RefCell::new(Vec::new()),
        }
    }
}

impl PackagePlatform for RecordingPlatform {
    fn install_package_file(&self, path: &Path) -> Result<(), SetupError> {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        self.installed.borrow_mut().push(name.clone());
        if self.fail_on.as_deref() == Some(name.as_str()) {
            return Err(SetupError::package_install(name, "exit code 1"));
        }
        Ok(())
    }

    fn register_package_family(&self, _family: &str) -> Result<(), SetupError> {
        Ok(())
    }
}

/// Write a zip mimicking the dependency archive layout
fn write_deps_archive(path: &Path, platform_dir: &str, packages: &[&str]) {
    let file = fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    writer
        .add_directory(format!("{}/", platform_dir), options)
        .unwrap();
    for package in packages {
        writer
            .start_file(format!("{}/{}", platform_dir, package), options)
            .unwrap();
        writer.write_all(b"package payload").unwrap();
    }
    writer.finish().unwrap();
}

mod dependency_archive {
    use super::*;

    #[test]
    fn test_extract_and_install_in_sorted_order() {
        let temp_dir = create_test_dir();
        let archive = temp_dir.path().join("DesktopAppInstaller_Dependencies.zip");
        // Deliberately unsorted in the archive
        write_deps_archive(
            &archive,
            "x64",
            &[
                "Microsoft.VCLibs.140.00.UWPDesktop.appx",
                "Microsoft.UI.Xaml.2.8.appx",
            ],
        );

        let extract_dir = temp_dir.path().join("extracted");
        extract_archive(&archive, &extract_dir).unwrap();

        let platform = RecordingPlatform::new();
        let reporter = Reporter::new(false);
        let mut progress = Progress::disabled();

        install_from_extracted(&platform, &reporter, &mut progress, &extract_dir).unwrap();

        assert_eq!(
            *platform.installed.borrow(),
            vec![
                "Microsoft.UI.Xaml.2.8.appx",
                "Microsoft.VCLibs.140.00.UWPDesktop.appx"
            ]
        );
    }

    #[test]
    fn test_missing_platform_dir_is_layout_error() {
        let temp_dir = create_test_dir();
        let archive = temp_dir.path().join("DesktopAppInstaller_Dependencies.zip");
        // Archive only ships arm64 packages
        write_deps_archive(&archive, "arm64", &["Microsoft.UI.Xaml.2.8.appx"]);

        let extract_dir = temp_dir.path().join("extracted");
        extract_archive(&archive, &extract_dir).unwrap();

        let platform = RecordingPlatform::new();
        let reporter = Reporter::new(false);
        let mut progress = Progress::disabled();

        let result = install_from_extracted(&platform, &reporter, &mut progress, &extract_dir);

        assert!(matches!(result, Err(SetupError::ArchiveLayout { .. })));
        assert!(platform.installed.borrow().is_empty());
    }

    #[test]
    fn test_failure_on_second_package_aborts_before_third() {
        let temp_dir = create_test_dir();
        let archive = temp_dir.path().join("DesktopAppInstaller_Dependencies.zip");
        write_deps_archive(&archive, "x64", &["a.appx", "b.appx", "c.appx"]);

        let extract_dir = temp_dir.path().join("extracted");
        extract_archive(&archive, &extract_dir).unwrap();

        let platform = RecordingPlatform::failing_on("b.appx");
        let reporter = Reporter::new(false);
        let mut progress = Progress::disabled();

        let result = install_from_extracted(&platform, &reporter, &mut progress, &extract_dir);

        assert!(matches!(result, Err(SetupError::PackageInstall { .. })));
        assert_eq!(*platform.installed.borrow(), vec!["a.appx", "b.appx"]);
    }

    #[test]
    fn test_non_package_files_are_ignored() {
        let temp_dir = create_test_dir();
        let archive = temp_dir.path().join("DesktopAppInstaller_Dependencies.zip");

        let file = fs::File::create(&archive).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        writer.add_directory("x64/", options).unwrap();
        writer.start_file("x64/Microsoft.UI.Xaml.2.8.appx", options).unwrap();
        writer.write_all(b"package payload").unwrap();
        writer.start_file("x64/license.xml", options).unwrap();
        writer.write_all(b"<xml/>").unwrap();
        writer.finish().unwrap();

        let extract_dir = temp_dir.path().join("extracted");
        extract_archive(&archive, &extract_dir).unwrap();

        let platform = RecordingPlatform::new();
        let reporter = Reporter::new(false);
        let mut progress = Progress::disabled();

        install_from_extracted(&platform, &reporter, &mut progress, &extract_dir).unwrap();

        assert_eq!(
            *platform.installed.borrow(),
            vec!["Microsoft.UI.Xaml.2.8.appx"]
        );
    }
}

mod batch_flow {
    use super::*;

    struct ScriptedRunner {
        failing: Vec<(String, i32)>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn new(failing: &[(&str, i32)]) -> Self {
            Self {
                failing: failing
                    .iter()
                    .map(|(id, code)| (id.to_string(), *code))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl WingetRunner for ScriptedRunner {
        fn probe_version(&self) -> Result<WingetVersion, ProbeFailure> {
            Ok(WingetVersion::new(1, 12, 0, 0))
        }

        fn install(&self, id: &str) -> Result<i32, std::io::Error> {
            self.calls.borrow_mut().push(id.to_string());
            Ok(self
                .failing
                .iter()
                .find(|(failing_id, _)| failing_id == id)
                .map(|(_, code)| *code)
                .unwrap_or(0))
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_batch_summary_end_to_end() {
        let runner = ScriptedRunner::new(&[("B.App2", 1)]);
        let reporter = Reporter::new(false);
        let mut progress = Progress::disabled();

        let summary = wingetup::batch::install_apps(
            &runner,
            &reporter,
            &mut progress,
            &ids(&["A.App1", "", "B.App2", "   ", "C.App3"]),
        )
        .unwrap();

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded_count(), 2);
        assert_eq!(summary.failed_ids(), vec!["B.App2"]);
        assert_eq!(summary.failed_line().unwrap(), "FAILED_APPS: B.App2");
        assert_eq!(*runner.calls.borrow(), vec!["A.App1", "B.App2", "C.App3"]);
    }

    #[test]
    fn test_cli_not_found_is_distinct_from_app_failures() {
        struct MissingCli;

        impl WingetRunner for MissingCli {
            fn probe_version(&self) -> Result<WingetVersion, ProbeFailure> {
                Err(ProbeFailure::NotInvocable {
                    message: "program not found".to_string(),
                })
            }

            fn install(&self, _id: &str) -> Result<i32, std::io::Error> {
                panic!("install must not be attempted without winget");
            }
        }

        let reporter = Reporter::new(false);
        let mut progress = Progress::disabled();

        let result = wingetup::batch::install_apps(
            &MissingCli,
            &reporter,
            &mut progress,
            &ids(&["A.App1"]),
        );

        assert!(matches!(result, Err(BatchError::CliNotFound { .. })));
    }
}
