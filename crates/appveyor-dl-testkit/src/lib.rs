//! Test utilities for appveyor-dl
//!
//! This crate provides shared testing utilities used across the appveyor-dl
//! workspace: response fixtures and mock endpoint registration.

pub mod fixtures;
pub mod mock;

pub use fixtures::{BuildFixture, JobFixture, artifacts_body};
pub use mock::{base_url, mock_artifact_file, mock_artifacts, mock_build, mock_status};

use tempfile::TempDir;

/// Creates an empty download directory
///
/// # Panics
///
/// Panics if the temporary directory cannot be created
pub fn download_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary download directory")
}

/// Size in bytes of `name` inside `dir`
///
/// # Panics
///
/// Panics if the file does not exist
pub fn file_len(dir: &TempDir, name: &str) -> u64 {
    std::fs::metadata(dir.path().join(name))
        .unwrap_or_else(|e| panic!("{} should exist: {}", name, e))
        .len()
}
