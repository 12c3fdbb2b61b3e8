//! Console lines printed while downloading

use appveyor_dl_api::{BuildRecord, DownloadError, JobRecord};
use std::fmt::Display;

pub const FAILED_BUILD_WARNING: &str = "WARN: Downloading artifacts of failed build";

pub fn request_line(url: impl Display) -> String {
    format!("GET {url}")
}

pub fn build_summary(build: &BuildRecord) -> String {
    format!(
        "Branch    {}\nCommit ID {} {}\nTag:      {}",
        build.branch,
        build.short_commit_id(),
        build.message,
        build.tag
    )
}

pub fn job_header(job: &JobRecord) -> String {
    format!("JOB: {} {}", job.job_id, job.name)
}

pub fn downloading_line(file_name: &str, declared_size: u64) -> String {
    format!("Downloading {file_name} {declared_size} bytes")
}

pub fn downloaded_line(written: u64) -> String {
    format!("Downloaded {written} bytes")
}

pub fn artifact_error_line(file_name: &str, err: &DownloadError) -> String {
    format!("{file_name}: Error downloading: {err}")
}
