//! Build download command - fetch build info and walk its jobs

use anyhow::{Context as _, Result};
use appveyor_dl_api::{ApiClient, BuildRecord};
use log::info;

use super::artifacts;
use crate::context::Context;
use crate::output;

/// Execute a download of every artifact of `build` in `project`
///
/// Jobs are processed one after another in the order the server listed
/// them.
pub fn run(ctx: &Context, project: &str, build: &str) -> Result<()> {
    let record = fetch_build_info(&ctx.client, project, build)?;

    for job in &record.jobs {
        println!("{}", output::job_header(job));
        let summary = artifacts::retrieve_job(ctx, &job.job_id)?;
        info!(
            "job {}: {} downloaded ({} bytes), {} failed",
            job.job_id, summary.downloaded, summary.bytes, summary.failed
        );
    }

    Ok(())
}

/// Fetch build info and print its summary
///
/// # Errors
///
/// Returns an error if the request cannot be built or sent, the server
/// rejects it, or the response is not a build envelope
pub fn fetch_build_info(client: &ApiClient, project: &str, build: &str) -> Result<BuildRecord> {
    let request = client.build_info_request(project, build)?;
    println!("{}", output::request_line(request.url()));

    let record = client
        .fetch_build(request)
        .with_context(|| format!("Failed to fetch build {build} of project {project}"))?;

    println!("{}", output::build_summary(&record));
    if !record.is_success() {
        println!("{}", output::FAILED_BUILD_WARNING);
    }

    Ok(record)
}
