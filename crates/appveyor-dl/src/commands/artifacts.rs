//! Per-job artifact listing and download

use anyhow::{Context as _, Result};
use appveyor_dl_api::{ArtifactDescriptor, DownloadError, local_file_name, save_to_file};
use log::debug;

use crate::context::Context;
use crate::output;

/// Outcome counts for one job
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    pub downloaded: usize,
    pub failed: usize,
    pub bytes: u64,
}

/// List the artifacts of a job and download each of them
///
/// A failed artifact is reported and skipped; the remaining artifacts of the
/// job are still downloaded.
///
/// # Errors
///
/// Returns an error only if the artifact list itself cannot be fetched
pub fn retrieve_job(ctx: &Context, job_id: &str) -> Result<JobSummary> {
    let request = ctx.client.job_artifacts_request(job_id)?;
    println!("{}", output::request_line(request.url()));

    let artifacts = ctx
        .client
        .fetch_artifacts(request)
        .with_context(|| format!("Failed to list artifacts of job {job_id}"))?;
    debug!("job {} lists {} artifacts", job_id, artifacts.len());

    let mut summary = JobSummary::default();
    for artifact in &artifacts {
        match download_artifact(ctx, job_id, artifact) {
            Ok(written) => {
                summary.downloaded += 1;
                summary.bytes += written;
            }
            Err(err) => {
                println!(
                    "{}",
                    output::artifact_error_line(artifact.local_name(), &err)
                );
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Download one artifact into the output directory
///
/// Names that cannot be saved locally or requested as-is are rejected before
/// any request is sent.
///
/// # Returns
///
/// Number of bytes actually written, which may differ from the size the
/// server declared
pub fn download_artifact(
    ctx: &Context,
    job_id: &str,
    artifact: &ArtifactDescriptor,
) -> Result<u64, DownloadError> {
    let file_name = local_file_name(&artifact.file_name)?;

    let request = ctx.client.artifact_request(job_id, artifact)?;
    println!("{}", output::request_line(request.url()));

    let response = ctx.client.execute(request)?;
    println!("{}", output::downloading_line(file_name, artifact.size));

    let written = save_to_file(response, &ctx.output_dir, &artifact.file_name)?;
    println!("{}", output::downloaded_line(written));

    Ok(written)
}
