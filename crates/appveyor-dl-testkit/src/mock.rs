//! Mock AppVeyor endpoints on a mockito server
//!
//! Every helper registers one mock and returns it; the mock is removed when
//! the returned value drops, so keep it alive for the duration of the test.

use mockito::{Mock, ServerGuard};

/// Registers `GET /projects/{project}/build/{build}` returning `body`
pub fn mock_build(server: &mut ServerGuard, project: &str, build: &str, body: &str) -> Mock {
    server
        .mock("GET", format!("/projects/{project}/build/{build}").as_str())
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Registers `GET /buildjobs/{job_id}/artifacts` returning `body`
pub fn mock_artifacts(server: &mut ServerGuard, job_id: &str, body: &str) -> Mock {
    server
        .mock("GET", format!("/buildjobs/{job_id}/artifacts").as_str())
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Registers `GET /buildjobs/{job_id}/artifacts/{file_name}` returning `bytes`
pub fn mock_artifact_file(
    server: &mut ServerGuard,
    job_id: &str,
    file_name: &str,
    bytes: &[u8],
) -> Mock {
    server
        .mock(
            "GET",
            format!("/buildjobs/{job_id}/artifacts/{file_name}").as_str(),
        )
        .match_header("accept", "*/*")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(bytes)
        .create()
}

/// Registers `GET {path}` answering with `status` and an empty body
pub fn mock_status(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server.mock("GET", path).with_status(status).create()
}

/// API base URL for a mock server, with the trailing `/` the client expects
pub fn base_url(server: &ServerGuard) -> String {
    format!("{}/", server.url())
}
