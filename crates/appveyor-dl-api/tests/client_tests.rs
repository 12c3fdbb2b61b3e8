//! Integration tests for ApiClient against a mock AppVeyor server

use appveyor_dl_api::{
    ApiClient, ApiError, ArtifactDescriptor, DownloadError, build_client, parse_base_url,
    save_to_file,
};
use appveyor_dl_testkit::{
    BuildFixture, JobFixture, artifacts_body, base_url, download_dir, file_len,
    mock_artifact_file, mock_artifacts, mock_build, mock_status,
};

fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    let base = parse_base_url(&base_url(server)).unwrap();
    ApiClient::new(build_client(None).unwrap(), base)
}

#[test]
fn test_fetch_build_decodes_envelope() {
    let mut server = mockito::Server::new();
    let body = BuildFixture::default()
        .tag("v1.0.42")
        .job(JobFixture::new("job-win64", "x86_64"))
        .job(JobFixture::new("job-win32", "i686"))
        .to_body();
    let mock = mock_build(&mut server, "acme/widget", "1.0.42", &body);

    let client = client_for(&server);
    let request = client.build_info_request("acme/widget", "1.0.42").unwrap();
    let build = client.fetch_build(request).unwrap();

    mock.assert();
    assert_eq!(build.branch, "master");
    assert_eq!(build.tag, "v1.0.42");
    assert!(build.is_tag);
    assert!(build.is_success());
    let ids: Vec<&str> = build.jobs.iter().map(|j| j.job_id.as_str()).collect();
    assert_eq!(ids, ["job-win64", "job-win32"]);
}

#[test]
fn test_fetch_build_invalid_json() {
    let mut server = mockito::Server::new();
    let _mock = mock_build(&mut server, "acme/widget", "broken", "<html>oops</html>");

    let client = client_for(&server);
    let request = client.build_info_request("acme/widget", "broken").unwrap();
    let err = client.fetch_build(request).unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[test]
fn test_fetch_build_not_found() {
    let mut server = mockito::Server::new();
    let _mock = mock_status(&mut server, "/projects/acme/widget/build/9.9.9", 404);

    let client = client_for(&server);
    let request = client.build_info_request("acme/widget", "9.9.9").unwrap();
    let err = client.fetch_build(request).unwrap_err();

    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.path().ends_with("/build/9.9.9"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn test_fetch_build_connection_refused() {
    // Port 9 (discard) is not served by the test environment
    let base = parse_base_url("http://127.0.0.1:9/").unwrap();
    let client = ApiClient::new(build_client(None).unwrap(), base);

    let request = client.build_info_request("acme/widget", "1.0.0").unwrap();
    let err = client.fetch_build(request).unwrap_err();

    assert!(matches!(err, ApiError::Request { .. }), "got {err:?}");
}

#[test]
fn test_fetch_artifacts_preserves_order() {
    let mut server = mockito::Server::new();
    let body = artifacts_body(&[("dist/widget.zip", 2048), ("logs/test.xml", 12)]);
    let mock = mock_artifacts(&mut server, "job-win64", &body);

    let client = client_for(&server);
    let request = client.job_artifacts_request("job-win64").unwrap();
    let artifacts = client.fetch_artifacts(request).unwrap();

    mock.assert();
    assert_eq!(
        artifacts,
        vec![
            ArtifactDescriptor {
                file_name: "dist/widget.zip".to_string(),
                size: 2048,
            },
            ArtifactDescriptor {
                file_name: "logs/test.xml".to_string(),
                size: 12,
            },
        ]
    );
}

#[test]
fn test_fetch_artifacts_empty_list() {
    let mut server = mockito::Server::new();
    let _mock = mock_artifacts(&mut server, "job-empty", "[]");

    let client = client_for(&server);
    let request = client.job_artifacts_request("job-empty").unwrap();
    let artifacts = client.fetch_artifacts(request).unwrap();

    assert!(artifacts.is_empty());
}

#[test]
fn test_artifact_download_round_trip() {
    let mut server = mockito::Server::new();
    let payload = vec![7u8; 3000];
    let mock = mock_artifact_file(&mut server, "job-win64", "dist/widget.zip", &payload);

    let client = client_for(&server);
    let artifact = ArtifactDescriptor {
        file_name: "dist/widget.zip".to_string(),
        size: 3000,
    };
    let request = client.artifact_request("job-win64", &artifact).unwrap();
    let response = client.execute(request).unwrap();

    let dir = download_dir();
    let written = save_to_file(response, dir.path(), &artifact.file_name).unwrap();

    mock.assert();
    assert_eq!(written, 3000);
    assert_eq!(file_len(&dir, "widget.zip"), written);
}

#[test]
fn test_artifact_download_declared_size_mismatch_is_not_an_error() {
    let mut server = mockito::Server::new();
    let _mock = mock_artifact_file(&mut server, "job-win64", "notes.txt", b"short");

    let client = client_for(&server);
    let artifact = ArtifactDescriptor {
        file_name: "notes.txt".to_string(),
        size: 999_999,
    };
    let response = client
        .execute(client.artifact_request("job-win64", &artifact).unwrap())
        .unwrap();

    let dir = download_dir();
    let written = save_to_file(response, dir.path(), &artifact.file_name).unwrap();

    assert_eq!(written, 5);
    assert_eq!(file_len(&dir, "notes.txt"), 5);
}

#[test]
fn test_artifact_download_missing_is_status_error() {
    let mut server = mockito::Server::new();
    let _mock = mock_status(&mut server, "/buildjobs/job-win64/artifacts/gone.zip", 404);

    let client = client_for(&server);
    let artifact = ArtifactDescriptor {
        file_name: "gone.zip".to_string(),
        size: 1,
    };
    let err: DownloadError = client
        .execute(client.artifact_request("job-win64", &artifact).unwrap())
        .unwrap_err()
        .into();

    assert!(matches!(err, DownloadError::Api(ApiError::Status { .. })));
}
