//! HTTP client construction and request execution for the AppVeyor API

use log::debug;
use reqwest::Method;
use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::ApiError;
use crate::models::{ArtifactDescriptor, BuildEnvelope, BuildRecord};
use crate::url::{api_url, artifact_download_path, build_info_path, job_artifacts_path};

/// Default user agent for appveyor-dl requests
pub const USER_AGENT: &str = "appveyor-dl";

/// Accept header value for API metadata requests
pub const ACCEPT_JSON: &str = "application/json";

/// Accept header value for raw artifact downloads
pub const ACCEPT_ANY: &str = "*/*";

/// Builds HTTP client with appropriate settings for AppVeyor
///
/// # Arguments
///
/// * `timeout` - Per-request timeout, `None` waits indefinitely
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Blocking AppVeyor API client
///
/// Wraps an HTTP client together with the API base URL. Requests are built
/// and executed in two steps so callers can report the URL before the call
/// blocks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url`
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// API root all request paths are appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a `method` request for `path` with `Accept: application/json`
    ///
    /// # Errors
    ///
    /// Returns error if the URL or the request cannot be constructed
    pub fn request(&self, method: Method, path: &str) -> Result<Request, ApiError> {
        let url = api_url(&self.base_url, path)?;
        self.http
            .request(method, url.clone())
            .header(ACCEPT, ACCEPT_JSON)
            .build()
            .map_err(|source| ApiError::Request { url, source })
    }

    /// Builds a GET request for `path`
    pub fn get(&self, path: &str) -> Result<Request, ApiError> {
        self.request(Method::GET, path)
    }

    /// Request for the build info of `build` in `project`
    pub fn build_info_request(&self, project: &str, build: &str) -> Result<Request, ApiError> {
        self.get(&build_info_path(project, build))
    }

    /// Request for the artifact list of a job
    pub fn job_artifacts_request(&self, job_id: &str) -> Result<Request, ApiError> {
        self.get(&job_artifacts_path(job_id))
    }

    /// Request for the raw bytes of one artifact
    pub fn artifact_request(
        &self,
        job_id: &str,
        artifact: &ArtifactDescriptor,
    ) -> Result<Request, ApiError> {
        let mut request = self.get(&artifact_download_path(job_id, &artifact.file_name)?)?;
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static(ACCEPT_ANY));
        Ok(request)
    }

    /// Sends a request and checks the response status
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent or the status is not 2xx
    pub fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let url = request.url().clone();
        debug!("{} {}", request.method(), url);

        let response = self
            .http
            .execute(request)
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        Ok(response)
    }

    /// Sends a request and decodes the full response body as JSON
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the body cannot be read, or the
    /// body does not decode as `T`
    pub fn fetch_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let url = request.url().clone();
        let response = self.execute(request)?;

        let body = response.bytes().map_err(|source| ApiError::Body {
            url: url.clone(),
            source,
        })?;
        debug!("{} returned {} bytes", url, body.len());

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// Executes a build info request and unwraps the envelope
    pub fn fetch_build(&self, request: Request) -> Result<BuildRecord, ApiError> {
        let envelope: BuildEnvelope = self.fetch_json(request)?;
        Ok(envelope.build)
    }

    /// Executes an artifact list request
    pub fn fetch_artifacts(&self, request: Request) -> Result<Vec<ArtifactDescriptor>, ApiError> {
        self.fetch_json(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::{UrlError, api_base_url, parse_base_url};

    fn client() -> ApiClient {
        ApiClient::new(build_client(None).unwrap(), api_base_url().unwrap())
    }

    #[test]
    fn test_build_client_with_timeout() {
        let client = build_client(Some(Duration::from_secs(5)));
        assert!(client.is_ok());
    }

    #[test]
    fn test_get_sets_json_accept() {
        let request = client().get("/projects/acme/widget/build/1.0.0").unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.headers()[ACCEPT], ACCEPT_JSON);
    }

    #[test]
    fn test_request_uses_given_method() {
        let request = client()
            .request(Method::HEAD, "buildjobs/job1/artifacts")
            .unwrap();
        assert_eq!(request.method(), Method::HEAD);
        assert_eq!(request.headers()[ACCEPT], ACCEPT_JSON);
        assert_eq!(
            request.url().as_str(),
            "https://ci.appveyor.com/api/buildjobs/job1/artifacts"
        );
    }

    #[test]
    fn test_artifact_request_rejects_dot_segments() {
        let artifact = ArtifactDescriptor {
            file_name: "build/../pkg.zip".to_string(),
            size: 1,
        };
        let err = client().artifact_request("job1", &artifact).unwrap_err();
        assert!(matches!(err, ApiError::Url(UrlError::DotSegment { .. })));
    }

    #[test]
    fn test_build_info_request_url() {
        let request = client().build_info_request("acme/widget", "1.0.42").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://ci.appveyor.com/api/projects/acme/widget/build/1.0.42"
        );
    }

    #[test]
    fn test_artifact_request_overrides_accept() {
        let artifact = ArtifactDescriptor {
            file_name: "dist/widget.zip".to_string(),
            size: 10,
        };
        let request = client().artifact_request("job1", &artifact).unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://ci.appveyor.com/api/buildjobs/job1/artifacts/dist/widget.zip"
        );
        assert_eq!(request.headers().get_all(ACCEPT).iter().count(), 1);
        assert_eq!(request.headers()[ACCEPT], ACCEPT_ANY);
    }

    #[test]
    fn test_custom_base_url_is_respected() {
        let base = parse_base_url("http://127.0.0.1:9/mirror").unwrap();
        let client = ApiClient::new(build_client(None).unwrap(), base);
        let request = client.job_artifacts_request("job1").unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:9/mirror/buildjobs/job1/artifacts"
        );
    }
}
