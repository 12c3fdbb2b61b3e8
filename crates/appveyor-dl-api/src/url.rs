//! URL construction helpers for AppVeyor API resources

use thiserror::Error;
use url::Url;

/// Public AppVeyor REST API root
pub const DEFAULT_API_BASE_URL: &str = "https://ci.appveyor.com/api/";

/// Builds the default AppVeyor API base URL
pub fn api_base_url() -> Result<Url, UrlError> {
    parse_base_url(DEFAULT_API_BASE_URL)
}

/// Parses an API base URL
///
/// The path is normalized to end with a single `/` so that request paths can
/// be appended without dropping the last base segment.
///
/// # Errors
///
/// Returns error if `raw` is not an absolute URL or cannot be a base
pub fn parse_base_url(raw: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(raw).map_err(|source| UrlError::Parse {
        url: raw.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(UrlError::CannotBeABase { url });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Appends a request path to the API base URL
///
/// Leading `/` characters are stripped from `path` before it is appended, so
/// `/projects/a/b` and `projects/a/b` produce the same URL.
///
/// # Errors
///
/// Returns error if the combined string is not a valid URL
pub fn api_url(base: &Url, path: &str) -> Result<Url, UrlError> {
    let raw = format!("{}{}", base.as_str(), path.trim_start_matches('/'));
    Url::parse(&raw).map_err(|source| UrlError::Parse { url: raw, source })
}

/// Path of the build info endpoint for a project and build version
pub fn build_info_path(project: &str, build: &str) -> String {
    format!("/projects/{project}/build/{build}")
}

/// Path of the artifact listing endpoint for a job
pub fn job_artifacts_path(job_id: &str) -> String {
    format!("/buildjobs/{job_id}/artifacts")
}

/// Path of the download endpoint for one artifact of a job
///
/// `file_name` is inserted as the server reported it. The only rewrite is
/// `\` to `%5C`, which URL parsing would otherwise turn into `/`.
///
/// # Errors
///
/// Returns `UrlError::DotSegment` if a `/`-separated segment of `file_name`
/// is `.` or `..` (also in `%2e` form). Such segments are collapsed by URL
/// parsing, so the request would name a different artifact.
pub fn artifact_download_path(job_id: &str, file_name: &str) -> Result<String, UrlError> {
    if file_name.split('/').any(is_dot_segment) {
        return Err(UrlError::DotSegment {
            file_name: file_name.to_string(),
        });
    }

    let file_name = file_name.replace('\\', "%5C");
    Ok(format!("/buildjobs/{job_id}/artifacts/{file_name}"))
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().replace("%2e", ".").as_str(),
        "." | ".."
    )
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// String could not be parsed as a URL
    #[error("Invalid URL '{url}': {source}")]
    Parse {
        /// The rejected input
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// URL cannot be used as a base
    #[error("URL cannot be a base: {url}")]
    CannotBeABase {
        /// The problematic URL
        url: Url,
    },

    /// Artifact name contains a segment URL parsing would collapse
    #[error("Artifact name '{file_name}' contains a '.' or '..' segment")]
    DotSegment {
        /// Name as reported by the server
        file_name: String,
    },
}
