//! Blocking client for the AppVeyor build artifacts API.
//!
//! This crate covers the three endpoints needed to mirror the artifacts of a
//! build to disk:
//!
//! - [`url`]: API base URL handling and endpoint path construction
//! - [`client`]: HTTP client construction, request building and execution
//! - [`models`]: Build, job and artifact response types
//! - [`download`]: Streaming an artifact body into a local file
//!
//! # Request Flow
//!
//! ```text
//! build_info_request(project, build)  → fetch_build      → BuildRecord
//!     ↓ for each job
//! job_artifacts_request(job_id)       → fetch_artifacts  → [ArtifactDescriptor]
//!     ↓ for each artifact
//! artifact_request(job_id, artifact)  → execute          → save_to_file
//! ```
//!
//! Requests are built and executed as separate steps so the caller can
//! report each URL before the blocking call.
//!
//! # Example
//!
//! ```no_run
//! use appveyor_dl_api::{ApiClient, api_base_url, build_client};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(build_client(None)?, api_base_url()?);
//!
//! let request = client.build_info_request("acme/widget", "1.0.42")?;
//! println!("GET {}", request.url());
//! let build = client.fetch_build(request)?;
//!
//! for job in &build.jobs {
//!     let artifacts = client.fetch_artifacts(client.job_artifacts_request(&job.job_id)?)?;
//!     println!("{}: {} artifacts", job.name, artifacts.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod download;
pub mod error;
pub mod models;
pub mod url;

// Re-export commonly used types
pub use client::{ACCEPT_ANY, ACCEPT_JSON, ApiClient, USER_AGENT, build_client};
pub use download::{DownloadError, base_name, local_file_name, save_to_file};
pub use error::ApiError;
pub use models::{ArtifactDescriptor, BuildEnvelope, BuildRecord, JobRecord};
pub use self::url::{DEFAULT_API_BASE_URL, UrlError, api_base_url, api_url, parse_base_url};
