//! AppVeyor API response types
//!
//! Only the fields the downloader reads are modelled; everything else in the
//! responses is ignored. Missing or `null` fields decode to their zero value.

use serde::{Deserialize, Deserializer};

use crate::download::base_name;

/// Number of commit id characters shown in build summaries
pub const SHORT_COMMIT_LEN: usize = 6;

/// Build status reported for a build whose jobs all passed
pub const STATUS_SUCCESS: &str = "success";

/// Wrapper object returned by the build info endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildEnvelope {
    #[serde(default)]
    pub build: BuildRecord,
}

/// One CI run of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub commit_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_tag: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
    /// Jobs in the order the server listed them
    #[serde(deserialize_with = "null_as_default")]
    pub jobs: Vec<JobRecord>,
}

impl BuildRecord {
    /// Abbreviated commit id, at most [`SHORT_COMMIT_LEN`] characters
    pub fn short_commit_id(&self) -> &str {
        match self.commit_id.char_indices().nth(SHORT_COMMIT_LEN) {
            Some((end, _)) => &self.commit_id[..end],
            None => &self.commit_id,
        }
    }

    /// Whether the build finished with status `success`
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// One job (configuration leg) of a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub allow_failure: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub artifacts_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub job_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// File produced by a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactDescriptor {
    /// Server-side name, possibly with a directory prefix
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    /// Declared size in bytes
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
}

impl ArtifactDescriptor {
    /// Final path component of [`file_name`](Self::file_name)
    pub fn local_name(&self) -> &str {
        base_name(&self.file_name)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
