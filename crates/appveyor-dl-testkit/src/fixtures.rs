//! JSON fixtures shaped like AppVeyor API responses
//!
//! The builders produce `serde_json::Value`s carrying the fields the
//! downloader reads plus a few it ignores, so tests also cover tolerance of
//! unknown fields.

use serde_json::{Value, json};

/// Build info fixture
#[derive(Debug, Clone)]
pub struct BuildFixture {
    pub branch: String,
    pub commit_id: String,
    pub message: String,
    pub status: String,
    pub tag: Option<String>,
    pub jobs: Vec<JobFixture>,
}

impl Default for BuildFixture {
    fn default() -> Self {
        Self {
            branch: "master".to_string(),
            commit_id: "9f2c4e1ab77d03c5e8f1".to_string(),
            message: "Bump version to 1.0.42".to_string(),
            status: "success".to_string(),
            tag: None,
            jobs: Vec::new(),
        }
    }
}

impl BuildFixture {
    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn commit_id(mut self, commit_id: &str) -> Self {
        self.commit_id = commit_id.to_string();
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn job(mut self, job: JobFixture) -> Self {
        self.jobs.push(job);
        self
    }

    /// Body of `GET /projects/{project}/build/{build}`
    pub fn to_json(&self) -> Value {
        json!({
            "project": {
                "projectId": 311,
                "accountName": "acme",
                "slug": "widget",
                "repositoryName": "acme/widget"
            },
            "build": {
                "buildId": 2047,
                "buildNumber": 42,
                "version": "1.0.42",
                "authorName": "Build Bot",
                "branch": self.branch,
                "commitId": self.commit_id,
                "message": self.message,
                "status": self.status,
                "isTag": self.tag.is_some(),
                "tag": self.tag,
                "jobs": self.jobs.iter().map(JobFixture::to_json).collect::<Vec<_>>()
            }
        })
    }

    pub fn to_body(&self) -> String {
        self.to_json().to_string()
    }
}

/// Build job fixture
#[derive(Debug, Clone)]
pub struct JobFixture {
    pub job_id: String,
    pub name: String,
    pub status: String,
    pub artifacts_count: u64,
}

impl JobFixture {
    pub fn new(job_id: &str, name: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            name: name.to_string(),
            status: "success".to_string(),
            artifacts_count: 0,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "jobId": self.job_id,
            "name": self.name,
            "osType": "Windows",
            "allowFailure": false,
            "artifactsCount": self.artifacts_count,
            "status": self.status
        })
    }
}

/// Body of `GET /buildjobs/{jobId}/artifacts`
///
/// Each entry is `(fileName, declared size)`.
pub fn artifacts_body(artifacts: &[(&str, u64)]) -> String {
    let entries: Vec<Value> = artifacts
        .iter()
        .map(|(file_name, size)| {
            json!({
                "fileName": file_name,
                "name": file_name,
                "type": "File",
                "size": size
            })
        })
        .collect();

    Value::Array(entries).to_string()
}
