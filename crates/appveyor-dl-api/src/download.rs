//! Artifact download to the local filesystem
//!
//! Artifacts are written into a destination directory under the final
//! component of their server-side name. Nothing namespaces artifacts by job,
//! so two artifacts sharing a base name overwrite each other.

use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ApiError;

/// Returns the last `/`-separated element of `name`
///
/// Trailing slashes are removed first. An empty name yields `"."` and a name
/// made only of slashes yields `"/"`.
pub fn base_name(name: &str) -> &str {
    if name.is_empty() {
        return ".";
    }

    let trimmed = name.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Validates the base name of `file_name` for use as a local file
///
/// # Errors
///
/// Returns `DownloadError::InvalidFileName` when the base name does not name
/// a regular file (`.`, `..` or `/`)
pub fn local_file_name(file_name: &str) -> Result<&str, DownloadError> {
    match base_name(file_name) {
        "." | ".." | "/" => Err(DownloadError::InvalidFileName {
            file_name: file_name.to_string(),
        }),
        name => Ok(name),
    }
}

/// Streams `body` into `dest_dir/file_name`, truncating any existing file
///
/// The file and `body` are both dropped before this function returns, on
/// success and on error.
///
/// # Returns
///
/// Number of bytes written
///
/// # Errors
///
/// Returns error if the file cannot be created or the copy fails midway
pub fn save_to_file<R: Read>(
    mut body: R,
    dest_dir: &Path,
    file_name: &str,
) -> Result<u64, DownloadError> {
    let path = dest_dir.join(local_file_name(file_name)?);

    let mut file = File::create(&path).map_err(|source| DownloadError::CreateFile {
        path: path.clone(),
        source,
    })?;

    let written = io::copy(&mut body, &mut file).map_err(|source| DownloadError::Copy {
        path: path.clone(),
        source,
    })?;

    debug!("wrote {} bytes to {}", written, path.display());
    Ok(written)
}

/// Artifact download error types
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Building, sending or checking the download request failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Artifact name has no usable final component
    #[error("Invalid artifact file name '{file_name}'")]
    InvalidFileName {
        /// Name as reported by the server
        file_name: String,
    },

    /// Local file could not be created
    #[error("Failed to create {}: {source}", .path.display())]
    CreateFile {
        /// Local destination
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Stream copy into the local file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Copy {
        /// Local destination
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
