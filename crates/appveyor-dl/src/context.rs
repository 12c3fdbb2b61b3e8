//! Run context shared by the download commands

use anyhow::{Context as _, Result, bail};
use appveyor_dl_api::{ApiClient, build_client, parse_base_url};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// API client and destination used for one run
pub struct Context {
    pub client: ApiClient,
    pub output_dir: PathBuf,
}

impl Context {
    /// Create a context from parsed command line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API URL is invalid
    /// - The HTTP client cannot be constructed
    /// - The output directory does not exist
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = parse_base_url(&cli.api_url)?;
        let http = build_client(cli.timeout.map(Duration::from_secs))
            .context("Failed to build HTTP client")?;

        if !cli.output_dir.is_dir() {
            bail!(
                "Output directory {} does not exist",
                cli.output_dir.display()
            );
        }

        Ok(Self {
            client: ApiClient::new(http, base_url),
            output_dir: cli.output_dir.clone(),
        })
    }
}
