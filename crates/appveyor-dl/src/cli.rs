//! CLI argument structure using clap

use appveyor_dl_api::DEFAULT_API_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "appveyor-dl")]
#[command(version, about = "Download the artifacts of an AppVeyor build", long_about = None)]
pub struct Cli {
    /// Project identifier (e.g. "account/project-slug")
    pub project: String,

    /// Build version (e.g. "1.0.42")
    pub build: String,

    /// AppVeyor API base URL
    #[arg(long, env = "APPVEYOR_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Directory receiving the downloaded artifacts
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
