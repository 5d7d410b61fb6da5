//! CLI definitions and the interactive session

use std::path::PathBuf;

use clap::Parser;

pub mod auth;
pub mod prompt;
pub mod session;

/// GitHub Repo Sweeper - list, search, and bulk-delete your GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "gh-repo-sweeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config file location
    #[arg(long, env = "SWEEPER_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Write the log to this file instead of ./sweeper.log
    #[arg(long, env = "SWEEPER_LOG_FILE", hide_env = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, env = "SWEEPER_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Custom API host for GitHub Enterprise or testing
    #[arg(long, env = "SWEEPER_API_HOST", hide = true)]
    pub api_host: Option<String>,
}
