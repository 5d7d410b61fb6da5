//! GitHub Repo Sweeper - list, search, and bulk-delete your GitHub repositories

use std::time::Duration;

use clap::Parser;
use colored::Colorize;

mod cli;
mod client;
mod config;
mod credentials;
mod error;
mod logging;
mod output;
mod repos;

use cli::Cli;
use cli::prompt::{Prompter, TerminalPrompter};
use client::GitHubClient;
use config::{Config, Settings};
use credentials::KeyringStore;
use error::{ApiError, Error, Result};
use repos::RepoService;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        report(&err);
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_at(cli.config.as_deref())?;
    let settings = Settings::resolve(
        config,
        cli.api_host.as_deref(),
        cli.log_file.as_deref(),
        cli.debug,
    );

    if let Err(e) = logging::init(&settings.log_file, settings.debug) {
        eprintln!(
            "{} Logging to {} disabled: {}",
            "⚠".yellow(),
            settings.log_file.display(),
            e
        );
    }
    log::debug!("Using API host {}", settings.api_host);

    print_banner();

    let mut prompter = TerminalPrompter::default();
    let store = KeyringStore::for_current_user();
    let token = cli::auth::obtain_token(&mut prompter, &store)?;

    let client = GitHubClient::with_host(
        token,
        &settings.api_host,
        Duration::from_secs(settings.timeout_secs),
    )?;
    cli::auth::validate(&client).await?;

    let mut service = RepoService::new(client, settings.page_size);
    cli::session::run(&mut service, &mut prompter).await?;

    println!("\nExiting GitHub Repo Sweeper. Press enter to exit...");
    service.into_client().close();
    log::info!("Session ended");
    prompter.input("")?;

    Ok(())
}

fn print_banner() {
    println!("{}", "=== GitHub Repo Sweeper ===".bold());
    println!("List, search, and bulk-delete repositories on your GitHub account.");
    println!("Deletions are permanent, so double-check every selection.");
}

/// Print the final error the way the user should see it
fn report(err: &Error) {
    let message = error_message(err);
    log::error!("{} (exit code {})", message, err.exit_code());
    eprintln!("{}", message);
}

/// User-facing text for an error that ended the session
fn error_message(err: &Error) -> String {
    match err {
        Error::Api(ApiError::Unauthorized) => {
            "Authentication failed. Please check your GitHub token.".to_string()
        }
        Error::Api(api) if api.is_platform_error() => format!(
            "GitHub API error: ({}) {}",
            api.status().unwrap_or_default(),
            api.message()
        ),
        Error::Config(e) => e.to_string(),
        other => format!("Unexpected error: {}", other),
    }
}
