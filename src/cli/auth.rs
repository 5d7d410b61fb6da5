//! Token acquisition and validation

use colored::Colorize;

use crate::cli::prompt::Prompter;
use crate::client::{AuthApi, User};
use crate::credentials::CredentialStore;
use crate::error::{ApiError, Error, Result};

/// Pick the token for this session.
///
/// Offers the stored token first (default yes). Otherwise asks for one,
/// hidden, and offers to store it (default no).
pub fn obtain_token<P: Prompter, S: CredentialStore>(prompter: &mut P, store: &S) -> Result<String> {
    let stored = match store.get() {
        Ok(token) => token,
        Err(e) => {
            log::warn!("Could not read stored token: {}", e);
            None
        }
    };

    if let Some(token) = stored.filter(|t| !t.is_empty())
        && prompter.confirm("Use existing saved token?", true)?
    {
        return Ok(token);
    }

    let token = loop {
        let token = prompter.secret("Enter your GitHub Personal Access Token")?;
        if !token.is_empty() {
            break token;
        }
        println!("{}", "A token is required.".yellow());
    };

    if prompter.confirm("Save token for future use?", false)? {
        match store.set(&token) {
            Ok(()) => println!("{} Token saved to the system keyring", "✓".green()),
            Err(e) => {
                log::error!("Failed to save token: {}", e);
                println!("{} Could not save token: {}", "⚠".yellow(), e);
            }
        }
    }

    Ok(token)
}

/// Make one identity call to prove the token works.
///
/// Every failure is logged before it is handed back to the caller.
pub async fn validate<C: AuthApi>(client: &C) -> Result<User> {
    match client.current_user().await {
        Ok(user) => {
            log::info!("Authenticated as {}", user.login);
            println!("\nAuthenticated as: {}", user.login.bold());
            Ok(user)
        }
        Err(err) => {
            match &err {
                Error::Api(ApiError::Unauthorized) => {
                    log::error!("Authentication failed: (401) {}", err)
                }
                Error::Api(api) if api.is_platform_error() => log::error!(
                    "GitHub API error: ({}) {}",
                    api.status().unwrap_or_default(),
                    api.message()
                ),
                other => log::error!("Unexpected error during authentication: {:?}", other),
            }
            Err(err)
        }
    }
}
