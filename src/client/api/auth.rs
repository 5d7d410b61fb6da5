//! Identity API trait

use async_trait::async_trait;

use crate::client::models::User;
use crate::error::Result;

/// Token validation for the GitHub API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetch the account the token belongs to.
    ///
    /// This is the single call used to validate a token.
    async fn current_user(&self) -> Result<User>;
}
