//! Mock GitHub API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, RepoApi};
use super::models::{Repository, User};
use super::pagination::PaginationParams;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_repos(numbered_repos(3))
///     .await
///     .fail_delete_of("octocat/repo-2")
///     .await;
/// ```
pub struct MockGitHubClient {
    /// Login to return from current_user
    login: Arc<Mutex<String>>,
    /// Repositories to return from list_repos_page
    repos: Arc<Mutex<Vec<Repository>>>,
    /// Full names whose deletion fails with 403
    failing_deletes: Arc<Mutex<HashSet<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Full names passed to delete_repo, in call order
    delete_requests: Arc<Mutex<Vec<String>>>,
}

impl Default for MockGitHubClient {
    fn default() -> Self {
        Self {
            login: Arc::new(Mutex::new("octocat".to_string())),
            repos: Arc::new(Mutex::new(Vec::new())),
            failing_deletes: Arc::new(Mutex::new(HashSet::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            delete_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub current_user: usize,
    pub list_repos_page: usize,
    pub delete_repo: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.current_user + self.list_repos_page + self.delete_repo
    }
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the login returned by current_user.
    pub async fn with_login(self, login: &str) -> Self {
        *self.login.lock().await = login.to_string();
        self
    }

    /// Configure repositories to return from the listing.
    pub async fn with_repos(self, repos: Vec<Repository>) -> Self {
        *self.repos.lock().await = repos;
        self
    }

    /// Make deleting the given repository fail.
    pub async fn fail_delete_of(self, full_name: &str) -> Self {
        self.failing_deletes
            .lock()
            .await
            .insert(full_name.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Full names that delete_repo was called with.
    pub async fn delete_requests(&self) -> Vec<String> {
        self.delete_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockGitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.call_count.lock().await.current_user += 1;
        self.check_error().await?;

        Ok(User {
            login: self.login.lock().await.clone(),
            name: None,
        })
    }
}

#[async_trait]
impl RepoApi for MockGitHubClient {
    async fn list_repos_page(&self, pagination: &PaginationParams) -> Result<Vec<Repository>> {
        self.call_count.lock().await.list_repos_page += 1;
        self.check_error().await?;

        let repos = self.repos.lock().await;
        let start = (pagination.page - 1) * pagination.per_page;
        Ok(repos
            .iter()
            .skip(start)
            .take(pagination.per_page)
            .cloned()
            .collect())
    }

    async fn delete_repo(&self, repo: &Repository) -> Result<()> {
        self.call_count.lock().await.delete_repo += 1;
        self.delete_requests
            .lock()
            .await
            .push(repo.full_name.clone());
        self.check_error().await?;

        if self.failing_deletes.lock().await.contains(&repo.full_name) {
            return Err(
                ApiError::Forbidden("Must have admin rights to Repository.".to_string()).into(),
            );
        }

        self.repos
            .lock()
            .await
            .retain(|r| r.full_name != repo.full_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::numbered_repos;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_lists_across_pages() {
        let mock = MockGitHubClient::new().with_repos(numbered_repos(5)).await;

        let repos = mock.list_all_repos(2).await.unwrap();
        assert_eq!(repos.len(), 5);

        // 2 + 2 + 1
        assert_eq!(mock.call_counts().await.list_repos_page, 3);
    }

    #[tokio::test]
    async fn test_mock_exact_page_multiple_needs_extra_call() {
        let mock = MockGitHubClient::new().with_repos(numbered_repos(4)).await;

        let repos = mock.list_all_repos(2).await.unwrap();
        assert_eq!(repos.len(), 4);
        assert_eq!(mock.call_counts().await.list_repos_page, 3);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockGitHubClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        let result = mock.current_user().await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized))));

        let user = mock.current_user().await.unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(mock.call_counts().await.current_user, 2);
    }

    #[tokio::test]
    async fn test_mock_failing_delete() {
        let repos = numbered_repos(2);
        let mock = MockGitHubClient::new()
            .with_repos(repos.clone())
            .await
            .fail_delete_of("octocat/repo-2")
            .await;

        assert!(mock.delete_repo(&repos[0]).await.is_ok());
        assert!(mock.delete_repo(&repos[1]).await.is_err());

        let counts = mock.call_counts().await;
        assert_eq!(counts.delete_repo, 2);
        assert_eq!(counts.total(), 2);
        assert_eq!(
            mock.delete_requests().await,
            vec!["octocat/repo-1", "octocat/repo-2"]
        );
    }
}
