//! Repository API trait

use async_trait::async_trait;

use crate::client::models::Repository;
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Repository listing and deletion for the authenticated user
#[async_trait]
pub trait RepoApi: Send + Sync {
    /// List one page of the authenticated user's repositories
    async fn list_repos_page(&self, pagination: &PaginationParams) -> Result<Vec<Repository>>;

    /// List every repository, walking pages until a short page comes back
    async fn list_all_repos(&self, page_size: usize) -> Result<Vec<Repository>> {
        let mut params = PaginationParams::new().per_page(page_size).page(1);
        let mut repos = Vec::new();

        loop {
            let page = self.list_repos_page(&params).await?;
            let is_last = params.is_last_page(page.len());
            repos.extend(page);

            if is_last {
                break;
            }
            params = params.next_page();
        }

        Ok(repos)
    }

    /// Permanently delete a repository. Requires the `delete_repo` scope.
    async fn delete_repo(&self, repo: &Repository) -> Result<()>;
}
