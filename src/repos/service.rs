//! Session-scoped repository cache
//!
//! The list is fetched once, on first use, and afterwards only shrinks as
//! repositories are deleted. It is never re-fetched within a session, so a
//! deleted repository cannot reappear even if GitHub is slow to forget it.

use std::collections::HashSet;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::delete::{DeleteCommand, DeleteOutcome};
use super::filter::SearchQuery;
use crate::cli::prompt::Prompter;
use crate::client::{RepoApi, Repository};
use crate::error::Result;

/// Owns the API client and the cached repository list for one session
pub struct RepoService<C> {
    client: C,
    page_size: usize,
    repos: Option<Vec<Repository>>,
}

impl<C: RepoApi> RepoService<C> {
    pub fn new(client: C, page_size: usize) -> Self {
        Self {
            client,
            page_size,
            repos: None,
        }
    }

    /// All repositories for the session, fetching them on first call
    pub async fn list(&mut self) -> Result<&[Repository]> {
        if self.repos.is_none() {
            let fetched = self.fetch().await?;
            self.repos = Some(fetched);
        }
        Ok(self.repos.as_deref().unwrap_or_default())
    }

    /// Filter the full cached list (never a previous search result)
    pub async fn search(&mut self, query: &SearchQuery) -> Result<Vec<Repository>> {
        let repos = self.list().await?;
        Ok(query.apply(repos))
    }

    /// Run the interactive delete flow over `displayed`, then drop every
    /// successfully deleted repository from the cache.
    pub async fn delete<P: Prompter>(
        &mut self,
        displayed: &[Repository],
        prompter: &mut P,
    ) -> Result<DeleteOutcome> {
        let outcome = DeleteCommand::new(&self.client, displayed, prompter)
            .run()
            .await?;

        if let DeleteOutcome::Completed(result) = &outcome {
            self.forget(&result.deleted);
        }

        Ok(outcome)
    }

    /// Release the client at the end of the session
    pub fn into_client(self) -> C {
        self.client
    }

    fn forget(&mut self, deleted: &[Repository]) {
        if deleted.is_empty() {
            return;
        }
        let gone: HashSet<String> = deleted
            .iter()
            .map(|r| r.full_name.to_lowercase())
            .collect();

        if let Some(repos) = self.repos.as_mut() {
            let before = repos.len();
            repos.retain(|r| !gone.contains(&r.full_name.to_lowercase()));
            log::debug!("Pruned {} repositories from cache", before - repos.len());
        }
    }

    async fn fetch(&self) -> Result<Vec<Repository>> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Fetching repositories from GitHub API...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.client.list_all_repos(self.page_size).await;
        spinner.finish_and_clear();

        let repos = dedup_by_full_name(result?);
        log::info!("Fetched {} repositories", repos.len());
        Ok(repos)
    }
}

/// Pages can shift while they are walked; keep the first copy of each name
fn dedup_by_full_name(repos: Vec<Repository>) -> Vec<Repository> {
    let mut seen = HashSet::new();
    let total = repos.len();
    let unique: Vec<Repository> = repos
        .into_iter()
        .filter(|r| seen.insert(r.full_name.to_lowercase()))
        .collect();

    if unique.len() != total {
        log::debug!("Dropped {} duplicate listings", total - unique.len());
    }
    unique
}
