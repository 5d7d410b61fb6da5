//! GitHub API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::{AuthApi, RepoApi};
pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use models::{Repository, User};
