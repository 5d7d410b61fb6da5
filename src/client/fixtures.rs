//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{RepoOwner, Repository};

/// Builder for creating test Repository instances.
///
/// # Example
/// ```ignore
/// let repo = RepositoryBuilder::new("octocat/hello")
///     .language("Rust")
///     .private(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryBuilder {
    id: u64,
    owner: String,
    name: String,
    language: Option<String>,
    private: bool,
    fork: bool,
    archived: bool,
}

impl RepositoryBuilder {
    /// Create a builder from an `owner/name` string.
    pub fn new(full_name: &str) -> Self {
        let (owner, name) = full_name.split_once('/').unwrap_or(("octocat", full_name));
        Self {
            id: 1,
            owner: owner.to_string(),
            name: name.to_string(),
            language: None,
            private: false,
            fork: false,
            archived: false,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn fork(mut self, fork: bool) -> Self {
        self.fork = fork;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn build(self) -> Repository {
        Repository {
            id: self.id,
            full_name: format!("{}/{}", self.owner, self.name),
            html_url: format!("https://github.com/{}/{}", self.owner, self.name),
            name: self.name,
            owner: RepoOwner { login: self.owner },
            language: self.language,
            private: self.private,
            fork: self.fork,
            archived: self.archived,
            description: None,
        }
    }
}

/// Repositories named `octocat/repo-1` .. `octocat/repo-{count}`
pub fn numbered_repos(count: usize) -> Vec<Repository> {
    (1..=count)
        .map(|i| {
            RepositoryBuilder::new(&format!("octocat/repo-{}", i))
                .id(i as u64)
                .build()
        })
        .collect()
}

/// Shorthand for a repository with an optional language
pub fn repo(full_name: &str, language: Option<&str>) -> Repository {
    let builder = RepositoryBuilder::new(full_name);
    match language {
        Some(lang) => builder.language(lang).build(),
        None => builder.build(),
    }
}
