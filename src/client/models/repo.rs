//! Repository models

use serde::{Deserialize, Serialize};

/// Repository as returned by `GET /user/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID
    pub id: u64,

    /// Short repository name
    pub name: String,

    /// `owner/name`
    pub full_name: String,

    /// Owning account
    pub owner: RepoOwner,

    /// Primary language, when GitHub detected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Private repository
    #[serde(default)]
    pub private: bool,

    /// Fork of another repository
    #[serde(default)]
    pub fork: bool,

    /// Archived (read-only)
    #[serde(default)]
    pub archived: bool,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Web URL
    #[serde(default)]
    pub html_url: String,
}

/// Repository owner (user or organization)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoOwner {
    /// Account login
    pub login: String,
}

impl Repository {
    /// Case-insensitive full-name comparison
    pub fn is_named(&self, full_name: &str) -> bool {
        self.full_name.eq_ignore_ascii_case(full_name)
    }
}
