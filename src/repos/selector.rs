//! Turning a line of user input into a subset of the displayed repositories
//!
//! Indices are 1-based over the list the user was shown. Nothing here does
//! I/O: problems with individual tokens come back as [`SelectionIssue`]s for
//! the caller to print.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::client::Repository;

/// A token that was understood but could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIssue {
    /// Single index outside `1..=max`
    IndexOutOfRange { index: usize, max: usize },
    /// Range with a bound outside `1..=max`
    RangeOutOfRange { start: usize, end: usize, max: usize },
    /// Range written high-to-low, e.g. `5-2`
    ReversedRange { start: usize, end: usize },
    /// Name that matched no repository
    NotFound(String),
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::IndexOutOfRange { index, max } => {
                write!(f, "Invalid index {}. Must be between 1 and {}.", index, max)
            }
            SelectionIssue::RangeOutOfRange { start, end, max } => write!(
                f,
                "Invalid range {}-{}. Indices must be between 1 and {}.",
                start, end, max
            ),
            SelectionIssue::ReversedRange { start, end } => write!(
                f,
                "Invalid range {}-{}. Start must not be greater than end.",
                start, end
            ),
            SelectionIssue::NotFound(name) => write!(f, "Repository '{}' not found.", name),
        }
    }
}

/// Input that yields no usable selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid input '{0}'. Enter numbers and ranges separated by commas only.")]
    InvalidToken(String),

    #[error("No valid indices provided.{}", format_issues(.0))]
    NoValidIndices(Vec<SelectionIssue>),

    #[error("No repository names provided.")]
    NoNames,

    #[error("No valid repositories found.{}", format_issues(.0))]
    NoMatches(Vec<SelectionIssue>),
}

fn format_issues(issues: &[SelectionIssue]) -> String {
    issues.iter().map(|i| format!("\n  {}", i)).collect()
}

/// Repositories picked by the user, plus anything worth warning about
#[derive(Debug)]
pub struct Selection<'a> {
    pub repos: Vec<&'a Repository>,
    pub issues: Vec<SelectionIssue>,
}

/// Stateless selector over the list currently on screen
pub struct RepoSelector<'a> {
    repos: &'a [Repository],
}

impl<'a> RepoSelector<'a> {
    pub fn new(repos: &'a [Repository]) -> Self {
        Self { repos }
    }

    /// Parse `1,2,3` / `1-3,7-9` style input.
    ///
    /// Out-of-range or reversed tokens are skipped and reported. The result
    /// is sorted ascending without duplicates.
    pub fn by_indices(&self, text: &str) -> Result<Selection<'a>, SelectionError> {
        let max = self.repos.len();
        let mut indices = BTreeSet::new();
        let mut issues = Vec::new();

        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match parse_index_token(token)? {
                IndexToken::Single(index) => {
                    if index < 1 || index > max {
                        issues.push(SelectionIssue::IndexOutOfRange { index, max });
                        continue;
                    }
                    indices.insert(index);
                }
                IndexToken::Range(start, end) => {
                    if start > end {
                        issues.push(SelectionIssue::ReversedRange { start, end });
                        continue;
                    }
                    if start < 1 || end > max {
                        issues.push(SelectionIssue::RangeOutOfRange { start, end, max });
                        continue;
                    }
                    indices.extend(start..=end);
                }
            }
        }

        if indices.is_empty() {
            return Err(SelectionError::NoValidIndices(issues));
        }

        let repos = self.repos;
        Ok(Selection {
            repos: indices.into_iter().map(|i| &repos[i - 1]).collect(),
            issues,
        })
    }

    /// Parse `owner/repo, owner/other` style input.
    ///
    /// Matching is case-insensitive on the full name. Results follow input
    /// order; a name matching several repositories selects all of them.
    pub fn by_names(&self, text: &str) -> Result<Selection<'a>, SelectionError> {
        let names: Vec<&str> = text
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            return Err(SelectionError::NoNames);
        }

        let mut selected = Vec::new();
        let mut issues = Vec::new();

        for name in names {
            let before = selected.len();
            selected.extend(self.repos.iter().filter(|r| r.is_named(name)));
            if selected.len() == before {
                issues.push(SelectionIssue::NotFound(name.to_string()));
            }
        }

        if selected.is_empty() {
            return Err(SelectionError::NoMatches(issues));
        }

        Ok(Selection {
            repos: selected,
            issues,
        })
    }
}

enum IndexToken {
    Single(usize),
    Range(usize, usize),
}

fn parse_index_token(token: &str) -> Result<IndexToken, SelectionError> {
    let invalid = || SelectionError::InvalidToken(token.to_string());
    let number = |s: &str| s.trim().parse::<usize>().map_err(|_| invalid());

    match token.split_once('-') {
        None => Ok(IndexToken::Single(number(token)?)),
        Some((start, end)) => Ok(IndexToken::Range(number(start)?, number(end)?)),
    }
}
