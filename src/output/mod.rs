//! Output formatting for CLI results

use colored::Colorize;

use crate::client::Repository;
use crate::repos::DeleteResult;

/// Message shown for an empty listing
pub const NO_REPOSITORIES: &str = "No repositories found.";

/// Numbered listing, 1-based, one repository per line:
/// `3. owner/name [Language]` with flags appended.
pub fn format_repo_list(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return NO_REPOSITORIES.to_string();
    }

    repos
        .iter()
        .enumerate()
        .map(|(i, repo)| format_repo_line(i + 1, repo))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_repo_line(index: usize, repo: &Repository) -> String {
    let language = repo.language.as_deref().unwrap_or("--");
    let mut line = format!("{}. {} [{}]", index, repo.full_name, language);

    let flags: Vec<&str> = [
        (repo.private, "private"),
        (repo.fork, "fork"),
        (repo.archived, "archived"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect();

    if !flags.is_empty() {
        line.push_str(&format!(" {}", format!("({})", flags.join(", ")).dimmed()));
    }
    line
}

/// Print the numbered listing
pub fn print_repo_list(repos: &[Repository]) {
    println!("{}", format_repo_list(repos));
}

/// Tally after a batch delete, followed by one line per failure
pub fn format_delete_summary(result: &DeleteResult) -> String {
    let deleted = format!("{} deleted", result.deleted.len());
    if result.failed.is_empty() {
        return format!("{}", deleted.green());
    }

    let mut lines = vec![format!(
        "{}, {}",
        deleted.green(),
        format!("{} failed", result.failed.len()).red()
    )];
    lines.extend(
        result
            .failed
            .iter()
            .map(|f| format!("  {} {}: {}", "✗".red(), f.repo.full_name, f.error)),
    );
    lines.join("\n")
}
