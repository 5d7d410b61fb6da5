//! Interactive batch delete
//!
//! The flow is a small state machine:
//!
//! ```text
//! ChoosingMethod -> Prompting(ByIndices | ByNames) -> Confirming -> Executing -> Done
//!        \________________________\_______________________\-> Canceled
//! ```
//!
//! Nothing is sent to GitHub before the user types the confirmation word.

use colored::Colorize;

use super::selector::RepoSelector;
use crate::cli::prompt::Prompter;
use crate::client::{RepoApi, Repository};
use crate::error::{Error, Result};

/// Input that aborts a selection prompt
pub const CANCEL_TOKEN: &str = "c";

/// Word the user must type to go ahead
pub const CONFIRMATION_WORD: &str = "yes";

/// How the user picks repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMethod {
    ByIndices,
    ByNames,
}

/// Choice on the delete menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodChoice {
    Method(DeleteMethod),
    Cancel,
}

impl MethodChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MethodChoice::Method(DeleteMethod::ByIndices)),
            "2" => Some(MethodChoice::Method(DeleteMethod::ByNames)),
            "3" => Some(MethodChoice::Cancel),
            _ => None,
        }
    }
}

/// A repository that could not be deleted
#[derive(Debug)]
pub struct DeleteFailure {
    pub repo: Repository,
    pub error: Error,
}

/// Outcome of one confirmed batch: every attempted repository lands in
/// exactly one of the two lists.
#[derive(Debug, Default)]
pub struct DeleteResult {
    pub deleted: Vec<Repository>,
    pub failed: Vec<DeleteFailure>,
}

impl DeleteResult {
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

/// How a delete invocation ended
#[derive(Debug)]
pub enum DeleteOutcome {
    /// User backed out; no request was made
    Canceled,
    /// Confirmed batch was executed
    Completed(DeleteResult),
}

enum Stage<'a> {
    ChoosingMethod,
    Prompting(DeleteMethod),
    Confirming(Vec<&'a Repository>),
    Executing(Vec<&'a Repository>),
}

/// One run of the delete flow over the list the user is looking at
pub struct DeleteCommand<'a, C, P> {
    client: &'a C,
    repos: &'a [Repository],
    prompter: &'a mut P,
}

impl<'a, C: RepoApi, P: Prompter> DeleteCommand<'a, C, P> {
    pub fn new(client: &'a C, repos: &'a [Repository], prompter: &'a mut P) -> Self {
        Self {
            client,
            repos,
            prompter,
        }
    }

    pub async fn run(self) -> Result<DeleteOutcome> {
        let DeleteCommand {
            client,
            repos,
            prompter,
        } = self;
        let selector = RepoSelector::new(repos);
        let mut stage = Stage::ChoosingMethod;

        println!("\n{}\n", "=== Delete Repositories ===".bold());

        loop {
            stage = match stage {
                Stage::ChoosingMethod => match choose_method(prompter)? {
                    MethodChoice::Method(method) => Stage::Prompting(method),
                    MethodChoice::Cancel => return Ok(canceled()),
                },
                Stage::Prompting(method) => match prompt_selection(prompter, &selector, method)? {
                    Some(selected) => Stage::Confirming(selected),
                    None => return Ok(canceled()),
                },
                Stage::Confirming(selected) => {
                    if confirm(prompter, &selected)? {
                        Stage::Executing(selected)
                    } else {
                        return Ok(canceled());
                    }
                }
                Stage::Executing(selected) => {
                    return Ok(DeleteOutcome::Completed(execute(client, &selected).await));
                }
            };
        }
    }
}

fn canceled() -> DeleteOutcome {
    println!("Deletion canceled.");
    DeleteOutcome::Canceled
}

fn choose_method<P: Prompter>(prompter: &mut P) -> Result<MethodChoice> {
    loop {
        println!("Delete options:");
        println!("1. Delete by indices (e.g. 1,2,3 or 1-3,7-9)");
        println!("2. Delete by names (e.g. username/repo1, username/repo2)");
        println!("3. Cancel");
        let answer = prompter.input(">")?;

        match MethodChoice::parse(&answer) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid choice. Please enter 1, 2, or 3.\n"),
        }
    }
}

/// Keep asking until the selector accepts the input or the user cancels
fn prompt_selection<'a, P: Prompter>(
    prompter: &mut P,
    selector: &RepoSelector<'a>,
    method: DeleteMethod,
) -> Result<Option<Vec<&'a Repository>>> {
    let prompt = match method {
        DeleteMethod::ByIndices => "Enter indices (e.g., 1,2,3 or 1-3,7-9) OR 'c' to cancel",
        DeleteMethod::ByNames => {
            "Enter repo names (e.g., user/repo1, user/repo2) OR 'c' to cancel"
        }
    };

    loop {
        let raw = prompter.input(prompt)?;
        if raw.trim().eq_ignore_ascii_case(CANCEL_TOKEN) {
            return Ok(None);
        }

        let parsed = match method {
            DeleteMethod::ByIndices => selector.by_indices(&raw),
            DeleteMethod::ByNames => selector.by_names(&raw),
        };

        match parsed {
            Ok(selection) => {
                for issue in &selection.issues {
                    println!("{} {}", "Warning:".yellow(), issue);
                }
                return Ok(Some(selection.repos));
            }
            Err(e) => {
                log::debug!("Rejected selection {:?}: {}", raw, e);
                println!("{}\n", e);
            }
        }
    }
}

fn confirm<P: Prompter>(prompter: &mut P, selected: &[&Repository]) -> Result<bool> {
    println!("\nYou are about to delete the following repositories:");
    for repo in selected {
        println!("- {}", repo.full_name);
    }

    let answer = prompter.input(&format!(
        "\nAre you sure? This action cannot be undone! Type '{}' to confirm",
        CONFIRMATION_WORD
    ))?;
    Ok(answer.trim().eq_ignore_ascii_case(CONFIRMATION_WORD))
}

/// Attempt every selected repository once. Failures are recorded, not raised.
async fn execute<C: RepoApi>(client: &C, selected: &[&Repository]) -> DeleteResult {
    let mut result = DeleteResult::default();

    for repo in selected {
        match client.delete_repo(repo).await {
            Ok(()) => {
                log::info!("Deleted {}", repo.full_name);
                println!("{} Deleted {}", "✓".green(), repo.full_name);
                result.deleted.push((*repo).clone());
            }
            Err(error) => {
                log::warn!("Failed to delete {}: {}", repo.full_name, error);
                println!(
                    "{} Failed to delete {}: {}",
                    "✗".red(),
                    repo.full_name,
                    error
                );
                result.failed.push(DeleteFailure {
                    repo: (*repo).clone(),
                    error,
                });
            }
        }
    }

    result
}
