//! Main menu loop

use colored::Colorize;

use crate::cli::prompt::Prompter;
use crate::client::{RepoApi, Repository};
use crate::error::Result;
use crate::output;
use crate::repos::{DeleteOutcome, RepoService, SearchQuery};

/// Top-level menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    List,
    Search,
    Exit,
}

impl MainChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainChoice::List),
            "2" => Some(MainChoice::Search),
            "3" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

/// Which search fields to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Keyword,
    Language,
    Both,
}

impl SearchMode {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SearchMode::Keyword),
            "2" => Some(SearchMode::Language),
            "3" => Some(SearchMode::Both),
            _ => None,
        }
    }

    fn wants_keyword(self) -> bool {
        matches!(self, SearchMode::Keyword | SearchMode::Both)
    }

    fn wants_language(self) -> bool {
        matches!(self, SearchMode::Language | SearchMode::Both)
    }
}

/// Run the menu until the user exits. API errors propagate to the caller.
pub async fn run<C: RepoApi, P: Prompter>(
    service: &mut RepoService<C>,
    prompter: &mut P,
) -> Result<()> {
    loop {
        println!("\n{}", "What would you like to do?".bold());
        println!("==========================");
        println!("1. List all repositories");
        println!("2. Search for a repository");
        println!("3. Exit");

        let choice = prompter.input(">")?;
        match MainChoice::parse(&choice) {
            Some(MainChoice::List) => {
                println!("\n{}\n", "=== Your Repositories ===".bold());
                let repos = service.list().await?.to_vec();
                show_and_offer_delete(service, prompter, &repos).await?;
            }
            Some(MainChoice::Search) => {
                println!("\n{}\n", "=== Search Repositories ===".bold());
                let query = prompt_search(prompter)?;

                println!("\nResults:\n");
                let repos = service.search(&query).await?;
                show_and_offer_delete(service, prompter, &repos).await?;
            }
            Some(MainChoice::Exit) => return Ok(()),
            None => println!("Invalid choice. Please try again."),
        }
    }
}

async fn show_and_offer_delete<C: RepoApi, P: Prompter>(
    service: &mut RepoService<C>,
    prompter: &mut P,
    repos: &[Repository],
) -> Result<()> {
    output::print_repo_list(repos);
    if repos.is_empty() {
        return Ok(());
    }

    if let DeleteOutcome::Completed(result) = service.delete(repos, prompter).await?
        && result.attempted() > 0
    {
        println!("\n{}", output::format_delete_summary(&result));
    }
    Ok(())
}

fn prompt_search<P: Prompter>(prompter: &mut P) -> Result<SearchQuery> {
    let mode = loop {
        println!("Search options");
        println!("==========================");
        println!("1. Keyword");
        println!("2. Programming language");
        println!("3. Both");

        match SearchMode::parse(&prompter.input(">")?) {
            Some(mode) => break mode,
            None => println!("Invalid selection. Enter 1, 2, or 3."),
        }
    };

    let keyword = if mode.wants_keyword() {
        Some(prompter.input("Enter search keyword (press Enter to skip)")?)
    } else {
        None
    };
    let language = if mode.wants_language() {
        Some(prompter.input("Enter programming language (press Enter to skip)")?)
    } else {
        None
    };

    let query = SearchQuery::new(keyword.as_deref(), language.as_deref());
    if query.is_empty() {
        println!("No filter given, showing all repositories.");
    }
    Ok(query)
}
