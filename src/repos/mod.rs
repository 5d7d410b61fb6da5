//! Listing, searching and deleting the user's repositories

pub mod delete;
pub mod filter;
pub mod selector;
pub mod service;

pub use delete::{DeleteOutcome, DeleteResult};
pub use filter::SearchQuery;
pub use service::RepoService;
