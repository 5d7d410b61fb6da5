//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Token validation
//! - [`RepoApi`] - Repository listing and deletion

mod auth;
mod repos;

pub use auth::AuthApi;
pub use repos::RepoApi;
