//! GitHub API data models

mod repo;
mod user;

#[cfg(test)]
pub use repo::RepoOwner;
pub use repo::Repository;
pub use user::User;
