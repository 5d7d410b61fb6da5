//! Authenticated user model

use serde::{Deserialize, Serialize};

/// The account behind the token, from `GET /user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account login
    pub login: String,

    /// Display name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
