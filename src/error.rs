//! Error types for the repo sweeper

use chrono::{DateTime, Local, Utc};
use thiserror::Error;

/// Result type alias for sweeper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Credential store error: {0}")]
    Credential(#[from] keyring::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Process exit code for an error that reached the top level.
    ///
    /// Invalid credentials and platform responses are fatal (`1`). Anything
    /// else has already been reported to the user and ends the session softly.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) if api.is_platform_error() => 1,
            Error::Config(_) => 1,
            _ => 0,
        }
    }
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad credentials. Check that your GitHub token is valid and not expired.")]
    Unauthorized,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", rate_limit_message(.reset_at))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    #[error("({status}) {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

fn rate_limit_message(reset_at: &Option<DateTime<Utc>>) -> String {
    match reset_at {
        Some(reset) => format!(
            "API rate limit exceeded. Resets at {}",
            reset.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => "API rate limit exceeded".to_string(),
    }
}

impl ApiError {
    /// HTTP status carried by this error, if the platform answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden(_) | ApiError::RateLimited { .. } => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::InvalidResponse(_) => None,
        }
    }

    /// Whether the platform itself rejected the request (as opposed to the
    /// request never completing).
    pub fn is_platform_error(&self) -> bool {
        self.status().is_some()
    }

    /// The platform's own message, without the status prefix
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to GitHub API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
