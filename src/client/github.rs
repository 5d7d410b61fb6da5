//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, USER_AGENT};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, RepoApi};
use super::models::{Repository, User};
use super::pagination::PaginationParams;
use crate::error::{ApiError, Result};

/// Pinned REST API version
const API_VERSION: &str = "2022-11-28";

/// Media type GitHub recommends for v3 JSON
const ACCEPT_JSON: &str = "application/vnd.github+json";

/// GitHub API client bound to a single token
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client against a custom host (GitHub Enterprise, test server)
    pub fn with_host(token: impl Into<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Base request with auth and version headers applied
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, ACCEPT_JSON)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(
                USER_AGENT,
                concat!("gh-repo-sweeper/", env!("CARGO_PKG_VERSION")),
            )
    }

    /// Send a request and decode a JSON body
    async fn get_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(ApiError::from)?;
        let response = check_status(response).await?;

        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Release the underlying connection pool
    pub fn close(self) {
        log::debug!("Closing GitHub session for {}", self.base_url);
    }
}

/// Error payload GitHub sends alongside non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pass successful responses through; turn everything else into an [`ApiError`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &headers, &body).into())
}

/// Map a non-success status to the error taxonomy
fn status_error(status: StatusCode, headers: &HeaderMap, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string()
        });

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if is_rate_limited(headers) => {
            ApiError::RateLimited {
                reset_at: header_value(headers, "x-ratelimit-reset")
                    .and_then(|v| v.parse::<i64>().ok())
                    .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            }
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn is_rate_limited(headers: &HeaderMap) -> bool {
    header_value(headers, "x-ratelimit-remaining") == Some("0")
}

#[async_trait]
impl AuthApi for GitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.get_json(self.request(Method::GET, "/user")).await
    }
}

#[async_trait]
impl RepoApi for GitHubClient {
    async fn list_repos_page(&self, pagination: &PaginationParams) -> Result<Vec<Repository>> {
        log::debug!(
            "Fetching repositories page {} (per_page={})",
            pagination.page,
            pagination.per_page
        );
        let builder = self
            .request(Method::GET, "/user/repos")
            .query(&pagination.to_query_params());
        self.get_json(builder).await
    }

    async fn delete_repo(&self, repo: &Repository) -> Result<()> {
        let path = format!("/repos/{}/{}", repo.owner.login, repo.name);
        let response = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .map_err(ApiError::from)?;
        check_status(response).await?;
        Ok(())
    }
}
