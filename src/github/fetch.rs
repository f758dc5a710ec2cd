// src/github/fetch.rs
// =============================================================================
// Fetches one page of a user's repositories from the GitHub REST API.
//
// Strategy:
// - Build the "list repositories for a user" URL from the username
// - GET it, classify 404 / 403 into our own errors
// - Decode the body as a JSON array of repositories
// - Read the Link header to find the next page (if any)
//
// Any status other than 404 and 403 is not classified: the body is still
// decoded, so e.g. a 500 with a JSON object body ends up as a decode error.
//
// Rust concepts:
// - async functions: every request is awaited before the next one starts
// - map_err: turns library errors into our own AppError variants
// - Option: the next page either exists or it doesn't
// =============================================================================

use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, StatusCode};
use url::Url;

use super::link::find_rel;
use super::models::{Page, Repository};
use crate::error::AppError;

/// Root of the GitHub REST API
pub const API_BASE: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Builds the first-page URL for a user's repositories
//
// The username is not validated; GitHub answers 404 for bad ones.
// A trailing slash on the base is tolerated.
//
// Example:
//   (API_BASE, "octocat") -> "https://api.github.com/users/octocat/repos"
pub fn repos_url(base: &str, username: &str) -> String {
    format!("{}/users/{}/repos", base.trim_end_matches('/'), username)
}

/// Creates the HTTP client shared by every page request
pub fn build_client() -> Result<Client, AppError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(AppError::Http)
}

// Fetches and decodes a single page
//
// Returns the page's repositories in the order GitHub sent them, plus the
// absolute URL of the next page. No partial results on error.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page, AppError> {
    tracing::info!(url, "fetching page");

    // Send the GET request; a failure here never reached GitHub at all
    let response = client
        .get(url)
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(AppError::Http)?;

    // 404 and 403 are the two "expected" failures from the users endpoint
    match response.status() {
        StatusCode::NOT_FOUND => return Err(AppError::UnknownUser),
        StatusCode::FORBIDDEN => return Err(AppError::RateLimited),
        _ => {}
    }

    // Read the headers before the body consumes the response
    let next = find_rel(
        response
            .headers()
            .get_all(LINK)
            .iter()
            .filter_map(|value| value.to_str().ok()),
        "next",
    )
    .map(|next| resolve(url, &next));

    // Read the whole body first so a dropped connection (Http) is not
    // confused with a malformed one (Decode)
    let body = response.bytes().await.map_err(AppError::Http)?;
    let repos: Vec<Repository> = serde_json::from_slice(&body).map_err(AppError::Decode)?;

    for repo in &repos {
        tracing::trace!(id = repo.id, name = %repo.name, "decoded repository");
    }
    tracing::debug!(count = repos.len(), next = ?next, "page decoded");

    Ok(Page { repos, next })
}

// Resolves a (possibly relative) link target against the page it came from
//
// If either side doesn't parse, the target is returned untouched and the
// next request reports the problem.
fn resolve(current: &str, target: &str) -> String {
    Url::parse(current)
        .and_then(|base| base.join(target))
        .map(String::from)
        .unwrap_or_else(|_| target.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why read the Link header before the body?
//    - response.bytes() takes the response by value (it is consumed)
//    - After that the headers are gone, so we grab what we need first
//
// 2. Why bytes() + serde_json instead of response.json()?
//    - json() reports both network and parse problems as reqwest::Error
//    - Splitting them lets us exit with 4 for one and 5 for the other
//
// 3. What is concat!/env!?
//    - env!("CARGO_PKG_VERSION") is filled in by cargo at compile time
//    - concat! glues string literals together into one &'static str
// -----------------------------------------------------------------------------
