// src/github/paginate.rs
// =============================================================================
// Walks every page of a user's repositories, following rel="next" links.
//
// State machine:
//   Fetching(url) --page ok, next = Some(u)--> Fetching(u)
//   Fetching(url) --page ok, next = None-----> Done
//   Fetching(url) --error--------------------> abort (nothing is returned)
//
// Results are only handed back once the last page has been fetched, so a
// failure on page N discards pages 1..N-1 as well.
//
// Rust concepts:
// - Generics: fetch_all works with any closure that returns a page future,
//   which is how the tests drive it without a network
// - while let: loops as long as there is a next URL
// =============================================================================

use std::future::Future;

use reqwest::Client;

use super::fetch::{fetch_page, repos_url};
use super::models::{Page, Repository};
use crate::error::AppError;

// Lists every repository owned by `username`, in pagination order
//
// `api_base` is the API root (normally fetch::API_BASE); only the first
// URL is built from it, later pages come from the Link header.
pub async fn list_user_repos(
    client: &Client,
    api_base: &str,
    username: &str,
) -> Result<Vec<Repository>, AppError> {
    // The closure borrows the client; every page reuses its connection pool
    fetch_all(repos_url(api_base, username), |url| async move {
        fetch_page(client, &url).await
    })
    .await
}

// Drives the pagination loop with any page-fetching function
//
// Requests are strictly sequential: the next page is only requested after
// the previous one has been fully read and decoded.
pub async fn fetch_all<F, Fut>(start_url: String, mut fetch: F) -> Result<Vec<Repository>, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page, AppError>>,
{
    let mut repos = Vec::new();           // every record, in page order
    let mut current = Some(start_url);    // None once the last page is read
    let mut pages = 0usize;

    while let Some(url) = current {
        // `?` ends the whole walk on the first failing page
        let page = fetch(url).await?;
        pages += 1;
        repos.extend(page.repos);
        current = page.next;
    }

    tracing::info!(pages, repos = repos.len(), "pagination complete");
    Ok(repos)
}
