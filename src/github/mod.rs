// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - fetch: builds the endpoint URL and fetches/decodes one page
// - link: parses the Link header to find the next page
// - paginate: follows next links until the last page
// - models: the repository record we decode
//
// Only unauthenticated requests are made, so GitHub's anonymous rate limit
// applies (a 403 is reported as "rate limit exceeded").
// =============================================================================

mod fetch;
mod link;
mod models;
mod paginate;

#[cfg(test)]
pub(crate) mod test_server;

pub use fetch::{build_client, API_BASE};
pub use models::Repository;
pub use paginate::list_user_repos;
