// src/github/models.rs
// Types decoded from the GitHub "list repositories for a user" endpoint.

use serde::Deserialize;

/// One repository, as returned by GitHub
///
/// Only the fields we use are declared; serde ignores the rest of the
/// (very large) object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    /// The SSH clone URL (e.g. `git@github.com:octocat/Hello-World.git`)
    #[serde(rename = "ssh_url")]
    pub connection_url: String,
}

/// One page of results plus the URL of the following page, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub repos: Vec<Repository>,
    pub next: Option<String>,
}
