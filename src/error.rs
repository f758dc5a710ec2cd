// src/error.rs
// =============================================================================
// Every way a run can fail, and the exit code each failure maps to.
//
// Exit codes:
//   0 = success
//   1 = no username given (usage error)
//   2 = unknown username (HTTP 404)
//   3 = rate limit exceeded (HTTP 403)
//   4 = transport / generic HTTP failure, or stdout could not be written
//       (a closed pipe is not a failure, see print_urls in main.rs)
//   5 = response body is not a JSON array of repositories
//
// None of these are retried. The first one hit anywhere in the pagination
// loop ends the run.
//
// Rust concepts:
// - thiserror: derives Display and Error from the #[error("...")] attributes
// - #[source]: keeps the underlying reqwest/serde_json error as the cause
// - downcast_ref: recovers our enum from inside an anyhow::Error
// =============================================================================

use thiserror::Error;

/// Exit code used for failures that are not an `AppError`
/// (for example, the HTTP client could not be built).
pub const GENERIC_FAILURE: i32 = 4;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage: ghrepos <username>")]
    MissingUsername,

    #[error("No such username")]
    UnknownUser,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("HTTP error")]
    Http(#[source] reqwest::Error),

    #[error("Failed to decode JSON response")]
    Decode(#[source] serde_json::Error),
}

impl AppError {
    /// The process exit code reserved for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingUsername => 1,
            AppError::UnknownUser => 2,
            AppError::RateLimited => 3,
            AppError::Http(_) => GENERIC_FAILURE,
            AppError::Decode(_) => 5,
        }
    }
}

// Picks the exit code for whatever error reached main()
//
// Errors raised by the fetcher are AppErrors inside the anyhow::Error;
// anything else is treated as a generic failure.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<AppError>()
        .map(AppError::exit_code)
        .unwrap_or(GENERIC_FAILURE)
}
