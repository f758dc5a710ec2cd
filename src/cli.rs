// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage: ghrepos [-v...] <username>
//
// The username is declared optional here on purpose: a missing username
// must print our own usage line and exit with code 1, while clap would
// exit with 2 (which we reserve for "no such username").
// =============================================================================

use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ghrepos",
    version,
    about = "List the SSH clone URL of every repository a GitHub user owns",
    long_about = "ghrepos pages through the GitHub REST API and prints the SSH clone URL \
                  of each repository owned by the given user, one per line."
)]
pub struct Cli {
    /// GitHub username whose repositories should be listed
    pub username: Option<String>,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The username, if one was given and is not blank
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
