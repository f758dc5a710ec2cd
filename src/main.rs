// src/main.rs
// =============================================================================
// Entry point of ghrepos.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Page through the user's repositories on GitHub
// 3. Print every SSH clone URL, one per line
// 4. Exit with a code that says what went wrong (see error.rs)
//
// Rust concepts used:
// - async/await: reqwest is async, so main runs inside a tokio runtime
// - anyhow::Result: one error type for the whole application layer
// - impl Write: print_urls writes to stdout or to a Vec<u8> in tests
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - error type and exit codes
mod github;   // src/github/ - GitHub API access and pagination
mod logging;  // src/logging.rs - stderr diagnostics

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;  // Parser trait enables try_parse()
use cli::Cli;
use error::AppError;

// The #[tokio::main] attribute creates a tokio runtime and runs main inside it
#[tokio::main]
async fn main() {
    // try_parse instead of parse: clap would exit with code 2 on bad
    // arguments, and 2 means "no such username" here
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version are "errors" that go to stdout
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::configure_logging(cli.log_level());

    // Run the application and turn any error into one stderr line + exit code
    let exit_code = match run(&cli, github::API_BASE, &mut io::stdout()).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole cause chain on one line
            eprintln!("{:#}", e);
            error::exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
//
// Parameters:
//   cli: parsed arguments
//   api_base: root of the GitHub API (tests point this at a local server)
//   out: where the URLs are written
async fn run(cli: &Cli, api_base: &str, out: &mut impl Write) -> Result<()> {
    // No username means no network call at all
    let username = cli.username().ok_or(AppError::MissingUsername)?;

    // One client for every page, so connections are reused
    let client = github::build_client().context("failed to create HTTP client")?;

    // Nothing is printed until every page has been fetched
    let repos = github::list_user_repos(&client, api_base, username).await?;

    print_urls(out, &repos).context("failed to write output")?;
    Ok(())
}

// Writes one connection URL per line, in fetch order
//
// A closed pipe (e.g. `ghrepos octocat | head -1`) means the reader has
// everything it wanted, so it counts as success.
fn print_urls(out: &mut impl Write, repos: &[github::Repository]) -> io::Result<()> {
    let result = repos
        .iter()
        .try_for_each(|repo| writeln!(out, "{}", repo.connection_url))
        .and_then(|()| out.flush());

    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
