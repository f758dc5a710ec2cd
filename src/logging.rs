// src/logging.rs
// =============================================================================
// Diagnostic logging with `tracing`.
//
// Output goes to stderr so stdout stays a clean list of URLs. The level comes
// from -v on the command line (warn by default, so a normal run is silent).
// =============================================================================

use tracing::level_filters::LevelFilter;

pub fn configure_logging(level: LevelFilter) {
    // try_init: keep a subscriber that was installed earlier instead of
    // replacing it
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)            // module paths add noise for a tiny CLI
        .with_writer(std::io::stderr)
        .try_init();
}
