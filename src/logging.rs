// src/logging.rs
// =============================================================================
// Sets up `tracing` so the rest of the code can use info!/debug!/warn!.
//
// Logs go to stderr. Stdout belongs to the report (progress lines and the
// final list of broken links), so the two never get mixed up in a pipe.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter like "debug" or "doc_link_check=trace"
pub const LOG_ENV_VAR: &str = "DOC_LINK_CHECK_LOG";

/// Installs the global subscriber. Call once, before anything logs.
///
/// `verbose` switches the default level from warn to debug. The environment
/// variable still wins when it is set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");

    Ok(())
}
