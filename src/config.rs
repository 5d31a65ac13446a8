// src/config.rs
// =============================================================================
// This module holds the settings for one link-checking run.
//
// The defaults reproduce the fixed layout the tool was written for:
// - docs/ is scanned recursively
// - README.md is scanned on its own
// - only links to https://stripe.com and https://github.com are checked
//
// Every value can be overridden from the command line (see cli.rs).
//
// Rust concepts:
// - Default trait: A standard way to build a "zero config" value
// - PathBuf: An owned filesystem path
// - Option<Duration>: A timeout that may or may not be set
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Directory scanned recursively when nothing else is given
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Readme scanned in addition to the docs directory
pub const DEFAULT_README: &str = "README.md";

/// Link prefixes checked when no --prefix flag is given
pub const DEFAULT_PREFIXES: [&str; 2] = ["https://stripe.com", "https://github.com"];

/// Everything a run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Root of the documentation tree
    pub docs_dir: PathBuf,
    /// Readme file read on its own
    pub readme: PathBuf,
    /// Links must start with one of these (matched literally)
    pub prefixes: Vec<String>,
    /// Per-request timeout. None means wait forever.
    pub timeout: Option<Duration>,
    /// Ignore HTTP_PROXY / HTTPS_PROXY and friends
    pub no_proxy: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            readme: PathBuf::from(DEFAULT_README),
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            timeout: None,
            no_proxy: false,
        }
    }
}

impl CheckConfig {
    // Checks the settings before any file is read or request is sent
    //
    // Rules:
    // - at least one prefix
    // - every prefix is an absolute http/https URL with a host
    // - a timeout, if set, is not zero
    pub fn validate(&self) -> Result<()> {
        if self.prefixes.is_empty() {
            bail!("at least one link prefix is required");
        }

        for prefix in &self.prefixes {
            validate_prefix(prefix)?;
        }

        if self.timeout == Some(Duration::ZERO) {
            bail!("timeout must be greater than zero");
        }

        Ok(())
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    let parsed = Url::parse(prefix).with_context(|| format!("invalid link prefix '{}'", prefix))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow!(
            "link prefix '{}' must use http or https, not '{}'",
            prefix,
            parsed.scheme()
        ));
    }

    if parsed.host_str().is_none() {
        bail!("link prefix '{}' has no host", prefix);
    }

    Ok(())
}
