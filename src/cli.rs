// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Running the tool with no arguments at all does exactly what it always did:
// scan docs/ and README.md for stripe.com and github.com links.
// The flags below only exist so the paths and prefixes can be changed
// (handy for other repositories, and for tests against a local server).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - From trait: Converting one type into another
// =============================================================================

use crate::config::{CheckConfig, DEFAULT_DOCS_DIR, DEFAULT_PREFIXES, DEFAULT_README};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "doc-link-check",
    version,
    about = "Checks that links from the docs to stripe.com and github.com still answer HTTP 200",
    long_about = "doc-link-check scans a documentation directory and a readme for links that start \
                  with the given prefixes, requests each one, and prints the links that did not \
                  answer HTTP 200. It always exits with status 1."
)]
pub struct Cli {
    /// Documentation directory scanned recursively
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DOCS_DIR)]
    pub docs_dir: PathBuf,

    /// Readme file scanned in addition to the docs directory
    #[arg(long, value_name = "FILE", default_value = DEFAULT_README)]
    pub readme: PathBuf,

    /// Link prefix to look for (repeatable, replaces the defaults)
    ///
    /// Example: --prefix https://stripe.com --prefix https://docs.rs
    #[arg(long = "prefix", value_name = "URL", default_values = DEFAULT_PREFIXES)]
    pub prefixes: Vec<String>,

    /// Give up on a single request after this many seconds
    ///
    /// Without it a request waits for as long as the server does.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Ignore proxy environment variables (HTTP_PROXY, HTTPS_PROXY, ...)
    #[arg(long)]
    pub no_proxy: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for CheckConfig {
    fn from(cli: &Cli) -> Self {
        CheckConfig {
            docs_dir: cli.docs_dir.clone(),
            readme: cli.readme.clone(),
            prefixes: cli.prefixes.clone(),
            timeout: cli.timeout.map(Duration::from_secs),
            no_proxy: cli.no_proxy,
        }
    }
}
