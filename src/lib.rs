// src/lib.rs
// =============================================================================
// Library side of doc-link-check.
//
// main.rs only parses arguments and picks the exit code; everything else
// lives here so the integration tests in tests/ can call it directly.
// =============================================================================

pub mod checker; // src/checker/ - extracting, discovering and checking links
pub mod cli; // src/cli.rs - command-line parsing
pub mod config; // src/config.rs - settings for one run
pub mod logging; // src/logging.rs - tracing setup
pub mod scan; // src/scan.rs - the discover -> check -> report pipeline

pub use checker::{LinkCheckResult, LinkExtractor, LinkOutcome};
pub use config::CheckConfig;
pub use scan::{format_failures, run, ScanReport};
