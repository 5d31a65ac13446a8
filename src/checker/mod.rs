// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - extract: Finds prefixed links in text and files
// - discover: Walks the docs tree + readme and builds the set of unique links
// - http: Requests each link and decides if it's alive
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod discover;
mod extract;
mod http;

// Re-export public items from submodules
// This lets users write `checker::check_links()` instead of
// `checker::http::check_links()`
pub use discover::{discover_links, discover_links_in_tree};
pub use extract::LinkExtractor;
pub use http::{
    build_client, check_links, check_single_link, validate_url, LinkCheckResult, LinkOutcome,
};
