// src/checker/discover.rs
// =============================================================================
// This module finds every link we need to check.
//
// How it works:
// 1. Walk the docs directory recursively (every file, any depth)
// 2. Extract links from each file
// 3. Extract links from the readme
// 4. Put everything in one set so each URL is checked only once
//
// The walk behaves like a shell "docs/**" glob:
// - hidden files and directories (".git", ".DS_Store") are skipped
// - symlinked directories are not followed, so there are no loops
// - a missing docs directory just means "no links"
//
// Rust concepts:
// - BTreeSet: A sorted set, so the output order is the same on every run
// - WalkDir: An iterator over a whole directory tree
// - Context: Attaching the failing path to an error
// =============================================================================

use super::extract::LinkExtractor;
use crate::config::CheckConfig;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

// Collects the unique links from the docs tree and the readme
pub fn discover_links(config: &CheckConfig, extractor: &LinkExtractor) -> Result<BTreeSet<String>> {
    let mut links = discover_links_in_tree(&config.docs_dir, extractor)?;

    let readme_links = extractor.extract_links_from_file(&config.readme)?;
    if readme_links.is_empty() && !config.readme.is_file() {
        tracing::warn!("readme {} not found, skipping it", config.readme.display());
    }
    tracing::debug!("{} link(s) in {}", readme_links.len(), config.readme.display());
    links.extend(readme_links);

    tracing::info!("discovered {} unique link(s)", links.len());
    Ok(links)
}

// Collects the unique links from every file under `root`
//
// Directories and other non-files are visited but contribute nothing.
// A directory we can't read aborts the walk with an error.
pub fn discover_links_in_tree(root: &Path, extractor: &LinkExtractor) -> Result<BTreeSet<String>> {
    let mut links = BTreeSet::new();

    if !root.exists() {
        tracing::warn!("docs directory {} not found, skipping it", root.display());
        return Ok(links);
    }

    // filter_entry prunes whole hidden directories instead of visiting
    // their contents; the root itself is always kept, even if it's "."
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        let found = extractor.extract_links_from_file(entry.path())?;

        if !found.is_empty() {
            tracing::debug!("{} link(s) in {}", found.len(), entry.path().display());
        }

        links.extend(found);
    }

    Ok(links)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
