// src/checker/extract.rs
// =============================================================================
// This module pulls candidate links out of plain text.
//
// We don't parse Markdown or HTML here. A link is simply:
//   <one of the prefixes> followed by everything up to the first delimiter
//
// Delimiters: backslash, ')', '|', '"', space, '<' (or the end of the line)
//
// That catches links in Markdown "[text](url)", HTML "href=\"url\"",
// tables "| url |" and bare URLs, which is all the docs ever contain.
//
// Rust concepts:
// - Regex: Compiled once, reused for every line
// - Iterators: find_iter() walks over all matches in a line
// - Lossy UTF-8: Turning arbitrary bytes into a String without failing
// =============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

// Everything a link may NOT contain. Matching stops at the first one.
const LINK_BODY: &str = r#"[^\\)|" <]*"#;

/// Finds links that start with one of a fixed set of prefixes
///
/// One regex per prefix, kept in the order the prefixes were given.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    patterns: Vec<Regex>,
}

impl LinkExtractor {
    // Builds one pattern per prefix
    //
    // The prefix is escaped, so the '.' in "stripe.com" only matches a dot.
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Result<Self> {
        let patterns = prefixes
            .iter()
            .map(|prefix| {
                let prefix = prefix.as_ref();
                Regex::new(&format!("{}{}", regex::escape(prefix), LINK_BODY))
                    .with_context(|| format!("failed to build link pattern for '{}'", prefix))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(LinkExtractor { patterns })
    }

    // Extracts links from a block of text
    //
    // Works line by line. Within a line, all matches of the first prefix come
    // first, then all matches of the second, and so on.
    // Duplicates are kept; deduplication happens later in discover.rs.
    //
    // Example:
    //   "see (https://github.com/x/y) for info" -> ["https://github.com/x/y"]
    pub fn extract_links(&self, text: &str) -> Vec<String> {
        let mut links = Vec::new();

        // "\n", "\r\n" and a lone "\r" all end a line, so a link at the end
        // of a line never carries a line ending or runs into the next line
        for line in text.split(|c: char| c == '\n' || c == '\r') {
            for pattern in &self.patterns {
                links.extend(pattern.find_iter(line).map(|m| m.as_str().to_string()));
            }
        }

        links
    }

    // Extracts links from a file on disk
    //
    // Anything that isn't a regular file (a directory, a missing path)
    // simply has no links. Read errors on a real file are returned.
    pub fn extract_links_from_file(&self, path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Ok(Vec::new());
        }

        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

        // Images and other binaries live next to the docs; decode them lossily
        // instead of failing the whole run
        let text = String::from_utf8_lossy(&bytes);

        Ok(self.extract_links(&text))
    }
}
