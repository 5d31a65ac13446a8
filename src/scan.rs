// src/scan.rs
// =============================================================================
// One full run of the tool:
//
//   discover (set of unique links) -> check (one outcome per link) -> report
//
// Each step is a plain function of the previous step's output. Nothing is
// kept between runs and nothing is shared globally.
// =============================================================================

use crate::checker::{self, LinkCheckResult, LinkExtractor};
use crate::config::CheckConfig;
use anyhow::Result;

/// Exit status of every completed run, broken links or not
pub const RUN_EXIT_CODE: i32 = 1;

/// Exit status when the run aborts on an unexpected error
pub const ERROR_EXIT_CODE: i32 = 2;

/// Everything a run found out
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// One entry per unique link, in the order they were checked
    pub results: Vec<LinkCheckResult>,
}

impl ScanReport {
    /// URLs that did not answer 200, in check order
    pub fn failures(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| !r.is_ok())
            .map(|r| r.url.clone())
            .collect()
    }
}

// Discovers and checks every link described by `config`
//
// Returns an error only for problems with the run itself (bad config,
// unreadable files). Dead links end up in the report.
pub async fn run(config: &CheckConfig) -> Result<ScanReport> {
    config.validate()?;

    let extractor = LinkExtractor::new(config.prefixes.as_slice())?;
    let links = checker::discover_links(config, &extractor)?;

    let client = checker::build_client(config.timeout, config.no_proxy)?;
    let results = checker::check_links(&client, links).await;

    let report = ScanReport { results };
    tracing::info!(
        checked = report.results.len(),
        failed = report.failures().len(),
        "scan finished"
    );

    Ok(report)
}

// Formats the failure list the way it is printed at the end of a run
//
// Example: ["https://stripe.com/gone", "https://github.com/old/repo"]
// An empty list prints as []
pub fn format_failures(failures: &[String]) -> String {
    format!("{:?}", failures)
}
