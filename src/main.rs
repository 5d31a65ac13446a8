// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Run the scan (discover links, check each one)
// 4. Print the list of broken links
// 5. Exit with code 1 - always, even when nothing is broken
//    (2 if the run itself failed)
// =============================================================================

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use doc_link_check::cli::Cli;
use doc_link_check::config::CheckConfig;
use doc_link_check::{logging, scan};

// A single-threaded runtime: links are checked one at a time anyway
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => scan::RUN_EXIT_CODE,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            scan::ERROR_EXIT_CODE
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let config = CheckConfig::from(&cli);
    tracing::debug!(?config, "starting scan");

    let report = scan::run(&config).await?;

    println!("{}", scan::format_failures(&report.failures()));
    Ok(())
}
