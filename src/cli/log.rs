use crate::cli::Args;
use log::{info, warn};
use noscope::MatchResult;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/// Send log records from this crate to stderr at the verbosity selected on the command line.
pub fn init(args: &Args) {
    stderrlog::new()
        .module(env!("CARGO_PKG_NAME"))
        .verbosity(args.verbose.log_level_filter())
        .init()
        .unwrap_or_else(|error| eprintln!("Unable to initialize logging: {error}"));
}

/*--------------------------------------------------------------------------------------
  Scoping Summary
--------------------------------------------------------------------------------------*/

pub fn summary(domain_count: usize, ip_count: usize, results: &[MatchResult]) {
    if domain_count > 0 {
        let domain_matches = results
            .iter()
            .filter(|result| result.address.is_some())
            .count();
        info!("Found {domain_matches} of {domain_count} domain(s) in scope");
    }

    if ip_count > 0 {
        let ip_matches = results
            .iter()
            .filter(|result| result.address.is_none())
            .count();
        info!("Found {ip_matches} of {ip_count} IP address(es) in scope");
    }

    if results.is_empty() {
        warn!("Nothing in scope");
    };
}
