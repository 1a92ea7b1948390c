use crate::cli::{self, Args, OutputFormat};
use log::info;
use noscope::{
    scope_domains, scope_ips, DnsResolverBuilder, MatchResult, Resolve, Result, Scope,
};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/// Run a scoping pass for the command line arguments: load the scope and inputs, classify the
/// domains and then the IP addresses, and emit the results.
pub fn run(args: &Args) -> Result<()> {
    if !args.no_banner && args.format == OutputFormat::Table {
        println!("{}", cli::output::banner());
    }

    // Fatal input errors surface before any lookups
    let scope = Scope::from_file(&args.scope_file)?;
    let domains = args.domain_source().map(|source| source.entries()).transpose()?;
    let ips = args.ip_source().map(|source| source.entries()).transpose()?;

    let results = scope_inputs(&scope, domains.as_deref(), ips.as_deref(), || {
        DnsResolverBuilder::new().build()
    })?;

    cli::log::summary(
        domains.as_ref().map_or(0, Vec::len),
        ips.as_ref().map_or(0, Vec::len),
        &results,
    );

    if let Some(path) = &args.output_file {
        cli::output::save(&results, path)?;
        info!("Saved {} in-scope item(s) to {:?}", results.len(), path);
    }

    if let Some(path) = &args.csv_file {
        cli::csv::save(&results, path)?;
        info!("Saved {} in-scope item(s) to {:?}", results.len(), path);
    }

    cli::output::results(&results, args.format)
}

/*--------------------------------------------------------------------------------------
  Scope Domains and IP Addresses
--------------------------------------------------------------------------------------*/

/// Domain matches in input order, followed by IP matches in input order. The resolver is only
/// built when there are domains to look up.
fn scope_inputs<R, F>(
    scope: &Scope,
    domains: Option<&[String]>,
    ips: Option<&[String]>,
    resolver: F,
) -> Result<Vec<MatchResult>>
where
    R: Resolve,
    F: FnOnce() -> Result<R>,
{
    let mut results: Vec<MatchResult> = Vec::new();

    if let Some(domains) = domains {
        let resolver = resolver()?;
        results.extend(scope_domains(domains, scope, &resolver));
    }

    if let Some(ips) = ips {
        results.extend(scope_ips(ips, scope));
    }

    Ok(results)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::InputSource;
    use clap::Parser;
    use std::collections::BTreeMap;
    use std::net::IpAddr;
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Test Helper Functions
    ----------------------------------------------------------------------------------*/

    struct TableResolver(BTreeMap<&'static str, Vec<IpAddr>>);

    impl Resolve for TableResolver {
        fn resolve(&self, domain: &str) -> Vec<IpAddr> {
            self.0.get(domain).cloned().unwrap_or_default()
        }
    }

    fn ip(address: &str) -> IpAddr {
        address.parse().unwrap()
    }

    fn test_resolver() -> Result<TableResolver> {
        Ok(TableResolver(BTreeMap::from([
            ("a.example.com", vec![ip("10.0.0.5")]),
            ("b.example.com", vec![ip("8.8.8.8"), ip("10.0.0.9")]),
            ("c.example.com", vec![ip("1.1.1.1")]),
        ])))
    }

    fn entries(source: Option<InputSource>) -> Option<Vec<String>> {
        source.map(|source| source.entries().unwrap())
    }

    /*----------------------------------------------------------------------------------
      scope_inputs
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_scope_inputs_domains_before_ips() {
        // IPs are given before domains on the command line
        let args = Args::parse_from([
            "noscope", "-s", "scope.txt", "-i", "10.0.0.7", "8.8.4.4", "10.0.0.1", "-d",
            "b.example.com", "c.example.com", "a.example.com",
        ]);
        let scope: Scope = "10.0.0.0/24".parse().unwrap();

        let domains = entries(args.domain_source());
        let ips = entries(args.ip_source());

        let results =
            scope_inputs(&scope, domains.as_deref(), ips.as_deref(), test_resolver).unwrap();

        assert_eq!(
            results,
            vec![
                MatchResult::domain("b.example.com", ip("10.0.0.9")),
                MatchResult::domain("a.example.com", ip("10.0.0.5")),
                MatchResult::address("10.0.0.7"),
                MatchResult::address("10.0.0.1"),
            ]
        );
    }

    #[test]
    fn test_scope_inputs_ips_only_skips_resolver() {
        let scope: Scope = "10.0.0.0/24".parse().unwrap();
        let ips = vec!["10.0.0.1".to_string()];

        let unbuildable = || -> Result<TableResolver> { Err("no resolver".into()) };

        let results = scope_inputs(&scope, None, Some(ips.as_slice()), unbuildable).unwrap();

        assert_eq!(results, vec![MatchResult::address("10.0.0.1")]);
    }

    #[test]
    fn test_scope_inputs_resolver_error_is_fatal() {
        let scope: Scope = "10.0.0.0/24".parse().unwrap();
        let domains = vec!["a.example.com".to_string()];

        let unbuildable = || -> Result<TableResolver> { Err("no resolver".into()) };

        let result = scope_inputs(&scope, Some(domains.as_slice()), None, unbuildable);

        assert!(result.is_err());
    }
}
