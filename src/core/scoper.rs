use crate::core::candidate::Candidate;
use crate::core::match_result::MatchResult;
use crate::core::resolver::Resolve;
use crate::core::scope::Scope;
use log::{debug, info};

/*-------------------------------------------------------------------------------------------------
  Scoping Pipeline
-------------------------------------------------------------------------------------------------*/

/// Classify a sequence of candidates against the scope, returning the in-scope candidates in
/// input order.
///
/// Domains are resolved with `resolver` and recorded with the first resolved address inside the
/// scope; remaining addresses for that domain are not tested. Raw addresses are recorded without
/// a separate matched address.
pub fn scope_candidates<'c, C, R>(candidates: C, scope: &Scope, resolver: &R) -> Vec<MatchResult>
where
    C: IntoIterator<Item = &'c Candidate>,
    R: Resolve + ?Sized,
{
    candidates
        .into_iter()
        .filter_map(|candidate| match candidate {
            Candidate::Domain(domain) => scope_domain(domain, scope, resolver),
            Candidate::Address(address) => scope_ip(address, scope),
        })
        .collect()
}

/// Resolve each domain and return the domains with an address inside the scope.
///
/// ```
/// use std::net::IpAddr;
///
/// struct Fixed;
///
/// impl noscope::Resolve for Fixed {
///     fn resolve(&self, _domain: &str) -> Vec<IpAddr> {
///         vec!["10.0.0.5".parse().unwrap()]
///     }
/// }
///
/// let scope: noscope::Scope = "10.0.0.0/24".parse()?;
/// let results = noscope::scope_domains(["a.example.com"], &scope, &Fixed);
///
/// assert_eq!(results[0].to_string(), "a.example.com:10.0.0.5");
/// # Ok::<(), noscope::Error>(())
/// ```
pub fn scope_domains<I, S, R>(domains: I, scope: &Scope, resolver: &R) -> Vec<MatchResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Resolve + ?Sized,
{
    domains
        .into_iter()
        .filter_map(|domain| scope_domain(domain.as_ref(), scope, resolver))
        .collect()
}

/// Return the raw IP addresses inside the scope. Malformed addresses are out of scope.
pub fn scope_ips<I, S>(ips: I, scope: &Scope) -> Vec<MatchResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ips.into_iter()
        .filter_map(|ip| scope_ip(ip.as_ref(), scope))
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn scope_domain<R>(domain: &str, scope: &Scope, resolver: &R) -> Option<MatchResult>
where
    R: Resolve + ?Sized,
{
    let addresses = resolver.resolve(domain);

    match addresses.into_iter().find(|address| scope.contains(*address)) {
        Some(address) => {
            info!("In scope: {domain} ({address})");
            Some(MatchResult::domain(domain, address))
        }
        None => {
            debug!("Out of scope: {domain}");
            None
        }
    }
}

fn scope_ip(ip: &str, scope: &Scope) -> Option<MatchResult> {
    if scope.is_in_scope(ip) {
        info!("In scope: {ip}");
        Some(MatchResult::address(ip))
    } else {
        debug!("Out of scope: {ip}");
        None
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scope::tests::test_scope;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::net::IpAddr;
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Test Helper Functions
    ----------------------------------------------------------------------------------*/

    /// Resolver answering from a fixed table and recording every lookup.
    #[derive(Default)]
    struct TableResolver {
        table: BTreeMap<&'static str, Vec<IpAddr>>,
        lookups: RefCell<Vec<String>>,
    }

    impl TableResolver {
        fn with(mut self, domain: &'static str, addresses: &[&str]) -> Self {
            self.table.insert(
                domain,
                addresses.iter().map(|address| address.parse().unwrap()).collect(),
            );
            self
        }
    }

    impl Resolve for TableResolver {
        fn resolve(&self, domain: &str) -> Vec<IpAddr> {
            self.lookups.borrow_mut().push(domain.to_string());
            self.table.get(domain).cloned().unwrap_or_default()
        }
    }

    fn test_resolver() -> TableResolver {
        TableResolver::default()
            .with("a.example.com", &["10.0.0.5"])
            .with("b.example.com", &["172.16.0.1", "10.0.0.9", "10.0.0.10"])
            .with("c.example.com", &["8.8.8.8", "1.1.1.1"])
            .with("d.example.com", &["192.168.1.3"])
    }

    /*----------------------------------------------------------------------------------
      Domain Mode
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_scope_domains_single_match() {
        let scope: Scope = "10.0.0.0/24".parse().unwrap();
        let results = scope_domains(["a.example.com"], &scope, &test_resolver());

        assert_eq!(
            results,
            vec![MatchResult::domain("a.example.com", "10.0.0.5".parse().unwrap())]
        );
    }

    #[test]
    fn test_scope_domains_first_match_wins() {
        let scope: Scope = "10.0.0.0/24".parse().unwrap();
        let results = scope_domains(["b.example.com"], &scope, &test_resolver());

        // Only the second address is in scope; the third is never reported
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].address, Some("10.0.0.9".parse().unwrap()));
    }

    #[test]
    fn test_scope_domains_out_of_scope_and_unresolved() {
        let scope = test_scope();
        let resolver = test_resolver();
        let results = scope_domains(
            ["c.example.com", "missing.example.com", "d.example.com"],
            &scope,
            &resolver,
        );

        assert_eq!(
            results,
            vec![MatchResult::domain("d.example.com", "192.168.1.3".parse().unwrap())]
        );
        assert_eq!(resolver.lookups.borrow().len(), 3); // Unresolved domains do not stop the batch
    }

    #[test]
    fn test_scope_domains_preserves_input_order() {
        let scope = test_scope();
        let results = scope_domains(
            ["d.example.com", "a.example.com", "b.example.com"],
            &scope,
            &test_resolver(),
        );

        let names: Vec<&str> = results.iter().map(|result| result.name.as_str()).collect();
        assert_eq!(names, vec!["d.example.com", "a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_scope_domains_reports_duplicates_per_entry() {
        let scope = test_scope();
        let results = scope_domains(["a.example.com", "a.example.com"], &scope, &test_resolver());

        assert_eq!(results.len(), 2);
    }

    /*----------------------------------------------------------------------------------
      IP Mode
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_scope_ips() {
        let scope = test_scope();
        let results = scope_ips(
            ["10.0.0.1", "8.8.8.8", "bogus", "2001:db8::5", "192.168.1.20"],
            &scope,
        );

        assert_eq!(
            results,
            vec![
                MatchResult::address("10.0.0.1"),
                MatchResult::address("2001:db8::5"),
            ]
        );
    }

    #[test]
    fn test_scope_ips_none_in_scope() {
        let scope: Scope = "10.0.0.0/8".parse().unwrap();
        assert!(scope_ips(["8.8.8.8"], &scope).is_empty());
    }

    /*----------------------------------------------------------------------------------
      Mixed Candidates
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_scope_candidates_domains_then_ips() {
        let scope = test_scope();
        let resolver = test_resolver();

        let mut candidates = Candidate::domains(["c.example.com", "a.example.com"]);
        candidates.extend(Candidate::addresses(["10.0.0.200", "8.8.4.4"]));

        let results = scope_candidates(&candidates, &scope, &resolver);

        assert_eq!(
            results,
            vec![
                MatchResult::domain("a.example.com", "10.0.0.5".parse().unwrap()),
                MatchResult::address("10.0.0.200"),
            ]
        );

        // Raw addresses are never sent to the resolver
        assert_eq!(
            *resolver.lookups.borrow(),
            vec!["c.example.com".to_string(), "a.example.com".to_string()]
        );
    }
}
