use crate::core::errors::{Error, Result};
use log::{debug, info, warn};
use std::env;
use std::net::IpAddr;
use std::time::Duration;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::Resolver;

/*-------------------------------------------------------------------------------------------------
  Resolve Trait
-------------------------------------------------------------------------------------------------*/

/// Forward lookup of a domain name to its addresses.
///
/// Implementations never fail: a domain that cannot be resolved yields an empty list so one bad
/// domain does not abort a batch.
pub trait Resolve {
    fn resolve(&self, domain: &str) -> Vec<IpAddr>;
}

/*-------------------------------------------------------------------------------------------------
  DNS Resolver Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [DnsResolver] struct.
///
/// ```
/// let builder = noscope::DnsResolverBuilder::default()
///     .timeout(2000) // 2 seconds
///     .attempts(3)
///     .system_config(false)
///     .clone();
/// ```
///
/// The [DnsResolverBuilder::new] method sources configuration values from environment variables
/// when set and uses default values when the environment variables are not set. Use
/// [DnsResolverBuilder::default] to ignore the environment.
#[derive(Debug, Clone)]
pub struct DnsResolverBuilder {
    timeout: u64,
    attempts: usize,
    system_config: bool,
}

impl Default for DnsResolverBuilder {
    fn default() -> Self {
        Self {
            timeout: 5000, // 5 seconds
            attempts: 2,
            system_config: true,
        }
    }
}

impl DnsResolverBuilder {
    /// Create a new [DnsResolverBuilder] reading initial configuration values from
    /// environment variables when set and default values when they are not set.
    ///
    /// The environment variables used to set the initial configuration values are:
    /// - `NOSCOPE_DNS_TIMEOUT`
    /// - `NOSCOPE_DNS_ATTEMPTS`
    /// - `NOSCOPE_DNS_SYSTEM_CONFIG`
    pub fn new() -> Self {
        let default = DnsResolverBuilder::default();

        Self {
            timeout: get_env_var("NOSCOPE_DNS_TIMEOUT", default.timeout),
            attempts: get_env_var("NOSCOPE_DNS_ATTEMPTS", default.attempts),
            system_config: get_env_var("NOSCOPE_DNS_SYSTEM_CONFIG", default.system_config),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the per-query timeout in milliseconds; defaults to `5000`.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of attempts per query; defaults to `2`.
    pub fn attempts(&mut self, attempts: usize) -> &mut Self {
        self.attempts = attempts;
        self
    }

    /// Use the operating system's resolver configuration (`/etc/resolv.conf` on Unix) when
    /// `true`, or the library's default upstream name servers when `false`; defaults to `true`.
    pub fn system_config(&mut self, system_config: bool) -> &mut Self {
        self.system_config = system_config;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Result<DnsResolver> {
        let (config, mut options) = if self.system_config {
            read_system_conf().map_err(|error| {
                Error::from(format!(
                    "Unable to read the system resolver configuration: {error}"
                ))
            })?
        } else {
            (ResolverConfig::default(), ResolverOpts::default())
        };

        options.timeout = Duration::from_millis(self.timeout);
        options.attempts = self.attempts;

        let resolver = Resolver::new(config, options)
            .map_err(|error| Error::from(format!("Unable to create DNS resolver: {error}")))?;

        info!(
            "DNS resolver ready (system config: {}, timeout: {} ms, attempts: {})",
            self.system_config, self.timeout, self.attempts
        );

        Ok(DnsResolver {
            resolver,
            timeout: self.timeout,
            attempts: self.attempts,
            system_config: self.system_config,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  DNS Resolver
-------------------------------------------------------------------------------------------------*/

/// Resolves domains to their IPv4 ("A" record) addresses using DNS.
///
/// ```no_run
/// use noscope::Resolve;
///
/// let resolver = noscope::DnsResolver::new()?;
/// let addresses = resolver.resolve("example.com");
/// # Ok::<(), noscope::Error>(())
/// ```
pub struct DnsResolver {
    resolver: Resolver,
    timeout: u64,
    attempts: usize,
    system_config: bool,
}

impl DnsResolver {
    pub fn new() -> Result<Self> {
        DnsResolverBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the per-query timeout in milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn system_config(&self) -> bool {
        self.system_config
    }
}

impl Resolve for DnsResolver {
    fn resolve(&self, domain: &str) -> Vec<IpAddr> {
        match self.resolver.ipv4_lookup(domain) {
            Ok(lookup) => {
                let addresses: Vec<IpAddr> =
                    lookup.iter().map(|address| IpAddr::V4(*address)).collect();
                debug!("Resolved {domain} to {addresses:?}");
                addresses
            }
            Err(error) => {
                log_resolve_error(domain, &error);
                Vec::new()
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn log_resolve_error(domain: &str, error: &ResolveError) {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            warn!("Domain does not exist: {domain}")
        }
        ResolveErrorKind::NoRecordsFound { .. } => {
            warn!("No DNS response received for: {domain}")
        }
        ResolveErrorKind::Timeout => warn!("DNS lookup timed out for: {domain}"),
        _ => warn!("DNS lookup failed for {domain}: {error}"),
    }
}

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
