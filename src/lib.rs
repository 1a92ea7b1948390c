//! Scope IP addresses and domains against a set of CIDR ranges.
//!
//! Load the in-bounds CIDR ranges into a [Scope], then classify raw IP addresses with
//! [scope_ips] or domains with [scope_domains]. Domains are resolved through any [Resolve]
//! implementation; [DnsResolver] performs IPv4 ("A" record) lookups using DNS.
//!
//! ```no_run
//! # fn main() -> noscope::Result<()> {
//! let scope = noscope::Scope::from_file("scope.txt")?;
//! let resolver = noscope::DnsResolver::new()?;
//!
//! let mut results = noscope::scope_domains(["www.example.com"], &scope, &resolver);
//! results.extend(noscope::scope_ips(["10.0.0.5", "8.8.8.8"], &scope));
//!
//! for result in &results {
//!     println!("{result}");
//! }
//! # Ok(())
//! # }
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::candidate::Candidate;
pub use crate::core::errors::{Error, Result};
pub use crate::core::match_result::MatchResult;
pub use crate::core::resolver::{DnsResolver, DnsResolverBuilder, Resolve};
pub use crate::core::scope::{is_in_scope, Scope};
pub use crate::core::scoper::{scope_candidates, scope_domains, scope_ips};
pub use crate::core::utils::read_lines;

/*--------------------------------------------------------------------------------------
  Re-exports
--------------------------------------------------------------------------------------*/

pub use ipnetwork;
