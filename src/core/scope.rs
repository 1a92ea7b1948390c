use crate::core::errors::{file_error, invalid_range, Error, Result};
use ipnetwork::IpNetwork;
use log::{debug, info, trace, warn};
use std::fs;
use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Membership Test
-------------------------------------------------------------------------------------------------*/

/// Returns `true` when `address` parses as an IP address contained by any of the `ranges`.
///
/// Malformed addresses are never an error; they are simply not in scope.
///
/// ```
/// use noscope::ipnetwork::IpNetwork;
///
/// let ranges: Vec<IpNetwork> = vec!["10.0.0.0/8".parse().unwrap()];
///
/// assert!(noscope::is_in_scope("10.1.2.3", &ranges));
/// assert!(!noscope::is_in_scope("8.8.8.8", &ranges));
/// assert!(!noscope::is_in_scope("not-an-ip", &ranges));
/// ```
pub fn is_in_scope(address: &str, ranges: &[IpNetwork]) -> bool {
    match address.parse::<IpAddr>() {
        Ok(ip) => contains(ranges, ip),
        Err(_) => {
            debug!("Invalid IP address treated as out of scope: {:?}", address);
            false
        }
    }
}

fn contains(ranges: &[IpNetwork], ip: IpAddr) -> bool {
    ranges
        .iter()
        .find(|range| range.contains(ip))
        .inspect(|range| trace!("{ip} is contained by {range}"))
        .is_some()
}

/*-------------------------------------------------------------------------------------------------
  Scope
-------------------------------------------------------------------------------------------------*/

/// The ordered set of CIDR ranges considered in-bounds for a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    ranges: Vec<IpNetwork>,
}

impl Scope {
    /// Load the scope ranges from a plain-text file containing one CIDR range per line.
    ///
    /// Blank lines and `#` comment lines are ignored. Any other line that is not a valid IPv4
    /// or IPv6 CIDR range fails the whole load.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(file_error("Unable to read scope file", path))?;
        let scope = text
            .parse::<Scope>()
            .map_err(file_error("Invalid scope file", path))?;

        info!("Loaded {} scope range(s) from {:?}", scope.len(), path);
        Ok(scope)
    }

    pub fn ranges(&self) -> &[IpNetwork] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Test whether an IP address falls within any of the scope ranges.
    pub fn contains(&self, ip: IpAddr) -> bool {
        contains(&self.ranges, ip)
    }

    /// Test whether a textual IP address falls within any of the scope ranges. Malformed
    /// addresses are out of scope.
    pub fn is_in_scope(&self, address: &str) -> bool {
        is_in_scope(address, &self.ranges)
    }
}

/*--------------------------------------------------------------------------------------
  Conversions
--------------------------------------------------------------------------------------*/

impl FromStr for Scope {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut ranges: Vec<IpNetwork> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let range: IpNetwork = line
                .parse()
                .map_err(|error| invalid_range(index + 1, line, error))?;

            // Host bits must be zero
            if range.ip() != range.network() {
                let reason = format!("host bits set; network is {}", range.network());
                return Err(invalid_range(index + 1, line, reason));
            }

            ranges.push(range);
        }

        if ranges.is_empty() {
            warn!("Scope contains no CIDR ranges; nothing will be in scope");
        }

        Ok(Scope { ranges })
    }
}

impl From<Vec<IpNetwork>> for Scope {
    fn from(ranges: Vec<IpNetwork>) -> Self {
        Scope { ranges }
    }
}

impl FromIterator<IpNetwork> for Scope {
    fn from_iter<I: IntoIterator<Item = IpNetwork>>(iter: I) -> Self {
        Scope {
            ranges: iter.into_iter().collect(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
