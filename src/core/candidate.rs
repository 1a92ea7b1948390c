use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Candidate
-------------------------------------------------------------------------------------------------*/

/// An item to classify against the scope: either a raw IP address or a domain name that must be
/// resolved first.
///
/// Raw addresses are kept as text so malformed input can be classified as out of scope instead
/// of failing the run.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Candidate {
    Domain(String),
    Address(String),
}

impl Candidate {
    /// The identifier reported for this candidate in the results.
    pub fn name(&self) -> &str {
        match self {
            Candidate::Domain(name) => name,
            Candidate::Address(address) => address,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Candidate::Domain(_))
    }

    /// Build domain candidates from a sequence of names.
    pub fn domains<I, S>(names: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| Candidate::Domain(name.as_ref().to_string()))
            .collect()
    }

    /// Build address candidates from a sequence of textual IP addresses.
    pub fn addresses<I, S>(addresses: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses
            .into_iter()
            .map(|address| Candidate::Address(address.as_ref().to_string()))
            .collect()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
