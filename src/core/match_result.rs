use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Match Result
-------------------------------------------------------------------------------------------------*/

/// An in-scope candidate paired with the address that placed it in scope. Raw IP candidates
/// carry no separate matched address.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchResult {
    /// Domain name or IP address exactly as supplied.
    pub name: String,

    /// First resolved address found inside the scope; `None` for raw IP candidates.
    pub address: Option<IpAddr>,
}

impl MatchResult {
    pub fn domain(name: &str, address: IpAddr) -> Self {
        Self {
            name: name.to_string(),
            address: Some(address),
        }
    }

    pub fn address(name: &str) -> Self {
        Self {
            name: name.to_string(),
            address: None,
        }
    }

    /// The matched address as text; empty when there is none.
    pub fn address_text(&self) -> String {
        self.address
            .map(|address| address.to_string())
            .unwrap_or_default()
    }
}

/// Formats as `<name>:<address-or-empty>`, the line format of the output file.
impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.address_text())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_display() {
        let domain = MatchResult::domain("a.example.com", "10.0.0.5".parse().unwrap());
        let address = MatchResult::address("10.0.0.7");

        assert_eq!(domain.to_string(), "a.example.com:10.0.0.5");
        assert_eq!(address.to_string(), "10.0.0.7:");
    }

    #[test]
    fn test_match_result_serialize() {
        let domain = MatchResult::domain("a.example.com", "10.0.0.5".parse().unwrap());
        let address = MatchResult::address("10.0.0.7");

        assert_eq!(
            serde_json::to_string(&domain).unwrap(),
            r#"{"name":"a.example.com","address":"10.0.0.5"}"#
        );
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            r#"{"name":"10.0.0.7","address":null}"#
        );
    }
}
