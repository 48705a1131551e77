//! Viewer wallet address normalization.
//!
//! Ownership comparisons are textual: a global record belongs to the
//! viewer when its `owner` field, lowercased and trimmed, equals the
//! viewer's address in the same form. Parsing normalizes once up front so
//! the comparison itself stays a plain string equality.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why an address string failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address must have 40 hex digits after 0x, got {0}")]
    BadLength(usize),
    #[error("address contains non-hex character {0:?}")]
    NonHex(char),
}

/// A normalized (trimmed, lowercased) wallet address.
///
/// ```
/// use garland_tree::ViewerAddress;
///
/// let addr: ViewerAddress = "  0x71C7656EC7ab88b098defB751B7401B5f6d89A21 "
///     .parse()
///     .unwrap();
/// assert_eq!(addr.as_str(), "0x71c7656ec7ab88b098defb751b7401b5f6d89a21");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewerAddress(String);

impl ViewerAddress {
    /// The normalized address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `owner` denotes this address, after the same normalization.
    pub fn matches(&self, owner: &str) -> bool {
        owner.trim().eq_ignore_ascii_case(&self.0)
    }
}

impl FromStr for ViewerAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();

        let digits = normalized
            .strip_prefix("0x")
            .ok_or(AddressError::MissingPrefix)?;

        if digits.len() != 40 {
            return Err(AddressError::BadLength(digits.len()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::NonHex(bad));
        }

        Ok(Self(normalized))
    }
}

impl fmt::Display for ViewerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x71c7656ec7ab88b098defb751b7401b5f6d89a21";

    #[test]
    fn parses_and_normalizes() {
        let mixed = "  0x71C7656EC7ab88b098defB751B7401B5f6d89A21\n";
        let addr: ViewerAddress = mixed.parse().unwrap();
        assert_eq!(addr.as_str(), ADDR);
        assert_eq!(addr.to_string(), ADDR);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = "71c7656ec7ab88b098defb751b7401b5f6d89a21"
            .parse::<ViewerAddress>()
            .unwrap_err();
        assert_eq!(err, AddressError::MissingPrefix);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "0x1234".parse::<ViewerAddress>().unwrap_err();
        assert_eq!(err, AddressError::BadLength(4));
    }

    #[test]
    fn rejects_non_hex() {
        let err = "0xZ1c7656ec7ab88b098defb751b7401b5f6d89a21"
            .parse::<ViewerAddress>()
            .unwrap_err();
        assert_eq!(err, AddressError::NonHex('z'));
    }

    #[test]
    fn matches_is_case_and_whitespace_insensitive() {
        let addr: ViewerAddress = ADDR.parse().unwrap();
        assert!(addr.matches(ADDR));
        assert!(addr.matches(&ADDR.to_ascii_uppercase()));
        assert!(addr.matches(&format!("  {ADDR}  ")));
        assert!(!addr.matches("0x0000000000000000000000000000000000000000"));
    }
}
