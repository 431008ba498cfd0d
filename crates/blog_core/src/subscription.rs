use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("already subscribed: {0}")]
    AlreadySubscribed(String),
}

/// Lower-cased, shape-checked subscriber address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts `local@domain.tld`: one `@`, no whitespace, a dotted domain
    /// whose labels are non-empty.
    pub fn parse(raw: &str) -> Result<Self, SubscribeError> {
        let candidate = raw.trim();
        let invalid = || SubscribeError::InvalidEmail(candidate.to_string());

        if candidate.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = candidate.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(invalid());
        }

        Ok(Self(candidate.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{EmailAddress, SubscribeError};

    #[test]
    fn valid_address_is_lowercased() {
        let email = EmailAddress::parse("  Reader@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "reader@example.com");
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for raw in ["", "reader", "@example.com", "a@b", "a@b..com", "a b@c.com", "a@b@c.com"] {
            assert!(
                matches!(EmailAddress::parse(raw), Err(SubscribeError::InvalidEmail(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
