//! Lightning address resolution.
//!
//! A lightning address `user@domain` names the pay endpoint
//! `https://domain/.well-known/lnurlp/user`.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::config::WELL_KNOWN_LNURLP_PATH;
use crate::{LnurlError, Result};

/// A parsed `user@domain` lightning address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LightningAddress {
    username: String,
    domain: String,
}

impl LightningAddress {
    /// Split `address` at its single `@`.
    ///
    /// Addresses with no `@`, more than one, or an empty side are rejected.
    pub fn parse(address: &str) -> Result<Self> {
        let mut parts = address.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(username), Some(domain), None) if !username.is_empty() && !domain.is_empty() => {
                Ok(Self {
                    username: username.to_string(),
                    domain: domain.to_string(),
                })
            }
            _ => Err(LnurlError::InvalidLightningAddress(address.to_string())),
        }
    }

    /// The part before the `@`.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The metadata URL as text.
    pub fn to_url_string(&self) -> String {
        format!(
            "https://{}/{}/{}",
            self.domain, WELL_KNOWN_LNURLP_PATH, self.username
        )
    }

    /// The metadata URL, parsed.
    pub fn url(&self) -> Result<Url> {
        let text = self.to_url_string();
        Url::parse(&text).map_err(|err| LnurlError::invalid_url(text, err))
    }
}

impl FromStr for LightningAddress {
    type Err = LnurlError;

    fn from_str(address: &str) -> Result<Self> {
        Self::parse(address)
    }
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.domain)
    }
}

/// Resolve `address` to its metadata URL.
pub fn resolve(address: &str) -> Result<String> {
    Ok(LightningAddress::parse(address)?.to_url_string())
}
