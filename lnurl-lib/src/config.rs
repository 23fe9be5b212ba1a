//! Protocol constants and client configuration.

use serde::{Deserialize, Serialize};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable part of every LNURL token.
pub const HRP: &str = "lnurl";

/// Largest signed 32-bit integer.
///
/// Used as the default `max_length` when decoding, which leaves token length
/// effectively unbounded.
pub const MAX_INTEGER: usize = (1 << 31) - 1;

/// URI scheme prefix stripped before decoding (matched case-insensitively).
pub const LIGHTNING_PREFIX: &str = "lightning:";

/// Path under which lightning addresses publish their pay metadata.
pub const WELL_KNOWN_LNURLP_PATH: &str = ".well-known/lnurlp";

/// Redirect hops a fetch follows before giving up.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Configuration for [`LnurlClient`](crate::LnurlClient) and its transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Redirect hops followed per request.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Request timeout in seconds; `0` waits indefinitely.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_max_redirects() -> u32 {
    DEFAULT_MAX_REDIRECTS
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_redirects: default_max_redirects(),
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the redirect budget.
    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new()
            .with_max_redirects(3)
            .with_timeout(0)
            .with_user_agent("wallet/1.0");

        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.timeout_secs, 0);
        assert_eq!(config.user_agent.as_deref(), Some("wallet/1.0"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"max_redirects": 2}"#).unwrap();
        assert_eq!(config.max_redirects, 2);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_max_integer() {
        assert_eq!(MAX_INTEGER, i32::MAX as usize);
    }
}
