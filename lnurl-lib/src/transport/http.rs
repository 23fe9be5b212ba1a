//! reqwest-backed [`HttpTransport`].
//!
//! Requires the `http-client` feature (enabled by default).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use url::Url;

use super::traits::{HttpResponse, HttpTransport};
use crate::config::ClientConfig;
use crate::{LnurlError, Result};

/// [`HttpTransport`] over a shared `reqwest::Client`.
///
/// The client never follows redirects itself; the
/// [`RedirectingFetcher`](super::RedirectingFetcher) wrapped around it does.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Build a transport from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().redirect(Policy::none());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder
            .build()
            .map_err(|e| LnurlError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Map reqwest errors to LnurlError.
    fn map_reqwest_error(&self, url: &Url, e: reqwest::Error) -> LnurlError {
        if e.is_timeout() {
            LnurlError::ConnectionTimeout {
                operation: format!("GET {}", url),
                timeout_ms: self.timeout_secs * 1000,
            }
        } else if e.is_connect() {
            LnurlError::ConnectionFailed {
                target: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            LnurlError::Transport(format!("GET {} failed: {}", url, e))
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(url, e))?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(url, e))?;

        Ok(HttpResponse {
            status,
            location,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let config = ClientConfig::default().with_user_agent("lnurl-test");
        let transport = ReqwestTransport::new(&config).unwrap();
        assert_eq!(transport.timeout_secs, 30);
    }

    #[test]
    fn test_transport_without_timeout() {
        let transport = ReqwestTransport::new(&ClientConfig::default().with_timeout(0));
        assert!(transport.is_ok());
    }
}
