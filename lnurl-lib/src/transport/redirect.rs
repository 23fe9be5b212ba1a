//! GET with bounded redirect following.

use url::Url;

use super::traits::{HttpResponse, HttpTransport};
use crate::config::DEFAULT_MAX_REDIRECTS;
use crate::{LnurlError, Result};

/// Issues GET requests through an [`HttpTransport`] and follows redirects.
///
/// Each request may follow at most `max_redirects` redirect responses;
/// running out fails with [`LnurlError::TooManyRedirects`]. Responses that
/// are not redirects are returned as they are, whatever their status.
#[derive(Clone, Debug)]
pub struct RedirectingFetcher<T> {
    transport: T,
    max_redirects: u32,
}

impl<T: HttpTransport> RedirectingFetcher<T> {
    /// Create a fetcher with the default budget of ten redirects.
    pub fn new(transport: T) -> Self {
        Self::with_max_redirects(transport, DEFAULT_MAX_REDIRECTS)
    }

    /// Create a fetcher with a custom redirect budget.
    pub fn with_max_redirects(transport: T, max_redirects: u32) -> Self {
        Self {
            transport,
            max_redirects,
        }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the redirect budget.
    pub fn max_redirects(&self) -> u32 {
        self.max_redirects
    }

    /// GET `url` and return the final response body.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        self.fetch_with_limit(url, self.max_redirects).await
    }

    /// GET `url` with an explicit redirect budget.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, url), fields(url = %url)))]
    pub async fn fetch_with_limit(&self, url: &Url, limit: u32) -> Result<String> {
        Ok(self.fetch_response(url, limit).await?.body)
    }

    /// GET `url` with an explicit redirect budget, keeping the final status.
    pub async fn fetch_response(&self, url: &Url, limit: u32) -> Result<HttpResponse> {
        let mut current = url.clone();
        let mut remaining = limit;

        loop {
            if remaining == 0 {
                return Err(LnurlError::TooManyRedirects { limit });
            }

            let response = self.transport.get(&current).await?;
            if !response.is_redirect() {
                #[cfg(feature = "tracing")]
                if !response.is_success() {
                    tracing::warn!(status = response.status, url = %current, "passing through non-success response");
                }
                return Ok(response);
            }

            let location = response
                .location
                .as_deref()
                .ok_or(LnurlError::MissingLocation {
                    status: response.status,
                })?;
            // Absolute locations replace the URL outright; relative ones resolve against it.
            let next = current
                .join(location)
                .map_err(|err| LnurlError::invalid_url(location, err))?;

            #[cfg(feature = "tracing")]
            tracing::debug!(status = response.status, from = %current, to = %next, remaining, "following redirect");

            current = next;
            remaining -= 1;
        }
    }
}
