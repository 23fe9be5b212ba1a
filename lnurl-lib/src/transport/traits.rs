use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::Result;

/// A single HTTP response, before any redirect handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Value of the `Location` header, if present.
    pub location: Option<String>,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// A response with the given status and body and no `Location`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            body: body.into(),
        }
    }

    /// A `302 Found` pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: 302,
            location: Some(location.into()),
            body: String::new(),
        }
    }

    /// Whether the status is in the 3xx redirection class.
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Whether the status is in the 2xx success class.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait describing a plain HTTP GET that does not follow redirects.
///
/// Redirects are handled one level up by
/// [`RedirectingFetcher`](super::RedirectingFetcher), which needs to see
/// every 3xx response to enforce its budget.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one GET request to `url`.
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}
