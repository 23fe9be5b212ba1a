//! The LNURL-pay flow.
//!
//! [`LnurlClient`] drives the exchange a decoded LNURL starts: fetch the pay
//! metadata, then ask the callback for an invoice for a chosen amount.
//!
//! ```rust,ignore
//! use lnurl_lib::{ClientConfig, Lnurl, LnurlClient};
//!
//! let client = LnurlClient::new(ClientConfig::default())?;
//! let lnurl = Lnurl::decode("LNURL1DP68GURN8GHJ7...")?;
//!
//! let metadata = client.metadata(&lnurl).await?;
//! println!("min {:?} max {:?}", metadata.min_sendable, metadata.max_sendable);
//!
//! let bolt11 = client.payment_request(&lnurl, 5_000).await?;
//! ```

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::pay::{merge_callback_query, InvoiceRequest, InvoiceResponse, PayResponse};
use crate::transport::{HttpTransport, RedirectingFetcher};
use crate::{Lnurl, Result};

#[cfg(feature = "http-client")]
use crate::transport::ReqwestTransport;

/// Client for the LNURL-pay flow.
///
/// Every request goes through a [`RedirectingFetcher`], so redirects are
/// followed up to the configured budget. Response statuses are not checked:
/// an error page that is not the expected JSON surfaces as a
/// serialization error.
#[derive(Clone, Debug)]
pub struct LnurlClient<T> {
    fetcher: RedirectingFetcher<T>,
}

#[cfg(feature = "http-client")]
impl LnurlClient<ReqwestTransport> {
    /// Create a client backed by reqwest.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(transport, &config))
    }
}

impl<T: HttpTransport> LnurlClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            fetcher: RedirectingFetcher::with_max_redirects(transport, config.max_redirects),
        }
    }

    /// Get the redirecting fetcher.
    pub fn fetcher(&self) -> &RedirectingFetcher<T> {
        &self.fetcher
    }

    /// GET `url` and parse the body as JSON.
    pub async fn fetch_json<D: DeserializeOwned>(&self, url: &Url) -> Result<D> {
        let body = self.fetcher.fetch(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The pay metadata behind `lnurl`.
    ///
    /// Fetched on first use and cached on the `Lnurl`; a failed fetch is not
    /// cached, so the next call tries again.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lnurl), fields(url = %lnurl.uri())))]
    pub async fn metadata<'a>(&self, lnurl: &'a Lnurl) -> Result<&'a PayResponse> {
        let cell = lnurl.response_cell();
        if let Some(response) = cell.get() {
            #[cfg(feature = "tracing")]
            tracing::debug!("using cached pay metadata");
            return Ok(response);
        }
        cell.get_or_try_init(|| self.fetch_json(lnurl.url())).await
    }

    /// Request an invoice for `amount_msat` millisatoshis.
    pub async fn request_invoice(&self, lnurl: &Lnurl, amount_msat: u64) -> Result<InvoiceResponse> {
        self.request_invoice_with(lnurl, &InvoiceRequest::new(amount_msat))
            .await
    }

    /// Request an invoice with additional callback parameters.
    pub async fn request_invoice_with(
        &self,
        lnurl: &Lnurl,
        request: &InvoiceRequest,
    ) -> Result<InvoiceResponse> {
        let metadata = self.metadata(lnurl).await?;
        self.invoice_from(metadata, request).await
    }

    /// Request an invoice from already fetched metadata.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, metadata), fields(callback = ?metadata.callback)))]
    pub async fn invoice_from(
        &self,
        metadata: &PayResponse,
        request: &InvoiceRequest,
    ) -> Result<InvoiceResponse> {
        let callback = metadata.callback_url()?;
        let url = merge_callback_query(&callback, request.params());
        self.fetch_json(&url).await
    }

    /// Request an invoice and return its BOLT11 payment request.
    pub async fn payment_request(&self, lnurl: &Lnurl, amount_msat: u64) -> Result<String> {
        let invoice = self.request_invoice(lnurl, amount_msat).await?;
        invoice.payment_request().map(str::to_string)
    }
}
