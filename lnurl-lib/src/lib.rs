//! LNURL library.
//!
//! Encodes URLs as `lnurl1...` bech32 tokens, decodes them back, and drives
//! the LNURL-pay exchange a decoded URL starts: fetch the pay metadata, then
//! request a Lightning invoice for a chosen amount from its callback.
//!
//! The codec, validator and lightning-address resolver are pure functions.
//! Network access goes through the [`HttpTransport`] trait, so callers can
//! bring their own HTTP stack; a reqwest-backed transport ships behind the
//! default `http-client` feature.
//!
//! # Features
//!
//! - **Codec**: bit-exact `8 <-> 5` regrouping and bech32 wrapping
//! - **Validation**: a cheap yes/no check, or the reason a token is unusable
//! - **Pay flow**: metadata caching, redirect budget, callback query merging
//!
//! # Example
//!
//! ```
//! use lnurl_lib::Lnurl;
//!
//! let lnurl = Lnurl::from_lightning_address("alice@example.com")?;
//! assert_eq!(lnurl.uri(), "https://example.com/.well-known/lnurlp/alice");
//!
//! let token = lnurl.encode()?;
//! assert!(Lnurl::is_valid(&token));
//! assert_eq!(Lnurl::decode(&token.to_lowercase())?, lnurl);
//! # Ok::<(), lnurl_lib::LnurlError>(())
//! ```

pub mod address;
pub mod bits;
pub mod client;
pub mod codec;
pub mod config;
pub mod errors;
mod lnurl;
pub mod pay;
pub mod prelude;
pub mod transport;
pub mod validate;

/// Test utilities for LNURL testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use address::LightningAddress;
pub use client::LnurlClient;
pub use config::{ClientConfig, HRP, MAX_INTEGER, VERSION};
pub use errors::{LnurlError, LnurlErrorCode};
pub use lnurl::Lnurl;
pub use pay::{InvoiceRequest, InvoiceResponse, PayResponse};
pub use transport::{HttpResponse, HttpTransport, RedirectingFetcher};
pub use validate::{is_valid, validate};

#[cfg(feature = "http-client")]
pub use transport::ReqwestTransport;

/// Common result alias for LNURL operations.
pub type Result<T> = std::result::Result<T, LnurlError>;

/// Encodes `url` as an upper-case LNURL token.
pub fn encode(url: &str) -> Result<String> {
    codec::encode(url)
}

/// Decodes an LNURL token, optionally prefixed with `lightning:`.
pub fn decode(token: &str) -> Result<Lnurl> {
    codec::decode(token)
}

/// Resolves a `user@domain` lightning address to its metadata URL.
pub fn resolve_lightning_address(address: &str) -> Result<String> {
    address::resolve(address)
}
