//! HTTP transport and redirect handling.
//!
//! The pay flow reaches the network only through [`HttpTransport`], a single
//! non-redirecting GET. [`RedirectingFetcher`] layers the bounded redirect
//! loop on top, and `ReqwestTransport` is the default implementation.
//!
//! ## Feature Flags
//!
//! `ReqwestTransport` is available with the `http-client` feature:
//!
//! ```toml
//! [dependencies]
//! lnurl-lib = { version = "1.1", features = ["http-client"] }
//! ```
//!
//! Without it, supply your own [`HttpTransport`] implementation.

#[cfg(feature = "http-client")]
mod http;
mod redirect;
mod traits;

#[cfg(feature = "http-client")]
pub use http::ReqwestTransport;
pub use redirect::RedirectingFetcher;
pub use traits::{HttpResponse, HttpTransport};
