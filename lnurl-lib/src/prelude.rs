//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use lnurl_lib::prelude::*;
//! ```

// Core types
pub use crate::{LightningAddress, Lnurl};

// Error handling
pub use crate::errors::{LnurlError, LnurlErrorCode};
pub use crate::Result;

// Pay flow
pub use crate::client::LnurlClient;
pub use crate::config::ClientConfig;
pub use crate::pay::{InvoiceRequest, InvoiceResponse, PayResponse};

// Transport
pub use crate::transport::{HttpResponse, HttpTransport, RedirectingFetcher};

#[cfg(feature = "http-client")]
pub use crate::transport::ReqwestTransport;
