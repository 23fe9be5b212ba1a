//! Test utilities for LNURL.
//!
//! This module provides:
//! - A scripted in-memory [`HttpTransport`](crate::HttpTransport)
//! - Fixed tokens and URLs for common scenarios
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lnurl_lib::test_utils::{MockTransport, TestFixtures};
//! use lnurl_lib::{ClientConfig, Lnurl, LnurlClient};
//!
//! let mock = Arc::new(MockTransport::new());
//! mock.add_json(TestFixtures::BOB_URL, serde_json::json!({"callback": "https://service.example/cb"}));
//!
//! let client = LnurlClient::with_transport(mock.clone(), &ClientConfig::default());
//! let metadata = client.metadata(&Lnurl::decode(TestFixtures::BOB_TOKEN)?).await?;
//! assert_eq!(mock.request_count(), 1);
//! ```

mod fixtures;
mod mock_transport;

pub use fixtures::TestFixtures;
pub use mock_transport::MockTransport;
