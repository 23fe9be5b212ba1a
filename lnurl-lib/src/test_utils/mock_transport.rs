//! Scripted in-memory transport.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use url::Url;

use crate::transport::{HttpResponse, HttpTransport};
use crate::Result;

/// An [`HttpTransport`] that answers from a fixed table and records requests.
///
/// Responses are keyed by the full URL text, query included. Unknown URLs
/// get a `404` with body `not found`.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: RwLock<HashMap<String, HttpResponse>>,
    requests: RwLock<Vec<Url>>,
}

impl MockTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `response`, replacing any earlier entry.
    pub fn add_response(&self, url: &str, response: HttpResponse) {
        self.routes
            .write()
            .unwrap()
            .insert(normalize(url), response);
    }

    /// Answer `url` with a JSON body and status 200.
    pub fn add_json(&self, url: &str, body: serde_json::Value) {
        self.add_response(url, HttpResponse::new(200, body.to_string()));
    }

    /// Answer `url` with a text body and the given status.
    pub fn add_text(&self, url: &str, status: u16, body: &str) {
        self.add_response(url, HttpResponse::new(status, body));
    }

    /// Answer `url` with a 302 to `location`.
    pub fn add_redirect(&self, url: &str, location: &str) {
        self.add_response(url, HttpResponse::redirect(location));
    }

    /// All requests so far, in order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests.read().unwrap().clone()
    }

    /// Number of requests so far.
    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    /// Number of requests to `url` so far.
    pub fn request_count_for(&self, url: &str) -> usize {
        let url = normalize(url);
        self.requests
            .read()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }
}

/// Keys are compared in the form `Url` serializes to.
fn normalize(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| url.to_string())
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        self.requests.write().unwrap().push(url.clone());
        let response = self
            .routes
            .read()
            .unwrap()
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "not found"));
        Ok(response)
    }
}
