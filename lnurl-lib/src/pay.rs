//! LNURL-pay response types and callback query handling.
//!
//! Both responses keep the fields this crate reads as typed options and carry
//! everything else in a flattened `extra` map, so unknown fields survive a
//! round trip through serde untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::{LnurlError, Result};

/// Metadata served by an LNURL-pay endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayResponse {
    /// URL to request invoices from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,

    /// Smallest payable amount in millisatoshis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sendable: Option<u64>,

    /// Largest payable amount in millisatoshis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sendable: Option<u64>,

    /// JSON-encoded metadata array, as served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// Request tag, `payRequest` for this flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Maximum comment length the service accepts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_allowed: Option<u32>,

    /// `ERROR` when the service refused the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable reason accompanying an error status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayResponse {
    /// The parsed callback URL.
    pub fn callback_url(&self) -> Result<Url> {
        let callback = self
            .callback
            .as_deref()
            .ok_or(LnurlError::MissingField("callback"))?;
        Url::parse(callback).map_err(|err| LnurlError::invalid_url(callback, err))
    }

    /// Whether the service answered with an error status.
    pub fn is_error(&self) -> bool {
        is_error_status(self.status.as_deref())
    }

    /// The error reason, if the service answered with an error status.
    pub fn error_reason(&self) -> Option<&str> {
        error_reason(self.status.as_deref(), self.reason.as_deref())
    }

    /// Whether `amount_msat` lies within the advertised sendable range.
    ///
    /// Missing bounds are treated as open. The invoice request does not
    /// enforce this; it is for callers that want to check before asking.
    pub fn accepts_amount(&self, amount_msat: u64) -> bool {
        self.min_sendable.map_or(true, |min| amount_msat >= min)
            && self.max_sendable.map_or(true, |max| amount_msat <= max)
    }
}

/// Invoice returned by a pay callback.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    /// BOLT11 payment request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<String>,

    /// Routing hints, passed through as served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Value>>,

    /// Action for the wallet to take after paying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_action: Option<Value>,

    /// `ERROR` when the service refused the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable reason accompanying an error status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InvoiceResponse {
    /// Whether the service answered with an error status.
    pub fn is_error(&self) -> bool {
        is_error_status(self.status.as_deref())
    }

    /// The error reason, if the service answered with an error status.
    pub fn error_reason(&self) -> Option<&str> {
        error_reason(self.status.as_deref(), self.reason.as_deref())
    }

    /// The BOLT11 payment request.
    ///
    /// When `pr` is absent, an error status from the service is reported as
    /// [`LnurlError::ServiceError`] and anything else as a missing field.
    pub fn payment_request(&self) -> Result<&str> {
        if let Some(pr) = self.pr.as_deref() {
            return Ok(pr);
        }
        match self.error_reason() {
            Some(reason) => Err(LnurlError::ServiceError {
                reason: reason.to_string(),
            }),
            None => Err(LnurlError::MissingField("pr")),
        }
    }
}

fn is_error_status(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.eq_ignore_ascii_case("ERROR"))
}

fn error_reason<'a>(status: Option<&str>, reason: Option<&'a str>) -> Option<&'a str> {
    if is_error_status(status) {
        Some(reason.unwrap_or("unspecified"))
    } else {
        None
    }
}

/// Parameters sent to a pay callback.
///
/// `amount` is always present; further parameters (`comment`, `nostr`, ...)
/// can be added and override anything of the same name already in the
/// callback URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceRequest {
    params: Vec<(String, String)>,
}

impl InvoiceRequest {
    /// Request an invoice for `amount_msat` millisatoshis.
    pub fn new(amount_msat: u64) -> Self {
        Self {
            params: vec![("amount".to_string(), amount_msat.to_string())],
        }
    }

    /// Add or replace a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.params, key.into(), value.into());
        self
    }

    /// Attach a payer comment.
    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        self.with_param("comment", comment)
    }

    /// The parameters in the order they will be applied.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Merge `overrides` into the query of `callback`.
///
/// The callback's own parameters keep their order (a repeated key keeps its
/// last value). Each override replaces a parameter of the same name in place
/// or is appended.
pub fn merge_callback_query(callback: &Url, overrides: &[(String, String)]) -> Url {
    let mut merged: Vec<(String, String)> = Vec::new();
    for (key, value) in callback.query_pairs() {
        upsert(&mut merged, key.into_owned(), value.into_owned());
    }
    for (key, value) in overrides {
        upsert(&mut merged, key.clone(), value.clone());
    }

    let mut url = callback.clone();
    url.query_pairs_mut().clear().extend_pairs(merged);
    url
}

fn upsert(params: &mut Vec<(String, String)>, key: String, value: String) {
    match params.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => params.push((key, value)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::errors::LnurlErrorCode;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_merge_keeps_callback_params() {
        let callback = Url::parse("https://pay.example/cb?foo=1").unwrap();
        let url = merge_callback_query(&callback, InvoiceRequest::new(1000).params());

        assert_eq!(url.query(), Some("foo=1&amount=1000"));
    }

    #[test]
    fn test_merge_caller_wins() {
        let callback = Url::parse("https://pay.example/cb?foo=1").unwrap();
        let request = InvoiceRequest::new(1000).with_param("foo", "2");
        let url = merge_callback_query(&callback, request.params());

        let query = query_map(&url);
        assert_eq!(query.len(), 2);
        assert_eq!(query["foo"], "2");
        assert_eq!(query["amount"], "1000");
    }

    #[test]
    fn test_merge_amount_overrides_callback_amount() {
        let callback = Url::parse("https://pay.example/cb?amount=1&k1=abc").unwrap();
        let url = merge_callback_query(&callback, InvoiceRequest::new(5000).params());

        assert_eq!(url.query(), Some("amount=5000&k1=abc"));
    }

    #[test]
    fn test_merge_without_existing_query() {
        let callback = Url::parse("https://service.example/cb").unwrap();
        let url = merge_callback_query(&callback, InvoiceRequest::new(5000).params());

        assert_eq!(url.as_str(), "https://service.example/cb?amount=5000");
    }

    #[test]
    fn test_merge_encodes_values() {
        let callback = Url::parse("https://pay.example/cb").unwrap();
        let request = InvoiceRequest::new(1).with_comment("thanks & bye");
        let url = merge_callback_query(&callback, request.params());

        assert_eq!(url.query(), Some("amount=1&comment=thanks+%26+bye"));
        assert_eq!(query_map(&url)["comment"], "thanks & bye");
    }

    #[test]
    fn test_merge_repeated_callback_key_keeps_last() {
        let callback = Url::parse("https://pay.example/cb?a=1&a=2").unwrap();
        let url = merge_callback_query(&callback, &[]);

        assert_eq!(url.query(), Some("a=2"));
    }

    #[test]
    fn test_pay_response_fields_and_extra() {
        let response: PayResponse = serde_json::from_value(serde_json::json!({
            "callback": "https://service.example/cb",
            "minSendable": 1000,
            "maxSendable": 100000,
            "tag": "payRequest",
            "commentAllowed": 32,
            "allowsNostr": true
        }))
        .unwrap();

        assert_eq!(response.min_sendable, Some(1000));
        assert_eq!(response.max_sendable, Some(100_000));
        assert_eq!(response.comment_allowed, Some(32));
        assert_eq!(response.extra["allowsNostr"], Value::Bool(true));
        assert_eq!(
            response.callback_url().unwrap().as_str(),
            "https://service.example/cb"
        );

        let back = serde_json::to_value(&response).unwrap();
        assert_eq!(back["allowsNostr"], Value::Bool(true));
        assert_eq!(back["minSendable"], 1000);
    }

    #[test]
    fn test_accepts_amount() {
        let response = PayResponse {
            min_sendable: Some(1000),
            max_sendable: Some(100_000),
            ..Default::default()
        };
        assert!(response.accepts_amount(1000));
        assert!(response.accepts_amount(100_000));
        assert!(!response.accepts_amount(999));
        assert!(!response.accepts_amount(100_001));
        assert!(PayResponse::default().accepts_amount(1));
    }

    #[test]
    fn test_missing_callback() {
        let err = PayResponse::default().callback_url().unwrap_err();
        assert_eq!(err.code(), LnurlErrorCode::MissingField);
    }

    #[test]
    fn test_error_response() {
        let response: PayResponse =
            serde_json::from_str(r#"{"status":"ERROR","reason":"unknown user"}"#).unwrap();
        assert!(response.is_error());
        assert_eq!(response.error_reason(), Some("unknown user"));
    }

    #[test]
    fn test_invoice_payment_request() {
        let invoice: InvoiceResponse =
            serde_json::from_str(r#"{"pr":"lnbc50n1p","routes":[]}"#).unwrap();
        assert_eq!(invoice.payment_request().unwrap(), "lnbc50n1p");

        let refused: InvoiceResponse =
            serde_json::from_str(r#"{"status":"ERROR","reason":"amount too low"}"#).unwrap();
        let err = refused.payment_request().unwrap_err();
        assert_eq!(err.code(), LnurlErrorCode::ServiceError);
        assert!(err.to_string().contains("amount too low"));

        let err = InvoiceResponse::default().payment_request().unwrap_err();
        assert!(matches!(err, LnurlError::MissingField("pr")));
    }
}
