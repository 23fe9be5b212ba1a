//! LNURL validation.
//!
//! [`validate`] reports why a value is unusable; [`is_valid`] collapses the
//! answer to a boolean for callers that only need a yes or no.

use url::Url;

use crate::config::HRP;
use crate::{codec, LnurlError, Result};

/// Check that `value` is an LNURL whose payload is an absolute URL.
///
/// The prefix check runs first so obviously foreign strings are rejected
/// without a bech32 decode. A `lightning:` scheme is not accepted here.
pub fn validate(value: &str) -> Result<Url> {
    if !value.to_lowercase().starts_with(HRP) {
        return Err(LnurlError::InvalidPrefix(value.to_string()));
    }
    let decoded = codec::decode_raw(value)?;
    Url::parse(&decoded).map_err(|err| LnurlError::invalid_url(decoded, err))
}

/// Whether `value` is a valid LNURL. Never fails.
pub fn is_valid(value: &str) -> bool {
    validate(value).is_ok()
}
