//! Bech32 encoding and decoding of LNURL tokens.
//!
//! A token is the UTF-8 bytes of a URL regrouped into 5-bit symbols and
//! wrapped in a bech32 string with the `lnurl` human-readable part.
//! Encoding emits upper case; decoding accepts either case (but not a mix)
//! and an optional `lightning:` scheme prefix.
//!
//! ```
//! use lnurl_lib::codec;
//!
//! let token = codec::encode("https://service.example/lnurlp/bob")?;
//! assert!(token.starts_with("LNURL1"));
//! assert_eq!(codec::decode_raw(&token)?, "https://service.example/lnurlp/bob");
//! # Ok::<(), lnurl_lib::LnurlError>(())
//! ```

use bech32::{u5, Variant};

use crate::bits::convert_bits;
use crate::config::{HRP, LIGHTNING_PREFIX, MAX_INTEGER};
use crate::{Lnurl, LnurlError, Result};

/// Regroups the UTF-8 bytes of `url` into 5-bit symbols.
pub fn to_groups(url: &str) -> Result<Vec<u8>> {
    let groups = convert_bits(url.bytes(), 8, 5, true)?;
    Ok(groups.into_iter().map(|g| g as u8).collect())
}

/// Encodes `url` as an upper-case LNURL token.
pub fn encode(url: &str) -> Result<String> {
    let data = to_groups(url)?
        .into_iter()
        .map(u5::try_from_u8)
        .collect::<std::result::Result<Vec<u5>, _>>()?;
    let token = bech32::encode(HRP, data, Variant::Bech32)?;
    Ok(token.to_uppercase())
}

/// Removes a leading `lightning:` prefix, ignoring case.
pub fn strip_lightning_prefix(value: &str) -> &str {
    match value.get(..LIGHTNING_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(LIGHTNING_PREFIX) => {
            &value[LIGHTNING_PREFIX.len()..]
        }
        _ => value,
    }
}

/// Decodes a token into the URL string it carries.
pub fn decode_raw(token: &str) -> Result<String> {
    decode_raw_with_max_length(token, MAX_INTEGER)
}

/// Decodes a token, rejecting tokens longer than `max_length` characters.
///
/// The length is measured after the `lightning:` prefix is stripped.
pub fn decode_raw_with_max_length(token: &str, max_length: usize) -> Result<String> {
    let token = strip_lightning_prefix(token);
    if token.len() > max_length {
        return Err(LnurlError::TokenTooLong {
            length: token.len(),
            max_length,
        });
    }

    let (hrp, data, _variant) = bech32::decode(token)?;
    if hrp != HRP {
        #[cfg(feature = "tracing")]
        tracing::debug!(%hrp, "decoding bech32 token with foreign human-readable part");
    }

    let bytes = convert_bits(data.iter().map(|g| g.to_u8()), 5, 8, false)?;
    let bytes: Vec<u8> = bytes.into_iter().map(|b| b as u8).collect();
    String::from_utf8(bytes).map_err(|err| LnurlError::InvalidUtf8(err.to_string()))
}

/// Decodes a token into an [`Lnurl`].
pub fn decode(token: &str) -> Result<Lnurl> {
    decode_with_max_length(token, MAX_INTEGER)
}

/// Decodes a token into an [`Lnurl`], bounding the token length.
pub fn decode_with_max_length(token: &str, max_length: usize) -> Result<Lnurl> {
    Lnurl::new(&decode_raw_with_max_length(token, max_length)?)
}
