//! The [`Lnurl`] value type.

use std::fmt;
use std::str::FromStr;

use tokio::sync::OnceCell;
use url::Url;

use crate::address::LightningAddress;
use crate::config::MAX_INTEGER;
use crate::pay::PayResponse;
use crate::{codec, validate, LnurlError, Result};

/// A URL reachable through an LNURL token.
///
/// The URL is fixed at construction. The only other state is the pay
/// metadata fetched through [`LnurlClient::metadata`](crate::LnurlClient::metadata),
/// which is stored in a set-once cell: the first successful fetch wins and
/// later calls read it back without touching the network.
///
/// ```
/// use lnurl_lib::Lnurl;
///
/// let lnurl = Lnurl::new("https://service.example/lnurlp/bob")?;
/// let token = lnurl.encode()?;
/// assert_eq!(Lnurl::decode(&token)?, lnurl);
/// # Ok::<(), lnurl_lib::LnurlError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Lnurl {
    raw: String,
    url: Url,
    response: OnceCell<PayResponse>,
}

impl Lnurl {
    /// Parse `uri` as an absolute URL.
    pub fn new(uri: &str) -> Result<Self> {
        let url = Url::parse(uri).map_err(|err| LnurlError::invalid_url(uri, err))?;
        Ok(Self {
            raw: uri.to_string(),
            url,
            response: OnceCell::new(),
        })
    }

    /// Decode an LNURL token.
    pub fn decode(token: &str) -> Result<Self> {
        codec::decode_with_max_length(token, MAX_INTEGER)
    }

    /// Decode an LNURL token no longer than `max_length` characters.
    pub fn decode_with_max_length(token: &str, max_length: usize) -> Result<Self> {
        codec::decode_with_max_length(token, max_length)
    }

    /// Build the LNURL a lightning address (`user@domain`) resolves to.
    pub fn from_lightning_address(address: &str) -> Result<Self> {
        let address: LightningAddress = address.parse()?;
        Self::new(&address.to_url_string())
    }

    /// Whether `value` is a decodable LNURL carrying an absolute URL.
    pub fn is_valid(value: &str) -> bool {
        validate::is_valid(value)
    }

    /// The URL exactly as it was given or decoded.
    pub fn uri(&self) -> &str {
        &self.raw
    }

    /// The parsed URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL as 5-bit bech32 symbols.
    pub fn data(&self) -> Result<Vec<u8>> {
        codec::to_groups(&self.raw)
    }

    /// Encode as an upper-case bech32 token.
    pub fn encode(&self) -> Result<String> {
        codec::encode(&self.raw)
    }

    /// Alias of [`Lnurl::encode`].
    pub fn to_bech32(&self) -> Result<String> {
        self.encode()
    }

    /// Pay metadata, if it has already been fetched.
    pub fn cached_response(&self) -> Option<&PayResponse> {
        self.response.get()
    }

    pub(crate) fn response_cell(&self) -> &OnceCell<PayResponse> {
        &self.response
    }
}

impl From<Url> for Lnurl {
    fn from(url: Url) -> Self {
        Self {
            raw: url.to_string(),
            url,
            response: OnceCell::new(),
        }
    }
}

impl PartialEq for Lnurl {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Lnurl {}

impl FromStr for Lnurl {
    type Err = LnurlError;

    fn from_str(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl fmt::Display for Lnurl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.encode().map_err(|_| fmt::Error)?;
        f.write_str(&token)
    }
}
