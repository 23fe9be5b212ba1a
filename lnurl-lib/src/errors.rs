//! Error types for LNURL operations.
//!
//! Decoding, validation and the pay flow all report failures through
//! [`LnurlError`]. Each variant maps onto a stable [`LnurlErrorCode`] so
//! callers across an FFI boundary can branch without string matching.

use std::fmt;

use crate::bits::ConvertBitsError;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LnurlErrorCode {
    /// Bech32 checksum, charset or structure violation
    MalformedToken = 1000,
    /// Token longer than the allowed maximum
    TokenTooLong = 1001,
    /// Bit regrouping rejected the payload
    InvalidPadding = 1002,
    /// Decoded payload is not UTF-8
    InvalidUtf8 = 2000,
    /// Value is not a valid absolute URL
    InvalidUrl = 2001,
    /// Value does not carry the `lnurl` prefix
    InvalidPrefix = 2002,
    /// Lightning address is not `user@domain`
    InvalidLightningAddress = 2003,
    /// Redirect budget exhausted
    TooManyRedirects = 3000,
    /// Redirect response without a `Location` header
    MissingLocation = 3001,
    /// Transport/network layer error
    Transport = 4000,
    /// Connection failed
    ConnectionFailed = 4001,
    /// Connection timeout
    ConnectionTimeout = 4002,
    /// Malformed JSON body
    Serialization = 5000,
    /// Expected response field absent
    MissingField = 5001,
    /// Service answered with `{"status":"ERROR"}`
    ServiceError = 5002,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Comprehensive error type for LNURL operations.
#[derive(Debug)]
pub enum LnurlError {
    /// The bech32 layer rejected the token.
    MalformedToken(String),

    /// Token exceeds the caller-supplied maximum length.
    TokenTooLong {
        /// Length of the token after prefix stripping
        length: usize,
        /// Maximum accepted length
        max_length: usize,
    },

    /// Regrouping 5-bit symbols back to bytes lost information.
    InvalidPadding(ConvertBitsError),

    /// Decoded bytes are not valid UTF-8.
    InvalidUtf8(String),

    /// A string could not be parsed as an absolute URL.
    InvalidUrl {
        /// The offending value
        value: String,
        /// Parser message
        reason: String,
    },

    /// The value does not start with the `lnurl` human-readable part.
    InvalidPrefix(String),

    /// The lightning address is not of the form `user@domain`.
    InvalidLightningAddress(String),

    /// The redirect budget ran out before a final response arrived.
    TooManyRedirects {
        /// Budget the fetch started with
        limit: u32,
    },

    /// A redirect response carried no usable `Location` header.
    MissingLocation {
        /// Status code of the redirect response
        status: u16,
    },

    /// Transport/network layer error.
    Transport(String),

    /// Connection failed.
    ConnectionFailed {
        /// Target URL
        target: String,
        /// Underlying error message
        reason: String,
    },

    /// Connection timeout.
    ConnectionTimeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Response body is not the expected JSON.
    Serialization(String),

    /// A response lacks a field the operation needs.
    MissingField(&'static str),

    /// The service reported an error instead of the requested data.
    ServiceError {
        /// Reason given by the service, if any
        reason: String,
    },

    /// Internal/unexpected error.
    Internal(String),
}

impl LnurlError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> LnurlErrorCode {
        match self {
            Self::MalformedToken(_) => LnurlErrorCode::MalformedToken,
            Self::TokenTooLong { .. } => LnurlErrorCode::TokenTooLong,
            Self::InvalidPadding(_) => LnurlErrorCode::InvalidPadding,
            Self::InvalidUtf8(_) => LnurlErrorCode::InvalidUtf8,
            Self::InvalidUrl { .. } => LnurlErrorCode::InvalidUrl,
            Self::InvalidPrefix(_) => LnurlErrorCode::InvalidPrefix,
            Self::InvalidLightningAddress(_) => LnurlErrorCode::InvalidLightningAddress,
            Self::TooManyRedirects { .. } => LnurlErrorCode::TooManyRedirects,
            Self::MissingLocation { .. } => LnurlErrorCode::MissingLocation,
            Self::Transport(_) => LnurlErrorCode::Transport,
            Self::ConnectionFailed { .. } => LnurlErrorCode::ConnectionFailed,
            Self::ConnectionTimeout { .. } => LnurlErrorCode::ConnectionTimeout,
            Self::Serialization(_) => LnurlErrorCode::Serialization,
            Self::MissingField(_) => LnurlErrorCode::MissingField,
            Self::ServiceError { .. } => LnurlErrorCode::ServiceError,
            Self::Internal(_) => LnurlErrorCode::Internal,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if this error is potentially recoverable by retrying.
    ///
    /// Redirect exhaustion is never retryable: the server is looping.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ConnectionFailed { .. } | Self::ConnectionTimeout { .. }
        )
    }

    /// Returns true for errors that mean the input token itself is unusable.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken(_)
                | Self::TokenTooLong { .. }
                | Self::InvalidPadding(_)
                | Self::InvalidUtf8(_)
                | Self::InvalidUrl { .. }
                | Self::InvalidPrefix(_)
        )
    }

    /// Create an invalid URL error.
    pub fn invalid_url(value: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::InvalidUrl {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for LnurlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken(msg) => write!(f, "malformed lnurl: {}", msg),
            Self::TokenTooLong { length, max_length } => {
                write!(
                    f,
                    "lnurl is {} characters long, maximum is {}",
                    length, max_length
                )
            }
            Self::InvalidPadding(err) => write!(f, "invalid lnurl payload: {}", err),
            Self::InvalidUtf8(msg) => write!(f, "lnurl payload is not utf-8: {}", msg),
            Self::InvalidUrl { value, reason } => write!(f, "invalid url '{}': {}", value, reason),
            Self::InvalidPrefix(value) => write!(f, "not an lnurl: {}", value),
            Self::InvalidLightningAddress(value) => {
                write!(f, "invalid lightning address: {}", value)
            }
            Self::TooManyRedirects { limit } => {
                write!(f, "too many HTTP redirects (limit {})", limit)
            }
            Self::MissingLocation { status } => {
                write!(f, "redirect response {} has no Location header", status)
            }
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::ConnectionFailed { target, reason } => {
                write!(f, "connection to {} failed: {}", target, reason)
            }
            Self::ConnectionTimeout {
                operation,
                timeout_ms,
            } => {
                write!(f, "{} timed out after {}ms", operation, timeout_ms)
            }
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
            Self::MissingField(field) => write!(f, "response has no '{}' field", field),
            Self::ServiceError { reason } => write!(f, "service returned an error: {}", reason),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for LnurlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPadding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LnurlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<ConvertBitsError> for LnurlError {
    fn from(err: ConvertBitsError) -> Self {
        Self::InvalidPadding(err)
    }
}

impl From<bech32::Error> for LnurlError {
    fn from(err: bech32::Error) -> Self {
        Self::MalformedToken(err.to_string())
    }
}
