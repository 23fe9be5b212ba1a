//! Codec and validator vectors through the public API.

use lnurl_lib::{codec, is_valid, validate, Lnurl, LnurlErrorCode};

const LUD01_TOKEN: &str = "LNURL1DP68GURN8GHJ7UM9WFMXJCM99E3K7MF0V9CXJ0M385EKVCENXC6R2C35XVUKXEFCV5MKVV34X5EKZD3EV56NYD3HXQURZEPEXEJXXEPNXSCRVWFNV9NXZCN9XQ6XYEFHVGCXXCMYXYMNSERXFQ5FNS";
const LUD01_URL: &str =
    "https://service.com/api?q=3fc3645b439ce8e7f2553a69e5267081d96dcd340693afabe04be7b0ccd178df";

#[test]
fn test_lud01_reference_vector() {
    assert_eq!(codec::decode_raw(LUD01_TOKEN).unwrap(), LUD01_URL);
    assert_eq!(lnurl_lib::encode(LUD01_URL).unwrap(), LUD01_TOKEN);
}

#[test]
fn test_round_trip_urls() {
    let urls = [
        "https://service.example/lnurlp/bob",
        "http://localhost:8080/pay?user=1&x=y",
        "https://example.com",
        "https://xn--e1afmkfd.xn--p1ai/.well-known/lnurlp/%D0%B8",
        "https://example.com/a/very/long/path/that/pushes/the/token/well/past/the/ninety/character/limit/of/segwit",
    ];
    for url in urls {
        let token = lnurl_lib::encode(url).unwrap();
        let lnurl = lnurl_lib::decode(&token).unwrap();
        assert_eq!(lnurl.uri(), url);
        assert!(is_valid(&token), "{token}");
    }
}

#[test]
fn test_decode_lightning_uri() {
    let lnurl = lnurl_lib::decode(&format!("lightning:{}", LUD01_TOKEN.to_lowercase())).unwrap();
    assert_eq!(lnurl.uri(), LUD01_URL);
}

#[test]
fn test_validator_rejections() {
    assert!(!is_valid("foobar1xyz"));

    let mut corrupted = LUD01_TOKEN.to_string();
    corrupted.replace_range(10..11, "Q");
    assert!(!is_valid(&corrupted));

    let not_a_url = lnurl_lib::encode("not a url").unwrap();
    assert_eq!(
        validate(&not_a_url).unwrap_err().code(),
        LnurlErrorCode::InvalidUrl
    );
}

#[test]
fn test_max_length_bound() {
    let err = Lnurl::decode_with_max_length(LUD01_TOKEN, 90).unwrap_err();
    assert_eq!(err.code(), LnurlErrorCode::TokenTooLong);
    assert!(Lnurl::decode_with_max_length(LUD01_TOKEN, LUD01_TOKEN.len()).is_ok());
}

#[test]
fn test_lightning_address() {
    assert_eq!(
        lnurl_lib::resolve_lightning_address("alice@example.com").unwrap(),
        "https://example.com/.well-known/lnurlp/alice"
    );
    assert_eq!(
        lnurl_lib::resolve_lightning_address("a@b@c").unwrap_err().code(),
        LnurlErrorCode::InvalidLightningAddress
    );
}
