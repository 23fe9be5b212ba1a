//! Test fixtures.

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Pay endpoint used across the flow tests.
    pub const BOB_URL: &'static str = "https://service.example/lnurlp/bob";

    /// `BOB_URL` encoded as an LNURL.
    pub const BOB_TOKEN: &'static str =
        "LNURL1DP68GURN8GHJ7UM9WFMXJCM99EJHSCTDWPKX2TMVDE6HYMRS9A3X7CSQETN0P";

    /// Reference token from the LUD-01 document.
    pub const LUD01_TOKEN: &'static str = "LNURL1DP68GURN8GHJ7UM9WFMXJCM99E3K7MF0V9CXJ0M385EKVCENXC6R2C35XVUKXEFCV5MKVV34X5EKZD3EV56NYD3HXQURZEPEXEJXXEPNXSCRVWFNV9NXZCN9XQ6XYEFHVGCXXCMYXYMNSERXFQ5FNS";

    /// URL carried by `LUD01_TOKEN`.
    pub const LUD01_URL: &'static str =
        "https://service.com/api?q=3fc3645b439ce8e7f2553a69e5267081d96dcd340693afabe04be7b0ccd178df";

    /// A well-formed token whose payload is the text `not a url`.
    pub const NOT_A_URL_TOKEN: &'static str = "LNURL1DEHHGGRPYP6HYMQXWKAWX";

    /// Lightning address and the URL it resolves to.
    pub const ALICE_ADDRESS: &'static str = "alice@example.com";

    /// URL `ALICE_ADDRESS` resolves to.
    pub const ALICE_URL: &'static str = "https://example.com/.well-known/lnurlp/alice";

    /// `ALICE_URL` encoded as an LNURL.
    pub const ALICE_TOKEN: &'static str =
        "LNURL1DP68GURN8GHJ7ETCV9KHQMR99E3K7MF09EMK2MRV944KUMMHDCHKCMN4WFK8QTMPD35KXEG9SAEVQ";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{address, codec};

    #[test]
    fn test_fixtures_are_consistent() {
        assert_eq!(codec::encode(TestFixtures::BOB_URL).unwrap(), TestFixtures::BOB_TOKEN);
        assert_eq!(codec::decode_raw(TestFixtures::LUD01_TOKEN).unwrap(), TestFixtures::LUD01_URL);
        assert_eq!(codec::decode_raw(TestFixtures::NOT_A_URL_TOKEN).unwrap(), "not a url");
        assert_eq!(address::resolve(TestFixtures::ALICE_ADDRESS).unwrap(), TestFixtures::ALICE_URL);
        assert_eq!(codec::encode(TestFixtures::ALICE_URL).unwrap(), TestFixtures::ALICE_TOKEN);
    }
}
