//! End-to-end tests for the token and pair registry.

use proptest::prelude::*;
use proptest::sample::select;
use tokens::pair::{BTC_ETH, DAI_BTC, DAI_TUSD};
use tokens::token::{BTC, DAI, DGX, ETH, TUSD, WBTC};
use tokens::{
    parse_pair, parse_token, parse_token_code, BlockchainName, FeeConfig, Pair, RegistryError,
    Token, TokenCode, SUPPORTED_PAIRS, SUPPORTED_TOKENS, U256,
};

/// Canonical pair strings as an external caller would persist them.
const CANONICAL: [&str; 7] = [
    "DAI-BTC", "DAI-ETH", "DAI-REN", "DAI-TUSD", "BTC-ETH", "BTC-REN", "BTC-TUSD",
];

fn token() -> impl Strategy<Value = Token> {
    select(SUPPORTED_TOKENS.to_vec())
}

fn pair() -> impl Strategy<Value = Pair> {
    select(SUPPORTED_PAIRS.to_vec())
}

#[test]
fn test_resolve_order_from_external_strings() {
    // A caller receives a pair and two token names from a network message
    let pair = parse_pair(" dai-btc ").unwrap();
    let send = parse_token("Bitcoin").unwrap();
    let receive = parse_token("makerdai").unwrap();

    assert_eq!(Pair::new(send, receive), pair);
    assert_eq!(pair.base_token().unwrap(), DAI);
    assert_eq!(pair.quote_token().unwrap(), BTC);
    assert_eq!(pair.format().unwrap(), "DAI-BTC");
}

#[test]
fn test_btc_dai_round_trip() {
    let pair = Pair::new(BTC, DAI);
    let (base, quote) = pair.tokens().unwrap();
    assert_eq!(Pair::new(base, quote).as_u64(), pair.as_u64());
    assert_eq!(u64::from(pair), DAI_BTC.as_u64());
}

#[test]
fn test_canonical_strings_round_trip() {
    assert_eq!(CANONICAL.len(), SUPPORTED_PAIRS.len());
    for name in CANONICAL {
        let pair = parse_pair(name).unwrap();
        assert!(pair.is_supported());
        assert_eq!(pair.format().unwrap(), name);
    }
}

#[test]
fn test_malformed_pair_strings() {
    for input in ["", " ", "btc-dai", " BTC - DAI ", "xyz-abc", "-", "DAI-", "\u{0}"] {
        match parse_pair(input) {
            Err(RegistryError::InvalidPair(raw)) => assert_eq!(raw, input),
            other => panic!("{:?} parsed to {:?}", input, other),
        }
    }
}

#[test]
fn test_unsupported_combination_has_no_string() {
    let pair = Pair::new(WBTC, ETH);
    assert!(matches!(pair.format(), Err(RegistryError::InvalidPair(_))));
    assert_eq!(pair.tokens().unwrap(), (ETH, WBTC));
    assert!(matches!(
        Pair::supported(WBTC, ETH),
        Err(RegistryError::UnsupportedTokenPair { .. })
    ));
}

#[test]
fn test_token_metadata() {
    assert_eq!(BTC.blockchain, BlockchainName::Bitcoin);
    assert_eq!(ETH.blockchain, BlockchainName::Ethereum);
    assert_eq!(DGX.decimals, 9);
    assert_eq!(TUSD.code, TokenCode::TUSD);
    assert_eq!(parse_token_code(TokenCode(1026)).unwrap(), DGX);
    assert!(DAI_TUSD.contains(&TUSD));
    assert_eq!(BTC_ETH.other_code(&ETH), Some(TokenCode::BTC));
}

#[test]
fn test_dgx_is_the_only_fee_bearing_token() {
    let fee_bearing: Vec<_> = SUPPORTED_TOKENS
        .iter()
        .filter(|t| t.additional_transaction_fee(U256::from(10_000)).is_some())
        .collect();
    assert_eq!(fee_bearing, vec![&DGX]);

    // Sending 1 DGX plus the fee delivers at least 1 DGX after the 13 bps cut
    let amount = DGX.one();
    let fee = DGX.additional_transaction_fee(amount).unwrap();
    let gross = amount + fee;
    let delivered = gross - gross * U256::from(13) / U256::from(10_000);
    assert!(delivered >= amount - U256::from(1));
}

#[test]
fn test_fee_config_rejects_out_of_range_fee() {
    let config = FeeConfig::default();
    assert_eq!(
        config.with_fee_bps(10_000),
        Err(RegistryError::InvalidFee(10_000))
    );
    let one_percent = config.with_fee_bps(100).unwrap();
    assert_eq!(one_percent.fee_on_top(U256::from(9_900)), U256::from(100));
}

#[test]
fn test_unsupported_blockchain_error() {
    let err = "tron".parse::<BlockchainName>().unwrap_err();
    assert_eq!(err, RegistryError::UnsupportedBlockchain("tron".to_string()));
    assert_eq!(err.to_string(), "unsupported blockchain: tron");
}

#[cfg(feature = "serde")]
#[test]
fn test_json_message() {
    let json = serde_json::json!({ "pair": DAI_BTC, "token": DGX });
    assert_eq!(json["pair"], "DAI-BTC");
    assert_eq!(json["token"]["code"], 1026);

    let pair: Pair = serde_json::from_value(json["pair"].clone()).unwrap();
    let token: Token = serde_json::from_value(json["token"].clone()).unwrap();
    assert_eq!((pair, token), (DAI_BTC, DGX));
}

proptest! {
    #[test]
    fn prop_make_pair_commutes(a in token(), b in token()) {
        prop_assert_eq!(Pair::new(a, b), Pair::new(b, a));
    }

    #[test]
    fn prop_decode_recovers_tokens(a in token(), b in token()) {
        let pair = Pair::new(a, b);
        let (base, quote) = pair.tokens().unwrap();
        prop_assert!(base.code <= quote.code);
        prop_assert!((base, quote) == (a, b) || (base, quote) == (b, a));
        prop_assert_eq!(Pair::new(quote, base), pair);
    }

    #[test]
    fn prop_format_parse(p in pair()) {
        let name = p.format().unwrap();
        prop_assert_eq!(parse_pair(name).unwrap(), p);
        prop_assert_eq!(parse_pair(name).unwrap().format().unwrap(), name);
    }

    #[test]
    fn prop_token_parse_tolerates_case_and_space(
        t in token(),
        lead in "[ \t]{0,3}",
        trail in "[ \t\n]{0,3}",
        upper in any::<bool>(),
    ) {
        let name = if upper { t.name.to_uppercase() } else { t.name.to_lowercase() };
        prop_assert_eq!(parse_token(&format!("{}{}{}", lead, name, trail)).unwrap(), t);
    }

    #[test]
    fn prop_parse_token_never_panics(input in "\\PC{0,24}") {
        if let Err(err) = parse_token(&input) {
            prop_assert_eq!(err, RegistryError::UnsupportedToken(input.clone()));
        }
    }

    #[test]
    fn prop_unknown_codes_rejected(code in 1034u32..) {
        prop_assert_eq!(
            parse_token_code(TokenCode(code)),
            Err(RegistryError::UnsupportedTokenCode(code))
        );
    }
}
