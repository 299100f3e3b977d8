//! Token registry.
//!
//! Every supported token is a `const` with a unique [`TokenCode`]. Codes in
//! `1..=1023` are quote tokens, codes from `1024` up are base tokens.

use crate::blockchain::BlockchainName;
use crate::config::FeeConfig;
use crate::error::{RegistryError, Result};
use alloy_primitives::U256;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Numerical representation of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenCode(pub u32);

impl TokenCode {
    /// Reserved code that never names a token.
    pub const INVALID: TokenCode = TokenCode(0);

    /// Highest code in the quote range.
    pub const MAX_QUOTE: TokenCode = TokenCode(1023);

    // Quote tokens.
    pub const DAI: TokenCode = TokenCode(100);
    pub const BTC: TokenCode = TokenCode(200);

    // Base tokens.
    pub const ETH: TokenCode = TokenCode(1024);
    pub const REN: TokenCode = TokenCode(1025);
    pub const DGX: TokenCode = TokenCode(1026);
    pub const ZRX: TokenCode = TokenCode(1027);
    pub const OMG: TokenCode = TokenCode(1028);
    pub const PAX: TokenCode = TokenCode(1029);
    pub const GUSD: TokenCode = TokenCode(1030);
    pub const TUSD: TokenCode = TokenCode(1031);
    pub const USDC: TokenCode = TokenCode(1032);
    pub const WBTC: TokenCode = TokenCode(1033);

    /// Whether the code falls in the quote range `[1, 1023]`.
    pub const fn is_quote(&self) -> bool {
        self.0 != 0 && self.0 <= Self::MAX_QUOTE.0
    }

    /// Whether the code falls in the base range `[1024, u32::MAX]`.
    pub const fn is_base(&self) -> bool {
        self.0 > Self::MAX_QUOTE.0
    }
}

impl fmt::Display for TokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A supported token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Symbolic name, also the canonical string form.
    pub name: &'static str,
    /// Unique numeric code.
    pub code: TokenCode,
    /// Number of fractional digits represented by the smallest unit.
    pub decimals: u8,
    /// Ledger the token is issued on.
    pub blockchain: BlockchainName,
}

pub const DAI: Token = Token::new("DAI", TokenCode::DAI, 18, BlockchainName::Erc20);
pub const BTC: Token = Token::new("BTC", TokenCode::BTC, 8, BlockchainName::Bitcoin);
pub const ETH: Token = Token::new("ETH", TokenCode::ETH, 18, BlockchainName::Ethereum);
pub const REN: Token = Token::new("REN", TokenCode::REN, 18, BlockchainName::Erc20);
pub const DGX: Token = Token::new("DGX", TokenCode::DGX, 9, BlockchainName::Erc20);
pub const ZRX: Token = Token::new("ZRX", TokenCode::ZRX, 18, BlockchainName::Erc20);
pub const OMG: Token = Token::new("OMG", TokenCode::OMG, 18, BlockchainName::Erc20);
pub const PAX: Token = Token::new("PAX", TokenCode::PAX, 18, BlockchainName::Erc20);
pub const GUSD: Token = Token::new("GUSD", TokenCode::GUSD, 2, BlockchainName::Erc20);
pub const TUSD: Token = Token::new("TUSD", TokenCode::TUSD, 18, BlockchainName::Erc20);
pub const USDC: Token = Token::new("USDC", TokenCode::USDC, 6, BlockchainName::Erc20);
pub const WBTC: Token = Token::new("WBTC", TokenCode::WBTC, 8, BlockchainName::Erc20);

/// All supported tokens.
pub const SUPPORTED_TOKENS: [Token; 12] = [
    DAI, BTC, ETH, REN, DGX, ZRX, PAX, OMG, GUSD, TUSD, USDC, WBTC,
];

/// Recognized aliases per token, already trimmed and lower-cased.
const TOKEN_ALIASES: [(Token, &[&str]); 12] = [
    (DAI, &["dai", "maker-dai", "makerdai"]),
    (BTC, &["bitcoin", "btc", "xbt"]),
    (ETH, &["ethereum", "eth", "ether"]),
    (REN, &["ren", "republictoken", "republic token"]),
    (DGX, &["digix-gold-token", "dgx", "dgt"]),
    (ZRX, &["zerox", "zrx", "0x"]),
    (OMG, &["omisego", "omg", "omise-go"]),
    (PAX, &["pax", "paxosstandardtoken", "paxos-standard-token"]),
    (GUSD, &["gusd", "gemini-dollar", "geminidollar"]),
    (TUSD, &["tusd", "trueusd", "true-usd"]),
    (USDC, &["usdc", "usd-coin", "usdcoin"]),
    (WBTC, &["wrappedbtc", "wbtc", "wrappedbitcoin"]),
];

impl Token {
    const fn new(
        name: &'static str,
        code: TokenCode,
        decimals: u8,
        blockchain: BlockchainName,
    ) -> Self {
        Self {
            name,
            code,
            decimals,
            blockchain,
        }
    }

    /// The canonical string form (the symbolic name).
    pub const fn format(&self) -> &'static str {
        self.name
    }

    /// Whether the token's code is in the quote range.
    pub const fn is_quote(&self) -> bool {
        self.code.is_quote()
    }

    /// Whether the token's code is in the base range.
    pub const fn is_base(&self) -> bool {
        self.code.is_base()
    }

    /// One whole token in its smallest unit, i.e. `10^decimals`.
    pub fn one(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.decimals))
    }

    /// Convert a whole-token amount into smallest units.
    pub fn units(&self, whole: u64) -> U256 {
        U256::from(whole).saturating_mul(self.one())
    }

    /// Fee that must be added on top of a transfer of `amount`.
    ///
    /// Returns `None` for tokens without a transfer fee. This is distinct from
    /// `Some(U256::ZERO)`, which a fee-bearing token yields for tiny amounts.
    pub fn additional_transaction_fee(&self, amount: U256) -> Option<U256> {
        FeeConfig::for_token(self).map(|config| config.fee_on_top(amount))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Parse a token from any of its aliases.
///
/// Matching ignores case and surrounding whitespace.
pub fn parse_token(input: &str) -> Result<Token> {
    let normalized = input.trim().to_lowercase();
    TOKEN_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&normalized.as_str()))
        .map(|(token, _)| *token)
        .ok_or_else(|| {
            debug!(target: "tokens", ?input, "unsupported token alias");
            RegistryError::UnsupportedToken(input.to_string())
        })
}

/// Look up a token by its numeric code.
pub fn parse_token_code(code: TokenCode) -> Result<Token> {
    SUPPORTED_TOKENS
        .iter()
        .find(|token| token.code == code)
        .copied()
        .ok_or_else(|| {
            debug!(target: "tokens", %code, "unsupported token code");
            RegistryError::UnsupportedTokenCode(code.0)
        })
}

impl FromStr for Token {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_token(s)
    }
}

impl TryFrom<TokenCode> for Token {
    type Error = RegistryError;

    fn try_from(code: TokenCode) -> Result<Self> {
        parse_token_code(code)
    }
}

impl TryFrom<u32> for Token {
    type Error = RegistryError;

    fn try_from(code: u32) -> Result<Self> {
        parse_token_code(TokenCode(code))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{parse_token_code, Token, TokenCode};
    use crate::blockchain::BlockchainName;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct TokenRef<'a> {
        name: &'a str,
        code: TokenCode,
        decimals: u8,
        blockchain: BlockchainName,
    }

    #[derive(Deserialize)]
    struct TokenRecord {
        name: String,
        code: TokenCode,
        decimals: u8,
        blockchain: BlockchainName,
    }

    impl Serialize for Token {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            TokenRef {
                name: self.name,
                code: self.code,
                decimals: self.decimals,
                blockchain: self.blockchain,
            }
            .serialize(serializer)
        }
    }

    // Resolved by code; the remaining fields must agree with the registry.
    impl<'de> Deserialize<'de> for Token {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let record = TokenRecord::deserialize(deserializer)?;
            let token = parse_token_code(record.code).map_err(D::Error::custom)?;
            if token.name != record.name
                || token.decimals != record.decimals
                || token.blockchain != record.blockchain
            {
                return Err(D::Error::custom(format!(
                    "token record does not match registered token {}",
                    token
                )));
            }
            Ok(token)
        }
    }
}
