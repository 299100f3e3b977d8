//! Trading pair identifiers.

use crate::error::{RegistryError, Result};
use crate::token::{parse_token_code, Token, TokenCode, BTC, DAI, ETH, REN, TUSD};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Two token codes packed into one `u64`.
///
/// The lower code occupies the high 32 bits and is the base token; the higher
/// code occupies the low 32 bits and is the quote token. The value is
/// therefore the same regardless of the order the tokens are given in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair(u64);

pub const DAI_BTC: Pair = Pair::new(DAI, BTC);
pub const DAI_ETH: Pair = Pair::new(DAI, ETH);
pub const DAI_REN: Pair = Pair::new(DAI, REN);
pub const DAI_TUSD: Pair = Pair::new(DAI, TUSD);
pub const BTC_ETH: Pair = Pair::new(BTC, ETH);
pub const BTC_REN: Pair = Pair::new(BTC, REN);
pub const BTC_TUSD: Pair = Pair::new(BTC, TUSD);

/// All supported pairs.
pub const SUPPORTED_PAIRS: [Pair; 7] = [
    DAI_BTC, DAI_ETH, DAI_REN, DAI_TUSD, BTC_ETH, BTC_REN, BTC_TUSD,
];

/// Canonical `BASE-QUOTE` string of every supported pair.
const CANONICAL_NAMES: [(Pair, &str); 7] = [
    (DAI_BTC, "DAI-BTC"),
    (DAI_ETH, "DAI-ETH"),
    (DAI_REN, "DAI-REN"),
    (DAI_TUSD, "DAI-TUSD"),
    (BTC_ETH, "BTC-ETH"),
    (BTC_REN, "BTC-REN"),
    (BTC_TUSD, "BTC-TUSD"),
];

impl Pair {
    /// Create a pair from two tokens, in either order.
    pub const fn new(token_a: Token, token_b: Token) -> Self {
        Self::from_codes(token_a.code, token_b.code)
    }

    /// Create a pair from two token codes, in either order.
    pub const fn from_codes(code_a: TokenCode, code_b: TokenCode) -> Self {
        // Sort codes so the lower one always lands in the high bits
        let (high, low) = if code_a.0 <= code_b.0 {
            (code_a.0, code_b.0)
        } else {
            (code_b.0, code_a.0)
        };
        Self(((high as u64) << 32) | low as u64)
    }

    /// Like [`Pair::new`], but only for supported pairs.
    pub fn supported(token_a: Token, token_b: Token) -> Result<Self> {
        let pair = Self::new(token_a, token_b);
        if pair.is_supported() {
            Ok(pair)
        } else {
            let (base, quote) = if token_a.code <= token_b.code {
                (token_a, token_b)
            } else {
                (token_b, token_a)
            };
            Err(RegistryError::UnsupportedTokenPair {
                base: base.name.to_string(),
                quote: quote.name.to_string(),
            })
        }
    }

    /// Wrap a raw packed value without validating it.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// The packed `u64` value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Code stored in bits 32..64.
    pub const fn base_code(&self) -> TokenCode {
        TokenCode((self.0 >> 32) as u32)
    }

    /// Code stored in bits 0..32.
    pub const fn quote_code(&self) -> TokenCode {
        TokenCode((self.0 & 0x0000_0000_FFFF_FFFF) as u32)
    }

    /// Decode the base token from the high 32 bits.
    pub fn base_token(&self) -> Result<Token> {
        parse_token_code(self.base_code())
    }

    /// Decode the quote token from the low 32 bits.
    pub fn quote_token(&self) -> Result<Token> {
        parse_token_code(self.quote_code())
    }

    /// Both tokens as `(base, quote)`.
    pub fn tokens(&self) -> Result<(Token, Token)> {
        Ok((self.base_token()?, self.quote_token()?))
    }

    /// Check if this pair is in [`SUPPORTED_PAIRS`].
    pub fn is_supported(&self) -> bool {
        SUPPORTED_PAIRS.contains(self)
    }

    /// Check if this pair contains the given token.
    pub fn contains(&self, token: &Token) -> bool {
        self.base_code() == token.code || self.quote_code() == token.code
    }

    /// Get the code of the other token in the pair.
    pub fn other_code(&self, token: &Token) -> Option<TokenCode> {
        if self.base_code() == token.code {
            Some(self.quote_code())
        } else if self.quote_code() == token.code {
            Some(self.base_code())
        } else {
            None
        }
    }

    /// The canonical string of a supported pair.
    pub fn format(&self) -> Result<&'static str> {
        CANONICAL_NAMES
            .iter()
            .find(|(pair, _)| pair == self)
            .map(|(_, name)| *name)
            .ok_or_else(|| RegistryError::InvalidPair(format!("{:#018x}", self.0)))
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format() {
            Ok(name) => write!(f, "Pair({})", name),
            Err(_) => write!(f, "Pair({}:{})", self.base_code(), self.quote_code()),
        }
    }
}

/// Parse a canonical pair string such as `DAI-BTC`.
///
/// Surrounding whitespace and case are ignored. Reversed token order is not
/// accepted.
pub fn parse_pair(input: &str) -> Result<Pair> {
    let normalized = input.trim().to_uppercase();
    CANONICAL_NAMES
        .iter()
        .find(|(_, name)| *name == normalized)
        .map(|(pair, _)| *pair)
        .ok_or_else(|| {
            debug!(target: "tokens", ?input, "invalid token pair");
            RegistryError::InvalidPair(input.to_string())
        })
}

impl FromStr for Pair {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_pair(s)
    }
}

impl From<Pair> for u64 {
    fn from(pair: Pair) -> Self {
        pair.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{parse_pair, Pair};
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::borrow::Cow;

    impl Serialize for Pair {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let name = self.format().map_err(S::Error::custom)?;
            serializer.serialize_str(name)
        }
    }

    impl<'de> Deserialize<'de> for Pair {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let name = Cow::<'de, str>::deserialize(deserializer)?;
            parse_pair(&name).map_err(D::Error::custom)
        }
    }
}
