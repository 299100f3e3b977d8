//! Errors returned by registry lookups and pair decoding.

use thiserror::Error;

/// Errors that can occur while resolving tokens, blockchains, and pairs.
///
/// Every variant carries the raw input that failed so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unsupported blockchain: {0}")]
    UnsupportedBlockchain(String),

    #[error("unsupported token: {0}")]
    UnsupportedToken(String),

    #[error("unsupported token code: {0}")]
    UnsupportedTokenCode(u32),

    #[error("invalid token pair: {0}")]
    InvalidPair(String),

    #[error("unsupported token pair: {base}-{quote}")]
    UnsupportedTokenPair { base: String, quote: String },

    #[error("invalid fee: {0} bps is not below 10000")]
    InvalidFee(u32),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
