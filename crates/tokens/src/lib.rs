//! Registry of supported tokens, blockchains, and trading pairs.
//!
//! This library provides:
//! - Token lookup by alias or numeric code
//! - Order-independent pair identifiers packed into a `u64`
//! - Canonical string forms for tokens and supported pairs
//! - Transfer fee calculation for fee-bearing tokens

pub mod blockchain;
pub mod config;
pub mod error;
pub mod pair;
pub mod token;

#[cfg(any(test, feature = "test-utils"))]
pub mod testutil;

pub use alloy_primitives::U256;
pub use blockchain::BlockchainName;
pub use config::FeeConfig;
pub use error::{RegistryError, Result};
pub use pair::{parse_pair, Pair, SUPPORTED_PAIRS};
pub use token::{parse_token, parse_token_code, Token, TokenCode, SUPPORTED_TOKENS};
