//! Random token and pair generators for property tests.
//!
//! Compiled for unit tests and for downstream crates that enable the
//! `test-utils` feature.

use crate::pair::{Pair, SUPPORTED_PAIRS};
use crate::token::{Token, SUPPORTED_TOKENS};
use proptest::sample::select;
use proptest::strategy::Strategy;
use rand::Rng;

/// A supported token, picked uniformly.
pub fn random_token<R: Rng + ?Sized>(rng: &mut R) -> Token {
    SUPPORTED_TOKENS[rng.gen_range(0..SUPPORTED_TOKENS.len())]
}

/// A supported pair, picked uniformly.
pub fn random_pair<R: Rng + ?Sized>(rng: &mut R) -> Pair {
    SUPPORTED_PAIRS[rng.gen_range(0..SUPPORTED_PAIRS.len())]
}

/// Strategy over every supported token.
pub fn any_token() -> impl Strategy<Value = Token> {
    select(SUPPORTED_TOKENS.to_vec())
}

/// Strategy over every supported pair.
pub fn any_pair() -> impl Strategy<Value = Pair> {
    select(SUPPORTED_PAIRS.to_vec())
}
