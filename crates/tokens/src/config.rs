//! Transfer fee parameters.

use crate::error::{RegistryError, Result};
use crate::token::{Token, TokenCode};
use alloy_primitives::{U256, U512};

/// Basis points in a whole (1 bp = 0.01%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Fee charged by the DGX contract on every transfer, in basis points.
pub const DGX_TRANSFER_FEE_BPS: u32 = 13;

/// Fee taken by a token contract on transfer.
///
/// The fee is deducted from the received amount, so a sender that wants the
/// recipient to end up with `amount` has to add [`FeeConfig::fee_on_top`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeConfig {
    /// Fee in basis points. Always below [`BPS_DENOMINATOR`].
    fee_bps: u32,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::new(DGX_TRANSFER_FEE_BPS)
    }
}

impl FeeConfig {
    /// Create a configuration from a fee known to be below 10000 bps.
    pub(crate) const fn new(fee_bps: u32) -> Self {
        Self { fee_bps }
    }

    /// Replace the fee. Fails unless `fee_bps` is below 10000.
    pub fn with_fee_bps(self, fee_bps: u32) -> Result<Self> {
        if fee_bps >= BPS_DENOMINATOR {
            return Err(RegistryError::InvalidFee(fee_bps));
        }
        Ok(Self::new(fee_bps))
    }

    /// Fee in basis points.
    pub fn fee_bps(&self) -> u32 {
        self.fee_bps
    }

    /// The transfer fee configuration for `token`, if it charges one.
    pub fn for_token(token: &Token) -> Option<Self> {
        match token.code {
            TokenCode::DGX => Some(Self::new(DGX_TRANSFER_FEE_BPS)),
            _ => None,
        }
    }

    /// Calculate the fee to add so that `amount` arrives after deduction.
    ///
    /// fee = amount * bps / (10000 - bps), truncated. The product is taken in
    /// 512 bits so it cannot overflow.
    pub fn fee_on_top(&self, amount: U256) -> U256 {
        let numerator = U512::from(amount) * U512::from(self.fee_bps);
        let denominator = U512::from(BPS_DENOMINATOR - self.fee_bps);
        // Only fees above 5000 bps can push the quotient past U256::MAX.
        U256::saturating_from(numerator / denominator)
    }

    /// Amount to send, fee included.
    pub fn gross_amount(&self, amount: U256) -> U256 {
        amount.saturating_add(self.fee_on_top(amount))
    }
}
