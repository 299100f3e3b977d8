//! Blockchains that registered tokens originate from.

use crate::error::RegistryError;
use std::fmt;
use std::str::FromStr;

/// Name of the ledger a token is issued on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockchainName {
    /// UTXO chain.
    Bitcoin,
    /// Smart-contract chain.
    Ethereum,
    /// Shielded UTXO chain.
    ZCash,
    /// ERC-20 tokens riding on Ethereum.
    Erc20,
}

impl BlockchainName {
    /// Every known blockchain.
    pub const ALL: [BlockchainName; 4] = [
        BlockchainName::Bitcoin,
        BlockchainName::Ethereum,
        BlockchainName::ZCash,
        BlockchainName::Erc20,
    ];

    /// The stable lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BlockchainName::Bitcoin => "bitcoin",
            BlockchainName::Ethereum => "ethereum",
            BlockchainName::ZCash => "zcash",
            BlockchainName::Erc20 => "erc20",
        }
    }
}

impl fmt::Display for BlockchainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockchainName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_str() == normalized)
            .ok_or_else(|| RegistryError::UnsupportedBlockchain(s.to_string()))
    }
}
