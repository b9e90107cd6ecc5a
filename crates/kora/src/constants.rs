use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KoraError;

/// Arbitrum One chain ID.
pub const ARBITRUM_ONE_CHAIN_ID: u64 = 42161;

/// CAIP-2 network identifier for Arbitrum One.
pub const ARBITRUM_ONE_NETWORK: &str = "eip155:42161";

/// Payment sessions expire this many seconds after creation.
pub const SESSION_TTL_SECS: i64 = 30 * 60;

/// Prefix of every generated session identifier.
pub const SESSION_ID_PREFIX: &str = "sess_";

/// On-chain metadata for a registered token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub address: Address,
    pub decimals: u8,
    pub symbol: &'static str,
}

pub const USDC: TokenInfo = TokenInfo {
    address: address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
    decimals: 6,
    symbol: "USDC",
};

pub const USDT: TokenInfo = TokenInfo {
    address: address!("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
    decimals: 6,
    symbol: "USDT",
};

pub const DAI: TokenInfo = TokenInfo {
    address: address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
    decimals: 18,
    symbol: "DAI",
};

pub const MYRC: TokenInfo = TokenInfo {
    address: address!("0x3eD03E95DD894235090B3d4A49E0C3239EDcE59e"),
    decimals: 18,
    symbol: "MYRC",
};

/// Stablecoins accepted for payment sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stablecoin {
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "DAI")]
    Dai,
    #[serde(rename = "MYRC")]
    Myrc,
}

impl Stablecoin {
    /// Every registered stablecoin, in registry order.
    pub const ALL: [Stablecoin; 4] = [
        Stablecoin::Usdc,
        Stablecoin::Usdt,
        Stablecoin::Dai,
        Stablecoin::Myrc,
    ];

    pub fn info(&self) -> &'static TokenInfo {
        match self {
            Stablecoin::Usdc => &USDC,
            Stablecoin::Usdt => &USDT,
            Stablecoin::Dai => &DAI,
            Stablecoin::Myrc => &MYRC,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    pub fn address(&self) -> Address {
        self.info().address
    }

    pub fn decimals(&self) -> u8 {
        self.info().decimals
    }
}

impl fmt::Display for Stablecoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Stablecoin {
    type Err = KoraError;

    /// Symbols are matched exactly; `usdc` is not a registered key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stablecoin::ALL
            .into_iter()
            .find(|coin| coin.symbol() == s)
            .ok_or_else(|| KoraError::InvalidCurrency(s.to_string()))
    }
}
