//! TRON network types.

use core::fmt;
use core::str::FromStr;

use tronkey_core::Error;

use crate::address::ADDRESS_VERSION;

/// BIP-44 coin type registered for TRON.
pub const TRON_COIN_TYPE: u32 = 195;

/// Supported TRON networks.
///
/// The testnets share mainnet's coin type and address version; a key derived
/// for one is valid on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// TRON mainnet.
    #[default]
    Mainnet,
    /// Shasta testnet.
    Shasta,
    /// Nile testnet.
    Nile,
}

impl Network {
    /// Get the BIP44 coin type for this network.
    #[inline]
    #[must_use]
    pub const fn coin_type(self) -> u32 {
        TRON_COIN_TYPE
    }

    /// Version byte prepended to addresses.
    #[inline]
    #[must_use]
    pub const fn address_version(self) -> u8 {
        ADDRESS_VERSION
    }

    /// Get network name as string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Shasta => "shasta",
            Self::Nile => "nile",
        }
    }

    /// Whether this is a test network.
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        !matches!(self, Self::Mainnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mainnet") {
            Ok(Self::Mainnet)
        } else if s.eq_ignore_ascii_case("shasta") {
            Ok(Self::Shasta)
        } else if s.eq_ignore_ascii_case("nile") {
            Ok(Self::Nile)
        } else {
            Err(Error::InvalidEncoding)
        }
    }
}
