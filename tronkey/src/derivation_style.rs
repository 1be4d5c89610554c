//! Derivation path styles for different wallet software.
//!
//! TronLink, Ledger Live and the older Ledger app all use coin type 195 but
//! disagree on which path level carries the account index.

use alloc::{format, string::String};
use core::fmt;
use core::str::FromStr;

use crate::network::TRON_COIN_TYPE;

/// TRON derivation path styles.
///
/// - **Standard** (TronLink, Trust Wallet): `m/44'/195'/0'/0/{index}`
/// - **Ledger Live**: `m/44'/195'/{index}'/0/0`
/// - **Ledger Legacy**: `m/44'/195'/0'/{index}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DerivationStyle {
    /// Standard BIP-44 path, index at the address level.
    #[default]
    Standard,

    /// One hardened account per index.
    LedgerLive,

    /// Index at the fourth level, non-hardened, no change level.
    LedgerLegacy,
}

impl DerivationStyle {
    /// Generate the derivation path string for a given index.
    #[must_use]
    pub fn path(self, index: u32) -> String {
        match self {
            Self::Standard => format!("m/44'/{TRON_COIN_TYPE}'/0'/0/{index}"),
            Self::LedgerLive => format!("m/44'/{TRON_COIN_TYPE}'/{index}'/0/0"),
            Self::LedgerLegacy => format!("m/44'/{TRON_COIN_TYPE}'/0'/{index}"),
        }
    }

    /// Get the human-readable name of this derivation style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard (TronLink)",
            Self::LedgerLive => "Ledger Live",
            Self::LedgerLegacy => "Ledger Legacy",
        }
    }

    /// Get a short identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::LedgerLive => "ledger-live",
            Self::LedgerLegacy => "ledger-legacy",
        }
    }

    /// Get all available derivation styles.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Standard, Self::LedgerLive, Self::LedgerLegacy]
    }
}

impl fmt::Display for DerivationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DerivationStyle {
    type Err = ParseDerivationStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "tronlink" | "bip44" => Ok(Self::Standard),
            "ledger-live" | "ledgerlive" | "live" => Ok(Self::LedgerLive),
            "ledger-legacy" | "ledgerlegacy" | "legacy" => Ok(Self::LedgerLegacy),
            _ => Err(ParseDerivationStyleError(s.into())),
        }
    }
}

/// Error returned when parsing an invalid derivation style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDerivationStyleError(pub(crate) String);

impl fmt::Display for ParseDerivationStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid derivation style '{}', expected one of: standard, ledger-live, ledger-legacy",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDerivationStyleError {}
