//! TRON account derivation from a wallet.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use tronkey_core::{Result, Wallet};

use crate::address::TronAddress;
use crate::derivation_style::DerivationStyle;
use crate::network::TRON_COIN_TYPE;
use crate::signing_key::TronSigningKey;

/// TRON account deriver over a wallet seed.
///
/// # Example
///
/// ```
/// use tronkey::{Deriver, Wallet};
///
/// let wallet = Wallet::from_mnemonic(
///     "between oval abandon quantum heavy stable guess limb ring hobby surround wall",
///     None,
/// ).unwrap();
/// let account = Deriver::new(&wallet).derive(0, false, 0).unwrap();
/// assert_eq!(account.address.to_string(), "TLoswjAAvpuWNRxHX2ZJLFamzXYFhRXFQa");
/// ```
#[derive(Debug)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

/// A derived TRON account.
#[derive(Debug)]
pub struct DerivedAccount {
    /// Derivation path used (e.g., `m/44'/195'/0'/0/0`).
    pub path: String,
    /// The signing key, zeroized on drop.
    pub key: TronSigningKey,
    /// The account address.
    pub address: TronAddress,
}

impl<'a> Deriver<'a> {
    /// Create a new deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive an account using the BIP44 path
    /// `m/44'/195'/account'/change/address_index`.
    ///
    /// # Arguments
    ///
    /// * `account` - Account index (usually 0)
    /// * `change` - Whether this is a change address (usually false for TRON)
    /// * `address_index` - Address index within the account
    ///
    /// # Errors
    ///
    /// Returns an error if an index is 2^31 or above, or derivation fails.
    #[inline]
    pub fn derive(&self, account: u32, change: bool, address_index: u32) -> Result<DerivedAccount> {
        let change_val = u32::from(change);
        let path = format!("m/44'/{TRON_COIN_TYPE}'/{account}'/{change_val}/{address_index}");
        self.derive_at_path(&path)
    }

    /// Derive an account at a custom derivation path.
    ///
    /// # Errors
    ///
    /// Returns [`tronkey_core::Error::InvalidPath`] if the path is malformed or
    /// names the master key itself.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAccount> {
        let key = TronSigningKey::derive(self.wallet.seed(), path)?;
        let address = tronkey_core::SigningKey::address(&key)?;

        Ok(DerivedAccount {
            path: path.to_string(),
            key,
            address,
        })
    }

    /// Derive `count` consecutive accounts starting at `start_index`.
    ///
    /// # Arguments
    ///
    /// * `account` - Account index (usually 0)
    /// * `change` - Whether these are change addresses
    /// * `start_index` - Starting address index
    /// * `count` - Number of accounts to derive
    ///
    /// # Errors
    ///
    /// Returns the first error hit; no partial list is returned.
    pub fn derive_many(
        &self,
        account: u32,
        change: bool,
        start_index: u32,
        count: u32,
    ) -> Result<Vec<DerivedAccount>> {
        (start_index..start_index.saturating_add(count))
            .map(|index| self.derive(account, change, index))
            .collect()
    }

    /// Derive an account using a wallet-specific path style.
    ///
    /// - **Standard** (TronLink): `m/44'/195'/0'/0/{index}`
    /// - **Ledger Live**: `m/44'/195'/{index}'/0/0`
    /// - **Ledger Legacy**: `m/44'/195'/0'/{index}`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is 2^31 or above.
    #[inline]
    pub fn derive_with_style(&self, style: DerivationStyle, index: u32) -> Result<DerivedAccount> {
        self.derive_at_path(&style.path(index))
    }

    /// Derive `count` consecutive accounts in the given style.
    ///
    /// # Errors
    ///
    /// Returns the first error hit.
    pub fn derive_many_with_style(
        &self,
        style: DerivationStyle,
        start_index: u32,
        count: u32,
    ) -> Result<Vec<DerivedAccount>> {
        (start_index..start_index.saturating_add(count))
            .map(|index| self.derive_with_style(style, index))
            .collect()
    }
}
