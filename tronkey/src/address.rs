//! TRON account addresses.
//!
//! An address is the version byte `0x41` followed by the low 20 bytes of the
//! Keccak-256 hash of the uncompressed public key (without its `0x04` tag).
//! Its canonical text form is base58check, which always starts with `T`.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use tronkey_core::{
    encoding::{base58check_decode, base58check_encode},
    hash::keccak256,
    Error, Result,
};

use crate::public_key::TronPublicKey;

/// Version byte prepended to every mainnet and testnet address.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Length of an address including the version byte.
pub const ADDRESS_LEN: usize = 21;

/// A TRON address (version byte plus 20-byte account id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TronAddress([u8; ADDRESS_LEN]);

impl TronAddress {
    /// Create from the 20-byte account id.
    pub const fn from_account_id(id: [u8; 20]) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = ADDRESS_VERSION;
        let mut i = 0;
        while i < 20 {
            bytes[i + 1] = id[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Create from a public key.
    pub fn from_public_key(public_key: &TronPublicKey) -> Self {
        let uncompressed = public_key.to_uncompressed_bytes();
        let hash = keccak256(&uncompressed[1..]);
        let mut id = [0u8; 20];
        id.copy_from_slice(&hash[12..]);
        Self::from_account_id(id)
    }

    /// Parse the 21-byte binary form, checking the version byte.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ADDRESS_LEN {
            return Err(Error::buffer_size(ADDRESS_LEN, bytes.len()));
        }
        if bytes[0] != ADDRESS_VERSION {
            return Err(Error::InvalidAddressVersion(bytes[0]));
        }
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Parse the hex form (`41…`, 42 characters, optional `0x`).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| Error::InvalidEncoding)?;
        Self::from_bytes(&bytes)
    }

    /// The 21-byte binary form.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The 20-byte account id without the version byte.
    pub fn account_id(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Base58check text form.
    pub fn to_base58(&self) -> String {
        base58check_encode(&self.0)
    }

    /// Lowercase hex form, as used by the node HTTP API.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for TronAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let payload = base58check_decode(s)?;
        Self::from_bytes(&payload)
    }
}

impl AsRef<[u8]> for TronAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<TronAddress> for [u8; ADDRESS_LEN] {
    fn from(addr: TronAddress) -> Self {
        addr.0
    }
}
