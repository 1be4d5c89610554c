//! secp256k1 public keys for TRON accounts.

use alloc::vec::Vec;

use k256::ecdsa::{signature::hazmat::PrehashVerifier, RecoveryId, VerifyingKey};
use tronkey_core::{Error, Result, Signature};

use crate::address::TronAddress;

/// A TRON public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TronPublicKey {
    inner: VerifyingKey,
}

impl TronPublicKey {
    pub(crate) const fn from_verifying_key(inner: VerifyingKey) -> Self {
        Self { inner }
    }

    /// Parse SEC1 bytes, compressed (33) or uncompressed (65).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self { inner })
    }

    /// Serialize to compressed bytes (33 bytes).
    pub fn to_bytes(&self) -> [u8; 33] {
        let point = self.inner.to_encoded_point(true);
        let mut result = [0u8; 33];
        result.copy_from_slice(point.as_bytes());
        result
    }

    /// Serialize to uncompressed bytes (65 bytes with 0x04 prefix).
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let point = self.inner.to_encoded_point(false);
        let mut result = [0u8; 65];
        result.copy_from_slice(point.as_bytes());
        result
    }

    /// Serialize in either form.
    pub fn to_sec1_vec(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            self.to_bytes().to_vec()
        } else {
            self.to_uncompressed_bytes().to_vec()
        }
    }

    /// Derive the TRON address.
    pub fn to_address(&self) -> TronAddress {
        TronAddress::from_public_key(self)
    }

    /// Verify a signature against a 32-byte digest.
    pub fn verify(&self, digest: &[u8; 32], signature: &Signature) -> Result<()> {
        let sig = k256::ecdsa::Signature::from_slice(&signature.to_rs())
            .map_err(|_| Error::InvalidSignature)?;

        self.inner
            .verify_prehash(digest, &sig)
            .map_err(|_| Error::InvalidSignature)
    }

    /// Recover the signer's public key from a digest and recoverable signature.
    pub fn recover_from_prehash(digest: &[u8; 32], signature: &Signature) -> Result<Self> {
        let sig = k256::ecdsa::Signature::from_slice(&signature.to_rs())
            .map_err(|_| Error::InvalidSignature)?;
        let recid = RecoveryId::from_byte(signature.v).ok_or(Error::InvalidSignature)?;

        let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recid)
            .map_err(|_| Error::InvalidSignature)?;

        Ok(Self { inner: recovered })
    }
}
