//! The TRON signing key.

use alloc::vec::Vec;
use core::fmt;

use k256::ecdsa::SigningKey as EcdsaKey;
use tronkey_core::{Error, Result, Signature, SigningKey};

use crate::address::TronAddress;
use crate::derive;
use crate::message;
use crate::public_key::TronPublicKey;
use crate::secret::KeyBuffer;

/// A secp256k1 key that signs for one TRON account.
///
/// The private key is only ever held in a [`KeyBuffer`]; the curve library
/// sees a transient copy per signature which it wipes on drop. The public key
/// and address are computed once at construction.
///
/// # Disposal
///
/// [`SigningKey::dispose`] zeroizes the key. Every later call fails with
/// [`Error::DisposedKeyUse`]; there is no way back.
pub struct TronSigningKey {
    key: KeyBuffer,
    public_key: TronPublicKey,
    address: TronAddress,
}

impl TronSigningKey {
    /// Take ownership of a 32-byte key, wiping the caller's array.
    pub fn from_bytes(bytes: &mut [u8; 32]) -> Result<Self> {
        Self::from_key_buffer(KeyBuffer::take(bytes)?)
    }

    /// Copy a key out of a 32-byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_key_buffer(KeyBuffer::from_slice(bytes)?)
    }

    /// Wrap an existing key buffer.
    pub fn from_key_buffer(key: KeyBuffer) -> Result<Self> {
        let public_key = {
            let ecdsa = ecdsa_key(&key)?;
            TronPublicKey::from_verifying_key(*ecdsa.verifying_key())
        };
        let address = public_key.to_address();
        Ok(Self {
            key,
            public_key,
            address,
        })
    }

    /// Derive the key at `path` from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for a malformed path, including a bare
    /// `m`, and [`Error::InvalidSeed`] for an unusable seed.
    pub fn derive(seed: &[u8], path: &str) -> Result<Self> {
        Self::from_key_buffer(derive::derive_private_key(seed, path)?)
    }

    /// The public key.
    pub fn verifying_key(&self) -> Result<TronPublicKey> {
        self.ensure_live()?;
        Ok(self.public_key)
    }

    /// Hash `message` with the TRON prefix and sign it.
    pub fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        message::sign_message(self, message)
    }

    const fn ensure_live(&self) -> Result<()> {
        if self.key.is_disposed() {
            return Err(Error::DisposedKeyUse);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) const fn key_buffer(&self) -> &KeyBuffer {
        &self.key
    }
}

fn ecdsa_key(key: &KeyBuffer) -> Result<EcdsaKey> {
    EcdsaKey::from_slice(key.expose()?).map_err(|_| Error::InvalidPrivateKey)
}

impl SigningKey for TronSigningKey {
    type Address = TronAddress;

    fn public_key(&self, compressed: bool) -> Result<Vec<u8>> {
        self.ensure_live()?;
        Ok(self.public_key.to_sec1_vec(compressed))
    }

    fn address(&self) -> Result<TronAddress> {
        self.ensure_live()?;
        Ok(self.address)
    }

    fn sign_prehash(&self, digest: &[u8; 32]) -> Result<Signature> {
        let ecdsa = ecdsa_key(&self.key)?;
        let (sig, recid) = ecdsa
            .sign_prehash_recoverable(digest)
            .map_err(|_| Error::CryptoError)?;

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(Signature::new(r, s, recid.to_byte()))
    }

    fn dispose(&mut self) {
        self.key.dispose();
        tracing::debug!(address = %self.address, "signing key disposed");
    }

    fn is_disposed(&self) -> bool {
        self.key.is_disposed()
    }
}

impl fmt::Debug for TronSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TronSigningKey")
            .field("key", &self.key)
            .field("address", &self.address)
            .finish()
    }
}
