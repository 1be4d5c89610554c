//! Signing capability and the recoverable ECDSA signature.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Display};

use crate::error::{Error, Result};

/// Offset added to the recovery parity in the trailing byte of a serialized signature.
pub const RECOVERY_MARKER_OFFSET: u8 = 27;

/// The capability set of a key that can sign for an account.
///
/// Implementations own their private key exclusively and never hand it out as a
/// number or a string. Once [`SigningKey::dispose`] has run, every other method
/// must return [`Error::DisposedKeyUse`].
///
/// # Thread Safety
/// This trait requires `Send + Sync` so keys can be handed to async ledger clients.
pub trait SigningKey: Debug + Send + Sync {
    /// The address type produced for this key.
    type Address: Clone + Debug + Display + PartialEq + Eq;

    /// Serialized public key: 33 bytes compressed, 65 bytes uncompressed (0x04 prefix).
    fn public_key(&self, compressed: bool) -> Result<Vec<u8>>;

    /// The account address for this key.
    fn address(&self) -> Result<Self::Address>;

    /// Sign a 32-byte digest. The caller hashes and prefixes the message.
    fn sign_prehash(&self, digest: &[u8; 32]) -> Result<Signature>;

    /// Zeroize the private key and invalidate this instance.
    fn dispose(&mut self);

    /// Whether [`SigningKey::dispose`] has run.
    fn is_disposed(&self) -> bool;
}

/// An ECDSA signature with recovery parity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The r component (32 bytes)
    pub r: [u8; 32],
    /// The s component (32 bytes)
    pub s: [u8; 32],
    /// The recovery parity (0 or 1)
    pub v: u8,
}

impl Signature {
    /// Length of the serialized `r ‖ s ‖ v` form.
    pub const LEN: usize = 65;

    /// Create a new signature from components
    pub const fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Serialize to 64-byte RS format
    pub fn to_rs(&self) -> [u8; 64] {
        let mut result = [0u8; 64];
        result[..32].copy_from_slice(&self.r);
        result[32..].copy_from_slice(&self.s);
        result
    }

    /// Serialize to 65 bytes `r ‖ s ‖ (27 + parity)`, the form TRON nodes accept.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut result = [0u8; 65];
        result[..32].copy_from_slice(&self.r);
        result[32..64].copy_from_slice(&self.s);
        result[64] = self.v + RECOVERY_MARKER_OFFSET;
        result
    }

    /// Parse the 65-byte form. The trailing byte may be the raw parity (0/1)
    /// or the marker (27/28).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LEN {
            return Err(Error::buffer_size(Self::LEN, bytes.len()));
        }

        let v = match bytes[64] {
            0 | 1 => bytes[64],
            27 | 28 => bytes[64] - RECOVERY_MARKER_OFFSET,
            _ => return Err(Error::InvalidSignature),
        };

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v })
    }

    /// `0x`-prefixed lowercase hex of [`Signature::to_bytes`].
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + 2 * Self::LEN);
        out.push_str("0x");
        out.push_str(&hex::encode(self.to_bytes()));
        out
    }

    /// Parse a hex signature, with or without `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| Error::InvalidEncoding)?;
        Self::from_slice(&bytes)
    }
}
