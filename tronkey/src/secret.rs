//! Owned private key buffer with explicit, terminal disposal.

use core::fmt;

use tronkey_core::{Error, Result};
use zeroize::Zeroize;

use crate::arith::{self, SCALAR_LEN};

/// A 32-byte private key held by value.
///
/// The buffer is overwritten with zeros on [`KeyBuffer::dispose`] and on drop.
/// After disposal every accessor fails with [`Error::DisposedKeyUse`].
pub struct KeyBuffer {
    bytes: [u8; SCALAR_LEN],
    disposed: bool,
}

impl KeyBuffer {
    /// Move a key into a new buffer, wiping the source array.
    ///
    /// The key must satisfy `1 <= key < n`.
    pub fn take(source: &mut [u8; SCALAR_LEN]) -> Result<Self> {
        if !arith::is_valid_scalar(source) {
            source.zeroize();
            return Err(Error::InvalidPrivateKey);
        }
        let buffer = Self {
            bytes: *source,
            disposed: false,
        };
        source.zeroize();
        Ok(buffer)
    }

    /// Copy a key out of a caller-owned slice, which must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCALAR_LEN {
            return Err(Error::buffer_size(SCALAR_LEN, bytes.len()));
        }
        let mut copy = [0u8; SCALAR_LEN];
        copy.copy_from_slice(bytes);
        Self::take(&mut copy)
    }

    /// Borrow the key bytes.
    pub fn expose(&self) -> Result<&[u8; SCALAR_LEN]> {
        if self.disposed {
            return Err(Error::DisposedKeyUse);
        }
        Ok(&self.bytes)
    }

    /// Copy the key into a caller-owned 32-byte slice.
    pub fn copy_to(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != SCALAR_LEN {
            return Err(Error::buffer_size(SCALAR_LEN, out.len()));
        }
        out.copy_from_slice(self.expose()?);
        Ok(())
    }

    /// Zeroize the key and mark the buffer unusable. Idempotent.
    pub fn dispose(&mut self) {
        self.bytes.zeroize();
        self.disposed = true;
    }

    /// Whether [`KeyBuffer::dispose`] has run.
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The backing bytes regardless of state.
    #[cfg(test)]
    pub(crate) const fn raw(&self) -> &[u8; SCALAR_LEN] {
        &self.bytes
    }
}

impl Drop for KeyBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for KeyBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBuffer")
            .field("bytes", &"[REDACTED]")
            .field("disposed", &self.disposed)
            .finish()
    }
}
