//! Error types for key derivation and signing.

use alloc::string::String;
use core::fmt;

/// A convenient Result type alias for tronkey operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while deriving or using keys.
///
/// Every variant is raised synchronously, before any output is produced.
/// Nothing is retried internally.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The seed is empty, or does not yield a usable master key.
    InvalidSeed,
    /// A key or scratch buffer does not have its required fixed length.
    InvalidBufferSize {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// The derivation path does not match the path grammar.
    InvalidPath(String),
    /// The signing key has been disposed and its buffer zeroized.
    DisposedKeyUse,
    /// The bytes are not a valid secp256k1 private key.
    InvalidPrivateKey,
    /// The bytes are not a valid SEC1 encoded public key.
    InvalidPublicKey,
    /// The signature is malformed or does not verify.
    InvalidSignature,
    /// The string is not valid base58 or hex.
    InvalidEncoding,
    /// The base58check checksum does not match.
    InvalidChecksum,
    /// The decoded address carries an unexpected version byte.
    InvalidAddressVersion(u8),
    /// Invalid mnemonic phrase.
    Mnemonic(bip39::Error),
    /// The curve provider rejected an operation.
    CryptoError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed => write!(f, "invalid seed"),
            Self::InvalidBufferSize { expected, actual } => {
                write!(f, "invalid buffer size: expected {expected} bytes, got {actual}")
            }
            Self::InvalidPath(path) => write!(f, "invalid derivation path: {path}"),
            Self::DisposedKeyUse => write!(f, "signing key used after disposal"),
            Self::InvalidPrivateKey => write!(f, "invalid private key"),
            Self::InvalidPublicKey => write!(f, "invalid public key"),
            Self::InvalidSignature => write!(f, "invalid signature"),
            Self::InvalidEncoding => write!(f, "invalid encoding"),
            Self::InvalidChecksum => write!(f, "invalid checksum"),
            Self::InvalidAddressVersion(v) => write!(f, "invalid address version 0x{v:02x}"),
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
            Self::CryptoError => write!(f, "cryptographic operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Mnemonic(err)
    }
}

impl Error {
    /// Shorthand for a wrong-length buffer.
    #[inline]
    pub const fn buffer_size(expected: usize, actual: usize) -> Self {
        Self::InvalidBufferSize { expected, actual }
    }
}
