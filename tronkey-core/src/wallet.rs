//! Mnemonic-backed wallet holding the BIP-39 seed.

use alloc::string::{String, ToString};

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::Error;

/// A BIP-39 wallet: the mnemonic and the 64-byte seed it stretches to.
///
/// Both are zeroized on drop. The seed is what the HD engine consumes; the
/// wallet never derives keys itself.
///
/// # Passphrase Support
///
/// The same mnemonic with different passphrases produces unrelated seeds.
pub struct Wallet {
    mnemonic: Zeroizing<String>,
    seed: Zeroizing<[u8; 64]>,
    has_passphrase: bool,
}

impl Wallet {
    /// Create a wallet from raw entropy bytes (16, 20, 24, 28 or 32 bytes).
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic = Mnemonic::from_entropy(entropy)?;
        Self::from_mnemonic(&Zeroizing::new(mnemonic.to_string()), passphrase)
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if a word is unknown or the checksum does not match.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic: Mnemonic = phrase.parse()?;
        let passphrase_str = passphrase.unwrap_or("");
        let seed_bytes = Zeroizing::new(mnemonic.to_seed(passphrase_str));

        tracing::debug!(
            words = mnemonic.word_count(),
            has_passphrase = !passphrase_str.is_empty(),
            "wallet seed derived from mnemonic"
        );

        Ok(Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed: Zeroizing::new(*seed_bytes),
            has_passphrase: !passphrase_str.is_empty(),
        })
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: this value reconstructs every derived key.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the seed bytes for key derivation.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// Check if a passphrase was used to derive the seed.
    #[must_use]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"[REDACTED]")
            .field("seed", &"[REDACTED]")
            .field("has_passphrase", &self.has_passphrase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TRON_MNEMONIC: &str =
        "between oval abandon quantum heavy stable guess limb ring hobby surround wall";

    #[test]
    fn test_invalid_entropy_length() {
        let result = Wallet::from_entropy(&[0u8; 15], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_entropy() {
        let wallet = Wallet::from_entropy(&[0u8; 16], None).unwrap();
        assert_eq!(wallet.word_count(), 12);
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
    }

    #[test]
    fn test_from_mnemonic_seed() {
        let wallet = Wallet::from_mnemonic(TRON_MNEMONIC, None).unwrap();
        assert!(!wallet.has_passphrase());
        assert_eq!(
            wallet.seed(),
            &hex_literal::hex!(
                "95b0794a2702b70755bdc46bbfbc387be78f92a9f07a959e2c98cd564e08f763"
                "d202f84acec8a2d20495d52a02eb9da9eb79781c324b46b2cc0aceaae1ebcfaf"
            )
        );
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            Wallet::from_mnemonic(phrase, None),
            Err(Error::Mnemonic(_))
        ));
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();
        assert!(wallet2.has_passphrase());
        assert_ne!(wallet1.seed(), wallet2.seed());
    }

    #[test]
    fn test_empty_passphrase_is_none() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("")).unwrap();
        assert!(!wallet2.has_passphrase());
        assert_eq!(wallet1.seed(), wallet2.seed());
    }

    #[test]
    fn test_debug_redacts() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let debug = alloc::format!("{wallet:?}");
        assert!(!debug.contains("abandon"));
        assert!(debug.contains("REDACTED"));
    }
}
