//! TRON signed-message hashing.
//!
//! The digest is `keccak256("\x19TRON Signed Message:\n" ‖ len ‖ message)`,
//! where `len` is the message length in decimal ASCII.

use tronkey_core::{hash::keccak256_concat, Result, Signature, SigningKey};

use crate::address::TronAddress;
use crate::public_key::TronPublicKey;

/// Prefix prepended to every signed message.
pub const TRON_MESSAGE_PREFIX: &[u8] = b"\x19TRON Signed Message:\n";

/// Compute the TRON personal message hash.
pub fn hash_message(message: &[u8]) -> [u8; 32] {
    let (len_buf, len_used) = format_usize(message.len());
    keccak256_concat(&[TRON_MESSAGE_PREFIX, &len_buf[..len_used], message])
}

/// Hash `message` and sign the digest with `key`.
pub fn sign_message<K: SigningKey + ?Sized>(key: &K, message: &[u8]) -> Result<Signature> {
    key.sign_prehash(&hash_message(message))
}

/// Recover the address that produced `signature` over `message`.
pub fn recover_message_signer(message: &[u8], signature: &Signature) -> Result<TronAddress> {
    let public_key = TronPublicKey::recover_from_prehash(&hash_message(message), signature)?;
    Ok(public_key.to_address())
}

/// Format usize as decimal string bytes (no_std compatible).
fn format_usize(mut n: usize) -> ([u8; 20], usize) {
    let mut buf = [0u8; 20];
    let mut i = buf.len();

    if n == 0 {
        i -= 1;
        buf[i] = b'0';
    } else {
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
    }

    let len = buf.len() - i;
    buf.copy_within(i.., 0);
    (buf, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usize() {
        let (buf, len) = format_usize(0);
        assert_eq!(&buf[..len], b"0");
        let (buf, len) = format_usize(7);
        assert_eq!(&buf[..len], b"7");
        let (buf, len) = format_usize(12345);
        assert_eq!(&buf[..len], b"12345");
    }

    #[test]
    fn test_hash_message_vector() {
        assert_eq!(
            hash_message(b"hello world"),
            hex_literal::hex!("cf02daeb2bea196ed5692322a66ed50080ce74ff8cb711199f1b04f3c13bc10d")
        );
    }

    #[test]
    fn test_hash_matches_manual_concat() {
        let manual = tronkey_core::hash::keccak256(b"\x19TRON Signed Message:\n11hello world");
        assert_eq!(hash_message(b"hello world"), manual);
    }

    #[test]
    fn test_recover_rejects_garbage() {
        let sig = Signature::new([0u8; 32], [0u8; 32], 0);
        assert!(recover_message_signer(b"hello", &sig).is_err());
    }
}
