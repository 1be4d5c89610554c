//! Base58check, the address codec used by TRON.
//!
//! The payload passed in already carries its version byte; the codec only
//! appends the 4-byte double SHA-256 checksum and base58 encodes the result.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::hash::double_sha256;

/// Length of the base58check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// Encode a versioned payload to base58check.
pub fn base58check_encode(versioned_payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(versioned_payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(versioned_payload);

    let checksum = double_sha256(versioned_payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode a base58check string, returning the versioned payload without checksum.
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut data = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| Error::InvalidEncoding)?;

    if data.len() <= CHECKSUM_LEN {
        return Err(Error::buffer_size(CHECKSUM_LEN + 1, data.len()));
    }

    let split = data.len() - CHECKSUM_LEN;
    let computed = double_sha256(&data[..split]);
    if data[split..] != computed[..CHECKSUM_LEN] {
        return Err(Error::InvalidChecksum);
    }

    data.truncate(split);
    Ok(data)
}
