//! BIP-32 style hierarchical deterministic derivation over secp256k1.
//!
//! Derivation runs in two phases: a master key is generated once from the seed,
//! then one child step runs per path component, strictly in order. Each step
//! reads the private key and chain code left by the previous one.
//!
//! A child step whose HMAC output is unusable (`IL >= n`, or a zero child key)
//! is skipped: the parent key and chain code carry over unchanged to the next
//! component. Index-increment retry is not performed.
//!
//! All intermediate material lives in [`ExtendedKeyState`] and
//! [`DerivationScratch`], both of which are zeroized on drop. Two derivations
//! only need to share nothing for them to run concurrently.

use alloc::string::ToString;
use core::cmp::Ordering;

use hmac::{Hmac, Mac};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use sha2::Sha512;
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use tronkey_core::{ChildIndex, DerivationPath, Error, Result};

use crate::arith::{self, CURVE_ORDER, SCALAR_LEN};
use crate::secret::KeyBuffer;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key used to derive the master key from a seed.
pub const MASTER_KEY_DOMAIN: &[u8] = b"Bitcoin seed";

/// Length of the HMAC-SHA512 output scratch buffer.
pub const HMAC_OUTPUT_LEN: usize = 64;

/// Length of the derivation input scratch buffer.
///
/// Hardened: `0x00 ‖ key(32) ‖ index(4)`. Normal: `pubkey(33) ‖ index(4)`.
pub const DERIVATION_INPUT_LEN: usize = 37;

const COMPRESSED_POINT_LEN: usize = 33;

/// The key and chain code threaded through derivation steps.
///
/// The private key is always in `[1, n - 1]`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKeyState {
    private_key: [u8; SCALAR_LEN],
    chain_code: [u8; 32],
}

impl ExtendedKeyState {
    /// Current private key.
    pub const fn private_key(&self) -> &[u8; SCALAR_LEN] {
        &self.private_key
    }

    /// Current chain code.
    pub const fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Move the private key into a [`KeyBuffer`], consuming the state.
    pub fn into_key_buffer(mut self) -> Result<KeyBuffer> {
        KeyBuffer::take(&mut self.private_key)
    }
}

impl core::fmt::Debug for ExtendedKeyState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedKeyState")
            .field("private_key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// Caller-owned scratch buffers reused across the steps of one derivation.
///
/// Borrowing the buffers mutably for the lifetime of the scratch keeps them
/// out of reach of any other derivation. They are wiped when the scratch drops.
pub struct DerivationScratch<'a> {
    hmac_output: &'a mut [u8; HMAC_OUTPUT_LEN],
    input: &'a mut [u8; DERIVATION_INPUT_LEN],
}

impl<'a> DerivationScratch<'a> {
    /// Wrap fixed-size buffers.
    pub fn new(
        hmac_output: &'a mut [u8; HMAC_OUTPUT_LEN],
        input: &'a mut [u8; DERIVATION_INPUT_LEN],
    ) -> Self {
        Self { hmac_output, input }
    }

    /// Wrap caller slices, which must be exactly 64 and 37 bytes long.
    pub fn from_slices(hmac_output: &'a mut [u8], input: &'a mut [u8]) -> Result<Self> {
        let hmac_len = hmac_output.len();
        let input_len = input.len();
        let hmac_output = <&mut [u8; HMAC_OUTPUT_LEN]>::try_from(hmac_output)
            .map_err(|_| Error::buffer_size(HMAC_OUTPUT_LEN, hmac_len))?;
        let input = <&mut [u8; DERIVATION_INPUT_LEN]>::try_from(input)
            .map_err(|_| Error::buffer_size(DERIVATION_INPUT_LEN, input_len))?;
        Ok(Self { hmac_output, input })
    }

    /// `(IL, IR)`: the left and right halves of the last HMAC output.
    fn output_halves(&self) -> Result<(&[u8; 32], &[u8; 32])> {
        let (left, right) = self.hmac_output.split_at(32);
        let il = <&[u8; 32]>::try_from(left).map_err(|_| Error::CryptoError)?;
        let ir = <&[u8; 32]>::try_from(right).map_err(|_| Error::CryptoError)?;
        Ok((il, ir))
    }
}

impl Drop for DerivationScratch<'_> {
    fn drop(&mut self) {
        self.hmac_output.zeroize();
        self.input.zeroize();
    }
}

/// Owned backing storage for a [`DerivationScratch`].
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ScratchSpace {
    hmac_output: [u8; HMAC_OUTPUT_LEN],
    input: [u8; DERIVATION_INPUT_LEN],
}

impl ScratchSpace {
    /// Zero-filled storage.
    pub const fn new() -> Self {
        Self {
            hmac_output: [0u8; HMAC_OUTPUT_LEN],
            input: [0u8; DERIVATION_INPUT_LEN],
        }
    }

    /// Borrow the storage as scratch for one derivation.
    pub fn scratch(&mut self) -> DerivationScratch<'_> {
        DerivationScratch::new(&mut self.hmac_output, &mut self.input)
    }
}

impl Default for ScratchSpace {
    fn default() -> Self {
        Self::new()
    }
}

/// What a single child step did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Key and chain code were replaced by the child's.
    Derived,
    /// `IL >= n`; state left unchanged.
    SkippedOutOfRange,
    /// The child key came out as zero; state left unchanged.
    SkippedZero,
}

impl StepOutcome {
    /// Whether the step left the state unchanged.
    pub const fn is_skip(self) -> bool {
        !matches!(self, Self::Derived)
    }
}

fn hmac_sha512_into(key: &[u8], message: &[u8], out: &mut [u8; HMAC_OUTPUT_LEN]) -> Result<()> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::CryptoError)?;
    mac.update(message);
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(())
}

/// Generate the master key and chain code from a seed.
///
/// # Errors
///
/// Returns [`Error::InvalidSeed`] on an empty seed, or when the seed's HMAC
/// output is not a valid private key.
pub fn master_key(seed: &[u8], scratch: &mut DerivationScratch<'_>) -> Result<ExtendedKeyState> {
    if seed.is_empty() {
        return Err(Error::InvalidSeed);
    }

    hmac_sha512_into(MASTER_KEY_DOMAIN, seed, scratch.hmac_output)?;
    let (il, ir) = scratch.output_halves()?;
    let state = ExtendedKeyState {
        private_key: *il,
        chain_code: *ir,
    };

    if !arith::is_valid_scalar(&state.private_key) {
        warn!("seed produced an out-of-range master key");
        return Err(Error::InvalidSeed);
    }
    Ok(state)
}

/// Fill the derivation input for `index` from the current state.
fn write_input(
    state: &ExtendedKeyState,
    index: ChildIndex,
    input: &mut [u8; DERIVATION_INPUT_LEN],
) -> Result<()> {
    if index.is_hardened() {
        input[0] = 0x00;
        input[1..33].copy_from_slice(&state.private_key);
    } else {
        let secret =
            SecretKey::from_slice(&state.private_key).map_err(|_| Error::InvalidPrivateKey)?;
        let point = secret.public_key().to_encoded_point(true);
        if point.as_bytes().len() != COMPRESSED_POINT_LEN {
            return Err(Error::InvalidPublicKey);
        }
        input[..COMPRESSED_POINT_LEN].copy_from_slice(point.as_bytes());
    }
    input[33..].copy_from_slice(&index.to_u32().to_be_bytes());
    Ok(())
}

/// Apply an HMAC output split into `il` / `ir` to the state.
///
/// `key' = (key + il) mod n` and `chain' = ir`, unless `il >= n` or `key'`
/// is zero, in which case nothing changes.
fn apply_tweak(state: &mut ExtendedKeyState, il: &[u8; 32], ir: &[u8; 32]) -> StepOutcome {
    if arith::compare(il, &CURVE_ORDER) != Ordering::Less {
        return StepOutcome::SkippedOutOfRange;
    }

    let mut candidate = Zeroizing::new(state.private_key);
    arith::add_mod_order(&mut candidate, il);
    if arith::is_zero(&candidate) {
        return StepOutcome::SkippedZero;
    }

    state.private_key.copy_from_slice(&candidate[..]);
    state.chain_code.copy_from_slice(ir);
    StepOutcome::Derived
}

/// Run one child derivation step in place.
///
/// # Arguments
///
/// * `state` - Parent key and chain code, replaced by the child's on success
/// * `index` - Child index; its inner value must be below 2^31
/// * `scratch` - Buffers for the HMAC input and output
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for an out-of-range index. A skipped step is
/// not an error; it is reported through [`StepOutcome`].
pub fn derive_child(
    state: &mut ExtendedKeyState,
    index: ChildIndex,
    scratch: &mut DerivationScratch<'_>,
) -> Result<StepOutcome> {
    if !index.is_in_range() {
        return Err(Error::InvalidPath(index.to_string()));
    }
    write_input(state, index, scratch.input)?;
    hmac_sha512_into(&state.chain_code, &scratch.input[..], scratch.hmac_output)?;

    let (il, ir) = scratch.output_halves()?;
    let outcome = apply_tweak(state, il, ir);

    match outcome {
        StepOutcome::Derived => trace!(%index, "derived child"),
        StepOutcome::SkippedOutOfRange => warn!(%index, "IL >= n, child step skipped"),
        StepOutcome::SkippedZero => warn!(%index, "zero child key, child step skipped"),
    }
    Ok(outcome)
}

/// Derive the extended key at `path`, using caller-supplied scratch.
///
/// # Errors
///
/// Returns [`Error::InvalidSeed`] if the seed is unusable.
pub fn derive_path_with(
    seed: &[u8],
    path: &DerivationPath,
    scratch: &mut DerivationScratch<'_>,
) -> Result<ExtendedKeyState> {
    debug!(%path, depth = path.depth(), "deriving key");

    let mut state = master_key(seed, scratch)?;
    for &index in path {
        derive_child(&mut state, index, scratch)?;
    }
    Ok(state)
}

/// Derive the extended key at `path` with freshly allocated scratch.
pub fn derive_path(seed: &[u8], path: &DerivationPath) -> Result<ExtendedKeyState> {
    let mut space = ScratchSpace::new();
    let mut scratch = space.scratch();
    derive_path_with(seed, path, &mut scratch)
}

/// Parse `path` and derive the private key it names.
///
/// The path is validated before the seed is touched.
///
/// # Arguments
///
/// * `seed` - BIP-39 seed bytes, usually 64
/// * `path` - Derivation path such as `m/44'/195'/0'/0/0`
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a malformed path (including a bare `m`)
/// and [`Error::InvalidSeed`] for an unusable seed.
pub fn derive_private_key(seed: &[u8], path: &str) -> Result<KeyBuffer> {
    let path = DerivationPath::parse(path)?;
    derive_path(seed, &path)?.into_key_buffer()
}

/// Derive the private key at `path` into a caller-owned 32-byte buffer.
///
/// # Errors
///
/// Returns [`Error::InvalidBufferSize`] if `out` is not 32 bytes long, plus
/// everything [`derive_private_key`] can return.
pub fn derive_into(seed: &[u8], path: &str, out: &mut [u8]) -> Result<()> {
    if out.len() != SCALAR_LEN {
        return Err(Error::buffer_size(SCALAR_LEN, out.len()));
    }
    derive_private_key(seed, path)?.copy_to(out)
}
