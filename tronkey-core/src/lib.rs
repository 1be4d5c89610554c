//! # tronkey-core - Primitives for TRON HD keys
//!
//! Chain-agnostic building blocks shared by the [`tronkey`] engine:
//!
//! - **Errors**: a single [`Error`] enum covering seeds, buffers, paths and key lifecycle
//! - **Hashing**: SHA-256, double SHA-256 and Keccak-256
//! - **Encoding**: base58check, the address codec used by TRON
//! - **Paths**: strict BIP-32 derivation path grammar
//! - **Traits**: the [`SigningKey`] capability set and the recoverable [`Signature`]
//! - **Wallet**: BIP-39 mnemonic to seed, with the seed zeroized on drop
//!
//! [`tronkey`]: https://docs.rs/tronkey

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::uninlined_format_args,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod encoding;
pub mod error;
pub mod hash;
pub mod hdpath;
pub mod traits;
pub mod wallet;

pub use error::{Error, Result};
pub use hdpath::{ChildIndex, DerivationPath};
pub use traits::{Signature, SigningKey};
pub use wallet::Wallet;
