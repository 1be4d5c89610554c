//! TRON hierarchical deterministic keys.
//!
//! Derives secp256k1 private keys from a BIP-39 seed along a BIP-32 path,
//! wraps them in a disposable [`TronSigningKey`], and signs digests or TRON
//! personal messages with recoverable ECDSA.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support
//!
//! # Usage
//!
//! ```
//! use tronkey::{SigningKey, TronSigningKey, Wallet};
//!
//! let wallet = Wallet::from_mnemonic(
//!     "between oval abandon quantum heavy stable guess limb ring hobby surround wall",
//!     None,
//! ).unwrap();
//!
//! let mut key = TronSigningKey::derive(wallet.seed(), "m/44'/195'/0'/0'").unwrap();
//! assert_eq!(key.address().unwrap().to_string(), "TG7eEfeG8Ddo3nX6U2eCYDGRVx5WSirtqW");
//!
//! let signature = key.sign_message(b"hello world").unwrap();
//! assert_eq!(signature.to_bytes().len(), 65);
//!
//! key.dispose();
//! assert!(key.sign_message(b"hello world").is_err());
//! ```

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
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod address;
pub mod arith;
pub mod derivation_style;
pub mod derive;
pub mod deriver;
pub mod message;
pub mod network;
pub mod public_key;
pub mod secret;
pub mod signing_key;

pub use address::TronAddress;
pub use derivation_style::{DerivationStyle, ParseDerivationStyleError};
pub use derive::{derive_into, derive_private_key, DerivationScratch, ExtendedKeyState, StepOutcome};
pub use deriver::{DerivedAccount, Deriver};
pub use message::{hash_message, recover_message_signer};
pub use network::Network;
pub use public_key::TronPublicKey;
pub use secret::KeyBuffer;
pub use signing_key::TronSigningKey;

pub use tronkey_core::{ChildIndex, DerivationPath, Error, Result, Signature, SigningKey, Wallet};
