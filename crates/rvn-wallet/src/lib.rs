#![deny(missing_docs)]
//! BIP32 derivation path decoding and BIP44 policy checks.
//!
//! Paths arrive as a one-byte component count followed by big-endian 32-bit
//! words (top bit marks a hardened component). [`path::Bip32Path`] decodes
//! and re-encodes that wire form; [`policy`] evaluates decoded paths against
//! a coin's expected BIP44 structure and coin type, producing the verdicts a
//! caller turns into "sign silently" or "ask the user first".

pub mod path;
pub mod policy;

mod error;

pub use error::PathError;
pub use path::{Bip32Path, HARDENED, MAX_BIP32_PATH};
pub use policy::{
    bip44_derivation_guard, enforce_bip44_coin_type, CoinTypeCompliance, DerivationVerdict,
    PathPolicy,
};
