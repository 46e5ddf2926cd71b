#![deny(missing_docs)]

//! Ravencoin validation core - complete SDK.
//!
//! Re-exports all components for convenient single-crate usage.

pub use rvn_script as script;
pub use rvn_wallet as wallet;
