#![deny(missing_docs)]
//! Ravencoin output script support.
//!
//! Provides classification of length-prefixed transaction output scripts
//! (P2PKH, P2SH, native witness, OP_RETURN, contract opcodes), validation of
//! the Ravencoin asset sub-grammars that ride on them, and builders for the
//! standard pay-to-address output templates.
//!
//! Every parser in this crate is total: it accepts any byte sequence of any
//! length without panicking, and never reads past the supplied buffer. Script
//! buffers carry their own length as a one-byte varint at index 0; the slice
//! length is the true allocated size and all bounds checks run against it.

pub mod asset;
pub mod classify;
pub mod cursor;
pub mod opcodes;
pub mod templates;

mod error;

pub use asset::body::{parse_asset_script, AssetPayload, AssetScriptType};
pub use asset::tag::{asset_tag, AssetTagKind};
pub use classify::{classify_output, ScriptShape};
pub use cursor::ByteCursor;
pub use error::{AssetScriptError, AssetTagError, CursorOverflow};
