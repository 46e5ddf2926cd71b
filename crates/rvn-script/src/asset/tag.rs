//! Asset tag validation for bare custom output scripts.
//!
//! A tag is a small metadata record that names or constrains an asset. It is
//! only recognized on scripts that are not one of the standard shapes: the
//! marker byte sits at index 1, and the record grammar dispatches on index 2.

use serde::{Deserialize, Serialize};

use crate::asset::{is_printable_ascii, MAX_ASSET_NAME_LEN, MIN_ASSET_NAME_LEN};
use crate::classify::{is_op_return, is_p2sh, is_regular};
use crate::error::AssetTagError;
use crate::opcodes::{OP_DATA_20, OP_RVN_ASSET};

/// Longest restricted-string payload.
const MAX_RESTRICTED_STRING_LEN: u8 = 80;

/// A validated asset tag. Each variant carries the validated name length and
/// the offset of the name's first byte in the script buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetTagKind {
    /// A qualifier applied to an address via a push-20 tagging record.
    StandardTag {
        /// Validated ASCII name length.
        name_len: u8,
        /// Offset of the first name byte.
        name_offset: usize,
    },
    /// A verifier string constraining a restricted asset.
    RestrictedString {
        /// Validated ASCII string length.
        name_len: u8,
        /// Offset of the first string byte.
        name_offset: usize,
    },
    /// A global freeze/restriction record for a restricted asset.
    GlobalRestriction {
        /// Validated ASCII name length.
        name_len: u8,
        /// Offset of the first name byte.
        name_offset: usize,
    },
}

/// Check that `count` bytes starting at `offset` fit in the buffer and are
/// all printable ASCII.
fn check_name(script: &[u8], offset: usize, count: u8, err: AssetTagError) -> Result<(), AssetTagError> {
    let end = offset + count as usize;
    if end > script.len() {
        return Err(err);
    }
    if !script[offset..end].iter().all(|&c| is_printable_ascii(c)) {
        return Err(err);
    }
    Ok(())
}

/// Determine whether a non-standard output script carries a well-formed
/// asset tag, and which kind.
///
/// Scripts that already classify as regular (witness included, when
/// `native_segwit` is set), P2SH or OP_RETURN cannot carry a tag and yield
/// [`AssetTagError::NotApplicable`], as do buffers shorter than 6 bytes or
/// without the OP_RVN_ASSET marker at byte 1.
pub fn asset_tag(script: &[u8], native_segwit: bool) -> Result<AssetTagKind, AssetTagError> {
    if is_regular(script, native_segwit)
        || is_p2sh(script)
        || is_op_return(script)
        || script.len() < 6
        || script[1] != OP_RVN_ASSET
    {
        return Err(AssetTagError::NotApplicable);
    }

    if script[2] == 0x50 {
        if script[3] == 0x50 {
            // Global restriction: name length byte at index 5.
            let name_len = script[5];
            if !(MIN_ASSET_NAME_LEN..=MAX_ASSET_NAME_LEN).contains(&name_len) {
                return Err(AssetTagError::InvalidGlobalRestriction);
            }
            check_name(script, 6, name_len, AssetTagError::InvalidGlobalRestriction)?;
            return Ok(AssetTagKind::GlobalRestriction { name_len, name_offset: 6 });
        }
        // Restricted string: length byte at index 4.
        let name_len = script[4];
        if name_len == 0 || name_len > MAX_RESTRICTED_STRING_LEN {
            return Err(AssetTagError::InvalidRestrictedString);
        }
        check_name(script, 5, name_len, AssetTagError::InvalidRestrictedString)?;
        return Ok(AssetTagKind::RestrictedString { name_len, name_offset: 5 });
    }

    // Tagging record: a push-20 marker, then the name length byte sits just
    // past the pushed address bytes.
    if script[2] != OP_DATA_20 {
        return Err(AssetTagError::InvalidTag);
    }
    let len_at = script[2] as usize + 4;
    let name_len = match script.get(len_at) {
        Some(&b) => b,
        None => return Err(AssetTagError::InvalidTag),
    };
    if !(MIN_ASSET_NAME_LEN..=MAX_ASSET_NAME_LEN).contains(&name_len) {
        return Err(AssetTagError::InvalidTag);
    }
    check_name(script, len_at + 1, name_len, AssetTagError::InvalidTag)?;
    Ok(AssetTagKind::StandardTag { name_len, name_offset: len_at + 1 })
}
