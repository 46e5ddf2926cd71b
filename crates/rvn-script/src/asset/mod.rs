//! Ravencoin asset sub-grammar validation.
//!
//! Asset records ride on output scripts after an OP_RVN_ASSET (0xC0) marker:
//! either as a tag on a bare custom script ([`tag`]) or as a full payload
//! appended to a pay-to-address script and terminated by OP_DROP ([`body`]).

pub mod body;
pub mod tag;

/// Shortest valid asset name.
pub const MIN_ASSET_NAME_LEN: u8 = 3;
/// Longest valid asset name.
pub const MAX_ASSET_NAME_LEN: u8 = 31;

/// Printable ASCII, the only characters allowed in asset names.
pub(crate) fn is_printable_ascii(c: u8) -> bool {
    (0x20..0x7f).contains(&c)
}
