//! Asset payload parsing for pay-to-address output scripts.
//!
//! A full asset script is a standard P2PKH or P2SH script with an asset
//! record appended: OP_RVN_ASSET, a length-prefixed "rvn" marker, a script
//! type opcode, the asset name, the type's fixed trailing fields, and a
//! final OP_DROP. The parser walks that grammar token by token with every
//! advance bounds-checked, so it is safe to call on untrusted transaction
//! data of any length.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asset::{is_printable_ascii, MAX_ASSET_NAME_LEN, MIN_ASSET_NAME_LEN};
use crate::cursor::ByteCursor;
use crate::error::AssetScriptError;
use crate::opcodes::{OP_DROP, OP_RVN_ASSET};

/// Offsets where the asset marker sits after a length-prefixed P2SH (24
/// bytes) or P2PKH (26 bytes) address script.
const MARKER_OFFSET_P2SH: usize = 24;
const MARKER_OFFSET_P2PKH: usize = 26;

/// The "rvn" marker bytes that open every asset record.
const RVN_MARKER: [u8; 3] = [0x72, 0x76, 0x6e];

/// Length of an IPFS hash record (multihash prefix + 32-byte digest).
const IPFS_RECORD_LEN: usize = 34;

/// The asset script types, keyed by their one-byte opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetScriptType {
    /// New asset issuance ('q').
    Issue,
    /// Ownership token ('o'); names must end in '!'.
    Ownership,
    /// Reissuance of an existing asset ('r').
    Reissue,
    /// Asset transfer ('t').
    Transfer,
}

impl AssetScriptType {
    fn from_opcode(op: u8) -> Option<Self> {
        match op {
            0x71 => Some(AssetScriptType::Issue),
            0x6f => Some(AssetScriptType::Ownership),
            0x72 => Some(AssetScriptType::Reissue),
            0x74 => Some(AssetScriptType::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for AssetScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetScriptType::Issue => write!(f, "issue"),
            AssetScriptType::Ownership => write!(f, "ownership"),
            AssetScriptType::Reissue => write!(f, "reissue"),
            AssetScriptType::Transfer => write!(f, "transfer"),
        }
    }
}

/// A successfully parsed asset payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPayload {
    /// Offset of the script-type opcode, where the asset payload begins.
    pub offset: usize,
    /// The decoded script type.
    pub script_type: AssetScriptType,
}

/// Parse the asset portion of a complete pay-to-address output script.
///
/// Returns the payload offset and type, or the structural check that failed.
/// Total over all inputs: no byte is read at or past `script.len()`.
pub fn parse_asset_script(script: &[u8]) -> Result<AssetPayload, AssetScriptError> {
    // The script's own length byte names the final OP_DROP.
    let final_op = *script.first().ok_or(AssetScriptError::MissingTerminator)? as usize;
    if script.get(final_op) != Some(&OP_DROP) {
        return Err(AssetScriptError::MissingTerminator);
    }

    // Probe both standard prefix widths for the asset marker.
    let mut pos = if script.get(MARKER_OFFSET_P2SH) == Some(&OP_RVN_ASSET) {
        MARKER_OFFSET_P2SH + 1
    } else if script.get(MARKER_OFFSET_P2PKH) == Some(&OP_RVN_ASSET) {
        MARKER_OFFSET_P2PKH + 1
    } else {
        return Err(AssetScriptError::MissingAssetMarker);
    };

    // A 4- or 5-byte push of "rvn" follows the marker.
    if script.get(pos + 1..pos + 4) == Some(&RVN_MARKER) {
        pos += 4;
    } else if script.get(pos + 2..pos + 5) == Some(&RVN_MARKER) {
        pos += 5;
    } else {
        return Err(AssetScriptError::MissingRvnMarker);
    }

    let payload_offset = pos;
    let script_type = script
        .get(pos)
        .copied()
        .and_then(AssetScriptType::from_opcode)
        .ok_or(AssetScriptError::UnknownScriptType)?;

    let mut cursor =
        ByteCursor::new(script, pos).map_err(|_| AssetScriptError::UnknownScriptType)?;
    cursor
        .advance(1)
        .map_err(|_| AssetScriptError::UnknownScriptType)?;

    let name_len = cursor.byte();
    if !(MIN_ASSET_NAME_LEN..=MAX_ASSET_NAME_LEN).contains(&name_len) {
        return Err(AssetScriptError::NameLengthOutOfRange);
    }

    for i in 0..name_len {
        cursor
            .advance(1)
            .map_err(|_| AssetScriptError::NameOutOfBounds)?;
        let c = cursor.byte();
        if !is_printable_ascii(c) {
            return Err(AssetScriptError::NameNotAscii);
        }
        // Ownership asset names carry a trailing '!' marker.
        if script_type == AssetScriptType::Ownership && i == name_len - 1 && c != b'!' {
            return Err(AssetScriptError::OwnershipMissingBang);
        }
    }
    cursor
        .advance(1)
        .map_err(|_| AssetScriptError::TruncatedAfterName)?;

    if script_type != AssetScriptType::Ownership {
        // 8-byte quantity.
        cursor
            .advance(8)
            .map_err(|_| AssetScriptError::TruncatedQuantity)?;

        match script_type {
            AssetScriptType::Transfer => {
                // Optional IPFS attachment, then optional 4-byte timestamp;
                // each is absent when the terminator is already next.
                if cursor.byte() != OP_DROP {
                    cursor
                        .advance(IPFS_RECORD_LEN)
                        .map_err(|_| AssetScriptError::TruncatedTransferIpfs)?;
                }
                if cursor.byte() != OP_DROP {
                    cursor
                        .advance(4)
                        .map_err(|_| AssetScriptError::TruncatedTimestamp)?;
                }
            }
            _ => {
                // Divisibility and reissuability bytes.
                cursor
                    .advance(2)
                    .map_err(|_| AssetScriptError::TruncatedUnits)?;
                if script_type == AssetScriptType::Reissue {
                    // Optional IPFS record, which must lead into OP_DROP.
                    if cursor.byte() != OP_DROP {
                        cursor
                            .advance(IPFS_RECORD_LEN)
                            .map_err(|_| AssetScriptError::TruncatedIpfs)?;
                        if cursor.byte() != OP_DROP {
                            return Err(AssetScriptError::IpfsNotTerminated);
                        }
                    }
                } else if cursor.byte() != 0 {
                    // Issue with the has-IPFS flag set: flag byte + record.
                    cursor
                        .advance(1 + IPFS_RECORD_LEN)
                        .map_err(|_| AssetScriptError::TruncatedIpfs)?;
                } else {
                    cursor
                        .advance(1)
                        .map_err(|_| AssetScriptError::TruncatedTerminator)?;
                }
            }
        }
    }

    if cursor.byte() != OP_DROP {
        return Err(AssetScriptError::MissingFinalTerminator);
    }

    Ok(AssetPayload { offset: payload_offset, script_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE: u8 = 0x71;
    const OWNERSHIP: u8 = 0x6f;
    const REISSUE: u8 = 0x72;
    const TRANSFER: u8 = 0x74;

    /// Asset script on a P2PKH prefix: marker at 26, 4-byte rvn form,
    /// payload offset 31. The length byte names the final OP_DROP.
    fn asset_script(script_type: u8, name: &[u8], trailing: &[u8]) -> Vec<u8> {
        let mut s = vec![0x00, 0x76, 0xa9, 0x14];
        s.extend_from_slice(&[0xaa; 20]);
        s.extend_from_slice(&[0x88, 0xac]);
        s.push(0xc0);
        s.extend_from_slice(&[0x03, 0x72, 0x76, 0x6e]);
        s.push(script_type);
        s.push(name.len() as u8);
        s.extend_from_slice(name);
        s.extend_from_slice(trailing);
        s.push(0x75);
        s[0] = (s.len() - 1) as u8;
        s
    }

    /// Same payload on a P2SH prefix: marker at 24, payload offset 29.
    fn p2sh_asset_script(script_type: u8, name: &[u8], trailing: &[u8]) -> Vec<u8> {
        let mut s = vec![0x00, 0xa9, 0x14];
        s.extend_from_slice(&[0xbb; 20]);
        s.push(0x87);
        s.push(0xc0);
        s.extend_from_slice(&[0x03, 0x72, 0x76, 0x6e]);
        s.push(script_type);
        s.push(name.len() as u8);
        s.extend_from_slice(name);
        s.extend_from_slice(trailing);
        s.push(0x75);
        s[0] = (s.len() - 1) as u8;
        s
    }

    const QUANTITY: [u8; 8] = [0x00, 0xe4, 0x0b, 0x54, 0x02, 0x00, 0x00, 0x00];

    #[test]
    fn transfer_minimal() {
        let s = asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        let payload = parse_asset_script(&s).unwrap();
        assert_eq!(payload.script_type, AssetScriptType::Transfer);
        assert_eq!(payload.offset, 31);
        assert_eq!(s[payload.offset], TRANSFER);
    }

    #[test]
    fn transfer_on_p2sh_prefix() {
        let s = p2sh_asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        let payload = parse_asset_script(&s).unwrap();
        assert_eq!(payload.script_type, AssetScriptType::Transfer);
        assert_eq!(payload.offset, 29);
    }

    #[test]
    fn transfer_with_ipfs_attachment() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x12; IPFS_RECORD_LEN]);
        let s = asset_script(TRANSFER, b"MYASSET", &trailing);
        assert!(parse_asset_script(&s).is_ok());
    }

    #[test]
    fn transfer_with_ipfs_and_timestamp() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x12; IPFS_RECORD_LEN]);
        trailing.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        let s = asset_script(TRANSFER, b"MYASSET", &trailing);
        assert!(parse_asset_script(&s).is_ok());
    }

    #[test]
    fn transfer_truncated_ipfs() {
        // only 10 bytes where a 34-byte record should sit
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x12; 10]);
        let s = asset_script(TRANSFER, b"MYASSET", &trailing);
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::TruncatedTransferIpfs
        );
    }

    #[test]
    fn ownership_requires_trailing_bang() {
        let ok = asset_script(OWNERSHIP, b"MYASSET!", &[]);
        let payload = parse_asset_script(&ok).unwrap();
        assert_eq!(payload.script_type, AssetScriptType::Ownership);

        let bad = asset_script(OWNERSHIP, b"MYASSETX", &[]);
        assert_eq!(
            parse_asset_script(&bad).unwrap_err(),
            AssetScriptError::OwnershipMissingBang
        );
    }

    #[test]
    fn same_name_ok_for_transfer_but_not_ownership() {
        let transfer = asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        assert!(parse_asset_script(&transfer).is_ok());

        let ownership = asset_script(OWNERSHIP, b"MYASSET", &[]);
        assert_eq!(
            parse_asset_script(&ownership).unwrap_err(),
            AssetScriptError::OwnershipMissingBang
        );
    }

    #[test]
    fn issue_without_ipfs() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x08, 0x01, 0x00]); // units, reissuable, no ipfs
        let s = asset_script(ISSUE, b"MYASSET", &trailing);
        let payload = parse_asset_script(&s).unwrap();
        assert_eq!(payload.script_type, AssetScriptType::Issue);
    }

    #[test]
    fn issue_with_ipfs() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x08, 0x01, 0x01]); // units, reissuable, has ipfs
        trailing.extend_from_slice(&[0x34; IPFS_RECORD_LEN]);
        let s = asset_script(ISSUE, b"MYASSET", &trailing);
        assert!(parse_asset_script(&s).is_ok());
    }

    #[test]
    fn issue_truncated_ipfs() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x08, 0x01, 0x01]);
        trailing.extend_from_slice(&[0x34; 5]);
        let s = asset_script(ISSUE, b"MYASSET", &trailing);
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::TruncatedIpfs
        );
    }

    #[test]
    fn reissue_without_ipfs() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x08, 0x01]);
        let s = asset_script(REISSUE, b"MYASSET", &trailing);
        let payload = parse_asset_script(&s).unwrap();
        assert_eq!(payload.script_type, AssetScriptType::Reissue);
    }

    #[test]
    fn reissue_with_ipfs() {
        let mut trailing = QUANTITY.to_vec();
        trailing.extend_from_slice(&[0x08, 0x01]);
        trailing.extend_from_slice(&[0x12; IPFS_RECORD_LEN]);
        let s = asset_script(REISSUE, b"MYASSET", &trailing);
        assert!(parse_asset_script(&s).is_ok());
    }

    #[test]
    fn name_length_boundaries() {
        for (len, ok) in [(2usize, false), (3, true), (31, true), (32, false)] {
            let name = vec![b'A'; len];
            let s = asset_script(TRANSFER, &name, &QUANTITY);
            let result = parse_asset_script(&s);
            if ok {
                assert!(result.is_ok(), "length {} should parse", len);
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    AssetScriptError::NameLengthOutOfRange,
                    "length {} should be rejected",
                    len
                );
            }
        }
    }

    #[test]
    fn name_must_be_printable_ascii() {
        let s = asset_script(TRANSFER, b"MY\x07SSET", &QUANTITY);
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::NameNotAscii
        );
    }

    #[test]
    fn unknown_script_type_rejected() {
        let s = asset_script(0x73, b"MYASSET", &QUANTITY);
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::UnknownScriptType
        );
    }

    #[test]
    fn missing_rvn_marker_rejected() {
        let mut s = asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        s[29] = b'x'; // clobber the 'v' of "rvn"
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::MissingRvnMarker
        );
    }

    #[test]
    fn five_byte_rvn_marker_accepted() {
        // the marker form with two bytes before "rvn"
        let mut s = vec![0x00, 0x76, 0xa9, 0x14];
        s.extend_from_slice(&[0xaa; 20]);
        s.extend_from_slice(&[0x88, 0xac, 0xc0]);
        s.extend_from_slice(&[0x04, 0x03, 0x72, 0x76, 0x6e]);
        s.push(TRANSFER);
        s.push(7);
        s.extend_from_slice(b"MYASSET");
        s.extend_from_slice(&QUANTITY);
        s.push(0x75);
        s[0] = (s.len() - 1) as u8;
        let payload = parse_asset_script(&s).unwrap();
        assert_eq!(payload.offset, 32);
    }

    #[test]
    fn missing_asset_marker_rejected() {
        let mut s = asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        s[26] = 0x00;
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::MissingAssetMarker
        );
    }

    #[test]
    fn missing_terminator_rejected() {
        let mut s = asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        let last = s.len() - 1;
        s[last] = 0x00;
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::MissingTerminator
        );
    }

    #[test]
    fn length_byte_past_buffer_rejected() {
        let mut s = asset_script(TRANSFER, b"MYASSET", &QUANTITY);
        s[0] = 0x7e;
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::MissingTerminator
        );
    }

    #[test]
    fn empty_and_tiny_buffers_rejected() {
        assert!(parse_asset_script(&[]).is_err());
        assert!(parse_asset_script(&[0x00]).is_err());
        assert!(parse_asset_script(&[0x01, 0x75]).is_err());
    }

    #[test]
    fn truncated_quantity_rejected() {
        let s = asset_script(TRANSFER, b"MYASSET", &QUANTITY[..4]);
        assert_eq!(
            parse_asset_script(&s).unwrap_err(),
            AssetScriptError::TruncatedQuantity
        );
    }

    #[test]
    fn garbage_bytes_no_panic() {
        for len in 0..120 {
            let script: Vec<u8> = (0..len).map(|i| (i * 13 + 7) as u8).collect();
            let _ = parse_asset_script(&script);
        }
    }
}
