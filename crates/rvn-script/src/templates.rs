//! Byte-pattern constants for the standard length-prefixed output scripts,
//! and builders that append those outputs to a caller-owned buffer.
//!
//! Output script buffers start with the script's own length as a one-byte
//! varint (always below 0xFD), so every template here carries that length
//! byte at index 0.

/// P2PKH prefix: script length (0x19), OP_DUP, OP_HASH160, OP_DATA_20.
pub const P2PKH_PREFIX: [u8; 4] = [0x19, 0x76, 0xa9, 0x14];

/// P2PKH suffix after the 20-byte hash: OP_EQUALVERIFY OP_CHECKSIG.
pub const P2PKH_SUFFIX: [u8; 2] = [0x88, 0xac];

/// P2SH prefix: script length (0x17), OP_HASH160, OP_DATA_20.
pub const P2SH_PREFIX: [u8; 3] = [0x17, 0xa9, 0x14];

/// P2SH suffix after the 20-byte hash: OP_EQUAL.
pub const P2SH_SUFFIX: [u8; 1] = [0x87];

/// P2WPKH prefix: script length (0x16), witness v0, OP_DATA_20.
pub const P2WPKH_PREFIX: [u8; 3] = [0x16, 0x00, 0x14];

/// P2WSH prefix: script length (0x22), witness v0, OP_DATA_32.
pub const P2WSH_PREFIX: [u8; 3] = [0x22, 0x00, 0x20];

/// Length of a hash160 payload (20 bytes).
pub const HASH160_LEN: usize = 20;

/// Total length of a serialized P2PKH output script, length byte included.
pub const P2PKH_SCRIPT_LEN: usize = P2PKH_PREFIX.len() + HASH160_LEN + P2PKH_SUFFIX.len();

/// Total length of a serialized P2SH output script, length byte included.
pub const P2SH_SCRIPT_LEN: usize = P2SH_PREFIX.len() + HASH160_LEN + P2SH_SUFFIX.len();

/// Append a pay-to-address output to `out`: the optional amount as 8
/// little-endian bytes, then the length-prefixed P2PKH or P2SH script
/// around `hash160`.
///
/// The caller owns the buffer and threads it through repeated calls; the
/// buffer length after return is the advanced write offset.
pub fn append_address_output(out: &mut Vec<u8>, hash160: &[u8; HASH160_LEN], amount: Option<u64>, p2sh: bool) {
    let (prefix, suffix): (&[u8], &[u8]) = if p2sh {
        (&P2SH_PREFIX, &P2SH_SUFFIX)
    } else {
        (&P2PKH_PREFIX, &P2PKH_SUFFIX)
    };
    if let Some(amount) = amount {
        out.extend_from_slice(&amount.to_le_bytes());
    }
    out.extend_from_slice(prefix);
    out.extend_from_slice(hash160);
    out.extend_from_slice(suffix);
}
