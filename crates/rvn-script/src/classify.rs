//! Output script classification.
//!
//! All predicates take a borrowed, length-prefixed script buffer (byte 0 is
//! the script's own length as a one-byte varint) and match against the fixed
//! templates in [`crate::templates`]. Buffers too short for a template simply
//! fail to match; nothing here panics or errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::opcodes::{OP_CALL, OP_CREATE, OP_RETURN};
use crate::templates::{
    HASH160_LEN, P2PKH_PREFIX, P2PKH_SUFFIX, P2SH_PREFIX, P2SH_SUFFIX, P2WPKH_PREFIX, P2WSH_PREFIX,
};

/// Largest script length byte a contract script may carry; the values above
/// it belong to the multi-byte varint range.
const MAX_CONTRACT_SCRIPT_LEN: u8 = 0xea;

/// The recognized output script shapes, mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptShape {
    /// Standard pay-to-public-key-hash output.
    RegularP2pkh,
    /// Pay-to-script-hash output.
    P2sh,
    /// Native segwit output (P2WPKH or P2WSH), only reported when the coin
    /// enables native segwit.
    NativeWitness,
    /// OP_RETURN data carrier output.
    OpReturn,
    /// Contract creation script.
    OpCreate,
    /// Contract call script.
    OpCall,
    /// None of the recognized shapes.
    Unrecognized,
}

impl fmt::Display for ScriptShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptShape::RegularP2pkh => write!(f, "P2PKH"),
            ScriptShape::P2sh => write!(f, "P2SH"),
            ScriptShape::NativeWitness => write!(f, "native witness"),
            ScriptShape::OpReturn => write!(f, "OP_RETURN"),
            ScriptShape::OpCreate => write!(f, "OP_CREATE"),
            ScriptShape::OpCall => write!(f, "OP_CALL"),
            ScriptShape::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Match `script` against a length-prefixed template: `prefix`, a 20 or 32
/// byte payload, then `suffix`.
fn matches_template(script: &[u8], prefix: &[u8], payload_len: usize, suffix: &[u8]) -> bool {
    let suffix_at = prefix.len() + payload_len;
    script.len() >= suffix_at + suffix.len()
        && script[..prefix.len()] == *prefix
        && script[suffix_at..suffix_at + suffix.len()] == *suffix
}

/// Check for the exact P2PKH template, length byte included.
pub fn is_p2pkh(script: &[u8]) -> bool {
    matches_template(script, &P2PKH_PREFIX, HASH160_LEN, &P2PKH_SUFFIX)
}

/// Check for the exact P2SH template, length byte included.
pub fn is_p2sh(script: &[u8]) -> bool {
    matches_template(script, &P2SH_PREFIX, HASH160_LEN, &P2SH_SUFFIX)
}

/// Check for a native witness output (P2WPKH or P2WSH). Only matches when
/// the coin enables native segwit.
pub fn is_native_witness(script: &[u8], native_segwit: bool) -> bool {
    native_segwit
        && (script.starts_with(&P2WPKH_PREFIX) || script.starts_with(&P2WSH_PREFIX))
}

/// Check for a "regular" output: native witness (when enabled) or P2PKH.
pub fn is_regular(script: &[u8], native_segwit: bool) -> bool {
    is_native_witness(script, native_segwit) || is_p2pkh(script)
}

/// Check for an OP_RETURN output.
pub fn is_op_return(script: &[u8]) -> bool {
    script.get(1) == Some(&OP_RETURN)
}

/// P2PKH prefix match that ignores the length byte, recognizing the address
/// portion of a script with an asset payload appended after it.
pub fn has_p2pkh_asset_prefix(script: &[u8]) -> bool {
    let suffix_at = P2PKH_PREFIX.len() + HASH160_LEN;
    script.len() >= suffix_at + P2PKH_SUFFIX.len()
        && script[1..P2PKH_PREFIX.len()] == P2PKH_PREFIX[1..]
        && script[suffix_at..suffix_at + P2PKH_SUFFIX.len()] == P2PKH_SUFFIX
}

/// P2SH prefix match that ignores the length byte, recognizing the address
/// portion of a script with an asset payload appended after it.
pub fn has_p2sh_asset_prefix(script: &[u8]) -> bool {
    let suffix_at = P2SH_PREFIX.len() + HASH160_LEN;
    script.len() >= suffix_at + P2SH_SUFFIX.len()
        && script[1..P2SH_PREFIX.len()] == P2SH_PREFIX[1..]
        && script[suffix_at..suffix_at + P2SH_SUFFIX.len()] == P2SH_SUFFIX
}

/// Contract script check: the opcode at the offset named by the length byte
/// must equal `marker`, and none of the standard shapes may match first.
fn is_contract_script(script: &[u8], native_segwit: bool, marker: u8) -> bool {
    let len_byte = match script.first() {
        Some(&b) => b,
        None => return false,
    };
    !is_regular(script, native_segwit)
        && !is_p2sh(script)
        && !is_op_return(script)
        && len_byte <= MAX_CONTRACT_SCRIPT_LEN
        && script.get(len_byte as usize) == Some(&marker)
}

/// Check for a contract creation script.
pub fn is_op_create(script: &[u8], native_segwit: bool) -> bool {
    is_contract_script(script, native_segwit, OP_CREATE)
}

/// Check for a contract call script.
pub fn is_op_call(script: &[u8], native_segwit: bool) -> bool {
    is_contract_script(script, native_segwit, OP_CALL)
}

/// Classify an output script. Checks run in precedence order so at most one
/// shape is ever reported: witness (when enabled), P2PKH, P2SH, OP_RETURN,
/// then the contract markers.
pub fn classify_output(script: &[u8], native_segwit: bool) -> ScriptShape {
    if is_native_witness(script, native_segwit) {
        ScriptShape::NativeWitness
    } else if is_p2pkh(script) {
        ScriptShape::RegularP2pkh
    } else if is_p2sh(script) {
        ScriptShape::P2sh
    } else if is_op_return(script) {
        ScriptShape::OpReturn
    } else if is_op_create(script, native_segwit) {
        ScriptShape::OpCreate
    } else if is_op_call(script, native_segwit) {
        ScriptShape::OpCall
    } else {
        ScriptShape::Unrecognized
    }
}
