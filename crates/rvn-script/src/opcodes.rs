//! Opcode constants used by script classification and the asset grammar.

/// Push the next 20 bytes onto the stack.
pub const OP_DATA_20: u8 = 0x14;
/// Push the next 32 bytes onto the stack.
pub const OP_DATA_32: u8 = 0x20;
/// OP_RETURN, marks an unspendable data-carrying output.
pub const OP_RETURN: u8 = 0x6a;
/// OP_DROP, discards the top stack item. Terminates asset payloads.
pub const OP_DROP: u8 = 0x75;
/// OP_DUP.
pub const OP_DUP: u8 = 0x76;
/// OP_EQUAL.
pub const OP_EQUAL: u8 = 0x87;
/// OP_EQUALVERIFY.
pub const OP_EQUALVERIFY: u8 = 0x88;
/// OP_HASH160.
pub const OP_HASH160: u8 = 0xa9;

/// OP_RVN_ASSET, introduces an asset record after a standard prefix.
pub const OP_RVN_ASSET: u8 = 0xc0;
/// Contract creation marker opcode.
pub const OP_CREATE: u8 = 0xc1;
/// Contract call marker opcode.
pub const OP_CALL: u8 = 0xc2;
