//! Error types for script classification and asset grammar validation.
//!
//! The asset errors are named enumerations of the distinct structural checks
//! the parsers perform; callers branch on the check that failed rather than
//! on a numeric code.

/// A cursor advance would have left the validated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cursor advance past validated region")]
pub struct CursorOverflow;

/// Why a script does not carry a well-formed asset tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AssetTagError {
    /// The script is a standard shape (or too short to carry the marker);
    /// asset tags ride only on bare custom scripts.
    #[error("script cannot carry an asset tag")]
    NotApplicable,

    /// The tagging record after the push-20 marker is malformed.
    #[error("malformed asset tagging record")]
    InvalidTag,

    /// The restricted-string record is malformed.
    #[error("malformed restricted string record")]
    InvalidRestrictedString,

    /// The global-restriction record is malformed.
    #[error("malformed global restriction record")]
    InvalidGlobalRestriction,
}

/// Why an asset output script failed structural validation.
///
/// One variant per check in the body parser, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AssetScriptError {
    /// No OP_DROP at the offset named by the script's own length byte.
    #[error("script does not end in OP_DROP")]
    MissingTerminator,

    /// No OP_RVN_ASSET marker after either standard prefix length.
    #[error("no asset marker after the address prefix")]
    MissingAssetMarker,

    /// The length-prefixed "rvn" marker is absent or malformed.
    #[error("missing rvn marker")]
    MissingRvnMarker,

    /// The script-type opcode is not issue, ownership, reissue or transfer.
    #[error("unknown asset script type")]
    UnknownScriptType,

    /// The asset name length byte is outside [3, 31].
    #[error("asset name length out of range")]
    NameLengthOutOfRange,

    /// The declared asset name runs past the buffer.
    #[error("asset name out of bounds")]
    NameOutOfBounds,

    /// The asset name contains a byte outside printable ASCII.
    #[error("asset name is not printable ascii")]
    NameNotAscii,

    /// An ownership asset name does not end in '!'.
    #[error("ownership asset name does not end in '!'")]
    OwnershipMissingBang,

    /// The buffer ends immediately after the asset name.
    #[error("script truncated after asset name")]
    TruncatedAfterName,

    /// The 8-byte quantity field runs past the buffer.
    #[error("script truncated inside quantity")]
    TruncatedQuantity,

    /// The divisibility/reissuability fields run past the buffer.
    #[error("script truncated inside unit fields")]
    TruncatedUnits,

    /// An issuance or reissuance IPFS record runs past the buffer.
    #[error("script truncated inside ipfs record")]
    TruncatedIpfs,

    /// A reissuance IPFS record is not followed by OP_DROP.
    #[error("ipfs record not terminated")]
    IpfsNotTerminated,

    /// An issuance without IPFS data ends before its terminator byte.
    #[error("script truncated before terminator")]
    TruncatedTerminator,

    /// A transfer IPFS attachment runs past the buffer.
    #[error("transfer ipfs attachment out of bounds")]
    TruncatedTransferIpfs,

    /// A transfer timestamp field runs past the buffer.
    #[error("transfer timestamp out of bounds")]
    TruncatedTimestamp,

    /// The cursor did not land on the final OP_DROP.
    #[error("asset payload does not end in OP_DROP")]
    MissingFinalTerminator,
}
