/// Error types for derivation path decoding.
///
/// These are the fatal, structural failures: a malformed path is rejected
/// before any component is read, and the policy guards never see it. Valid
/// but unconventional paths are not errors; they surface as verdicts from
/// the policy module instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The declared component count exceeds the supported maximum.
    #[error("path declares {0} components, maximum is {max}", max = crate::path::MAX_BIP32_PATH)]
    TooManyComponents(u8),

    /// The buffer ends before the declared components do.
    #[error("path truncated: {expected} bytes declared, {actual} present")]
    Truncated {
        /// Byte count the length byte promised.
        expected: usize,
        /// Byte count actually present.
        actual: usize,
    },

    /// The buffer is empty; not even a length byte is present.
    #[error("empty path buffer")]
    Empty,
}
