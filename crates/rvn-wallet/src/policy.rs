//! BIP44 structural and coin-type policy checks.
//!
//! These are pure decision functions: they never fail, they only report
//! whether a decoded path follows the convention the coin expects. Callers
//! require explicit user confirmation for anything flagged here.

use serde::{Deserialize, Serialize};

use crate::path::Bip32Path;

/// Canonical BIP44 depth: purpose / coin_type / account / change / index.
pub const BIP44_PATH_LEN: usize = 5;

const BIP44_PURPOSE_OFFSET: usize = 0;
const BIP44_COIN_TYPE_OFFSET: usize = 1;
const BIP44_ACCOUNT_OFFSET: usize = 2;
const BIP44_CHANGE_OFFSET: usize = 3;
const BIP44_ADDRESS_INDEX_OFFSET: usize = 4;

/// Purpose values accepted as BIP44-family conventions (44, 49, 84).
const BIP44_PURPOSES: [u32; 3] = [44, 49, 84];

/// A coin's expected derivation policy.
///
/// A `coin_type` of 0 disables coin-type enforcement entirely. The account
/// and address-index ceilings are soft limits on what an ordinary wallet
/// produces; exceeding them is not invalid, just worth a confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPolicy {
    /// Primary expected BIP44 coin type, 0 to disable enforcement.
    pub coin_type: u32,
    /// Secondary accepted coin type (forks and rebrands).
    pub coin_type2: u32,
    /// Highest account index an ordinary wallet uses.
    pub max_account: u32,
    /// Highest address index an ordinary wallet uses.
    pub max_address_index: u32,
}

impl PathPolicy {
    /// Policy for a coin accepting `coin_type` or `coin_type2`, with the
    /// recommended soft limits.
    pub fn new(coin_type: u32, coin_type2: u32) -> Self {
        PathPolicy {
            coin_type,
            coin_type2,
            max_account: 100,
            max_address_index: 50_000,
        }
    }
}

impl Default for PathPolicy {
    /// The Ravencoin mainnet policy (registered coin type 175).
    fn default() -> Self {
        PathPolicy::new(175, 175)
    }
}

/// Whether a path follows the coin's BIP44 convention closely enough to
/// proceed without asking the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DerivationVerdict {
    /// The path looks like ordinary wallet usage.
    Normal,
    /// The path deviates from convention; confirm before using it.
    Unusual,
}

impl DerivationVerdict {
    /// True when the caller should require explicit confirmation.
    pub fn needs_confirmation(self) -> bool {
        self == DerivationVerdict::Unusual
    }
}

/// Whether a path's coin type matches the configured policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinTypeCompliance {
    /// The path is acceptable for silent use.
    Compliant,
    /// The path needs explicit user confirmation.
    NeedsConfirmation,
}

impl CoinTypeCompliance {
    /// True when the caller should require explicit confirmation.
    pub fn needs_confirmation(self) -> bool {
        self == CoinTypeCompliance::NeedsConfirmation
    }
}

/// Check a derivation path against ordinary BIP44 wallet usage.
///
/// Returns [`DerivationVerdict::Unusual`] unless the path has the canonical
/// depth, a hardened purpose of 44, 49 or 84, a coin type matching the
/// policy (when enforcement is enabled), a hardened account within the soft
/// ceiling, a change component equal to 1 for change paths and 0 otherwise,
/// and an address index within the soft ceiling.
pub fn bip44_derivation_guard(
    path: &Bip32Path,
    policy: &PathPolicy,
    is_change_path: bool,
) -> DerivationVerdict {
    if path.depth() != BIP44_PATH_LEN {
        return DerivationVerdict::Unusual;
    }
    match path.hardened_index(BIP44_PURPOSE_OFFSET) {
        Some(purpose) if BIP44_PURPOSES.contains(&purpose) => {}
        _ => return DerivationVerdict::Unusual,
    }

    if policy.coin_type != 0 {
        match path.hardened_index(BIP44_COIN_TYPE_OFFSET) {
            Some(ct) if ct == policy.coin_type || ct == policy.coin_type2 => {}
            _ => return DerivationVerdict::Unusual,
        }
    }

    match path.hardened_index(BIP44_ACCOUNT_OFFSET) {
        Some(account) if account <= policy.max_account => {}
        _ => return DerivationVerdict::Unusual,
    }

    // The change component must equal 1 on change paths and 0 otherwise.
    let expected_change = if is_change_path { 1 } else { 0 };
    if path.component(BIP44_CHANGE_OFFSET) != Some(expected_change) {
        return DerivationVerdict::Unusual;
    }

    match path.component(BIP44_ADDRESS_INDEX_OFFSET) {
        Some(index) if index <= policy.max_address_index => DerivationVerdict::Normal,
        _ => DerivationVerdict::Unusual,
    }
}

/// Enforce the expected coin type for consumed UTXOs or a public address.
///
/// Lenient cases: enforcement disabled (policy coin type 0) is always
/// compliant; a path too short to carry a coin type, or one outside the
/// BIP44 purpose family, is compliant for public-key retrieval but needs
/// confirmation when signing.
pub fn enforce_bip44_coin_type(
    path: &Bip32Path,
    policy: &PathPolicy,
    for_pubkey: bool,
) -> CoinTypeCompliance {
    if policy.coin_type == 0 {
        return CoinTypeCompliance::Compliant;
    }

    let lenient = if for_pubkey {
        CoinTypeCompliance::Compliant
    } else {
        CoinTypeCompliance::NeedsConfirmation
    };

    if path.depth() < 2 {
        return lenient;
    }
    match path.hardened_index(BIP44_PURPOSE_OFFSET) {
        Some(purpose) if BIP44_PURPOSES.contains(&purpose) => {}
        _ => return lenient,
    }

    match path.hardened_index(BIP44_COIN_TYPE_OFFSET) {
        Some(ct) if ct == policy.coin_type || ct == policy.coin_type2 => {
            CoinTypeCompliance::Compliant
        }
        _ => CoinTypeCompliance::NeedsConfirmation,
    }
}
