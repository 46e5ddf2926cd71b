//! BIP32 derivation path wire format.

use std::fmt;

use crate::error::PathError;

/// Most components a path may declare.
pub const MAX_BIP32_PATH: usize = 10;

/// Top bit of a component, marking hardened derivation.
pub const HARDENED: u32 = 0x8000_0000;

/// A decoded BIP32 derivation path.
///
/// The wire form is one length byte (component count) followed by that many
/// big-endian 32-bit words. Decoding is strict: an over-length declaration
/// or a truncated body is rejected before any component is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bip32Path {
    components: Vec<u32>,
}

impl Bip32Path {
    /// Decode a length-prefixed path from its wire form.
    pub fn parse(bytes: &[u8]) -> Result<Self, PathError> {
        let count = *bytes.first().ok_or(PathError::Empty)? as usize;
        if count > MAX_BIP32_PATH {
            return Err(PathError::TooManyComponents(count as u8));
        }
        let body = &bytes[1..];
        if body.len() < count * 4 {
            return Err(PathError::Truncated {
                expected: count * 4,
                actual: body.len(),
            });
        }
        let components = body[..count * 4]
            .chunks_exact(4)
            .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
            .collect();
        Ok(Bip32Path { components })
    }

    /// Build a path from raw components (hardened bit included).
    ///
    /// Returns `None` when more than [`MAX_BIP32_PATH`] components are given.
    pub fn from_components(components: &[u32]) -> Option<Self> {
        if components.len() > MAX_BIP32_PATH {
            return None;
        }
        Some(Bip32Path { components: components.to_vec() })
    }

    /// Re-encode to the wire form: length byte + big-endian words.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.components.len() * 4);
        out.push(self.components.len() as u8);
        for &c in &self.components {
            out.extend_from_slice(&c.to_be_bytes());
        }
        out
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Whether the path has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The raw components, hardened bit included.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Component at `level` with the hardened bit stripped, or `None` when
    /// the path is shorter or the component is not hardened.
    pub fn hardened_index(&self, level: usize) -> Option<u32> {
        let c = *self.components.get(level)?;
        if c & HARDENED != 0 {
            Some(c & !HARDENED)
        } else {
            None
        }
    }

    /// Raw component at `level`, hardened bit included.
    pub fn component(&self, level: usize) -> Option<u32> {
        self.components.get(level).copied()
    }
}

impl fmt::Display for Bip32Path {
    /// Render as `44'/175'/0'/0/0`, apostrophes marking hardened levels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            if c & HARDENED != 0 {
                write!(f, "{}'", c & !HARDENED)?;
            } else {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
