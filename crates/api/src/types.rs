//! Core types shared across the eccrypt crates

use core::fmt;

/// Byte length of the integrity tag (SHA-256 digest size).
pub const TAG_SIZE: usize = 32;

/// Marker byte prefixed to every compact ciphertext (uncompressed-point convention).
pub const UNCOMPRESSED_POINT_MARKER: u8 = 0x04;

/// Layout of a compact ciphertext.
///
/// The layout is not recorded in the wire bytes. Callers must carry the mode
/// used at encryption time and pass the same value to decryption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CipherMode {
    /// `0x04 || X1 || Y1 || Tag || CipherText`
    #[default]
    C1C3C2,
    /// `0x04 || X1 || Y1 || CipherText || Tag`
    C1C2C3,
}

impl CipherMode {
    /// Returns the mode name.
    pub fn name(self) -> &'static str {
        match self {
            CipherMode::C1C3C2 => "C1C3C2",
            CipherMode::C1C2C3 => "C1C2C3",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Affine point coordinates as returned by a curve provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffineCoordinates {
    pub x: num_bigint::BigUint,
    pub y: num_bigint::BigUint,
}

impl AffineCoordinates {
    pub fn new(x: num_bigint::BigUint, y: num_bigint::BigUint) -> Self {
        Self { x, y }
    }
}
