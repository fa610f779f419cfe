//! Fixed-width big-endian encoding of curve coordinates

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// Encodes `v` as exactly `width` big-endian bytes, left-padded with zeros.
///
/// Fails when `v` needs more than `width` bytes.
pub fn encode_coordinate(v: &BigUint, width: usize) -> Result<Vec<u8>> {
    let len = v.bits().div_ceil(8) as usize;
    if len > width {
        return Err(Error::Length {
            context: "coordinate encoding",
            expected: width,
            actual: len,
        });
    }

    let mut out = vec![0u8; width];
    if len > 0 {
        out[width - len..].copy_from_slice(&v.to_bytes_be());
    }
    Ok(out)
}

/// Parses big-endian bytes as an unsigned integer.
pub fn decode_coordinate(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
