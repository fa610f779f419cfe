//! Endianness utility functions

/// Convert a u32 from native byte order to big-endian bytes
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Parse a big-endian unsigned integer of at most 4 bytes.
///
/// Shorter inputs are treated as left-padded with zeros. Returns `None` for
/// inputs longer than 4 bytes.
pub fn u32_from_be_slice(bytes: &[u8]) -> Option<u32> {
    if bytes.len() > 4 {
        return None;
    }
    let mut buf = [0u8; 4];
    buf[4 - bytes.len()..].copy_from_slice(bytes);
    Some(u32::from_be_bytes(buf))
}

/// Minimal big-endian encoding of a u32 (no leading zero bytes; zero encodes as `[0]`).
pub fn u32_to_be_minimal(value: u32) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take(3).take_while(|b| **b == 0).count();
    bytes[skip..].to_vec()
}
