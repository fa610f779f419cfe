//! NIST P-256 curve provider
//!
//! Curve equation: y² = x³ - 3x + b over 𝔽ₚ with p = 2²²⁴(2³² − 1) + 2¹⁹² + 2⁹⁶ − 1.

/// Size of a P-256 field element in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Order n of the P-256 base point, big-endian.
pub const P256_ORDER: [u8; P256_FIELD_ELEMENT_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

/// NIST P-256 (secp256r1) curve provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct P256;

impl_curve_provider! {
    curve: P256,
    backend: p256,
    name: "P-256",
    field_size: P256_FIELD_ELEMENT_SIZE,
    bit_size: 256,
    order: P256_ORDER,
}
