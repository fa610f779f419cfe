//! NIST P-192 curve provider
//!
//! Curve equation: y² = x³ - 3x + b over 𝔽ₚ with p = 2¹⁹² − 2⁶⁴ − 1.
//! This is the curve the compact wire format was first defined for (F = 24).

/// Size of a P-192 field element in bytes
pub const P192_FIELD_ELEMENT_SIZE: usize = 24;

/// Order n of the P-192 base point, big-endian.
pub const P192_ORDER: [u8; P192_FIELD_ELEMENT_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x99, 0xde, 0xf8, 0x36,
    0x14, 0x6b, 0xc9, 0xb1, 0xb4, 0xd2, 0x28, 0x31,
];

/// NIST P-192 (secp192r1) curve provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct P192;

impl_curve_provider! {
    curve: P192,
    backend: p192,
    name: "P-192",
    field_size: P192_FIELD_ELEMENT_SIZE,
    bit_size: 192,
    order: P192_ORDER,
}
