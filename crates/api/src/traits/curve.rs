//! Trait definition for elliptic curve providers.

use crate::error::Result;
use crate::types::AffineCoordinates;
use num_bigint::BigUint;

/// Scalar-multiplication interface to a short Weierstrass curve of prime order.
///
/// Implementors are zero-sized markers; all operations are associated
/// functions so a curve can be used as a type parameter.
pub trait Curve: Clone + Copy + core::fmt::Debug + Default + Send + Sync + 'static {
    /// Curve name, e.g. "P-256".
    const NAME: &'static str;

    /// Byte length of one field element (F).
    const FIELD_SIZE: usize;

    /// Bit length of the field prime.
    const BIT_SIZE: usize;

    /// Order N of the base point.
    fn order() -> BigUint;

    /// Computes `k * G`. `k` must be in `[1, N-1]`.
    fn base_point_mul(k: &BigUint) -> Result<AffineCoordinates>;

    /// Computes `k * (x, y)`. Fails with `InvalidPoint` when `(x, y)` is not on
    /// the curve.
    fn mul(x: &BigUint, y: &BigUint, k: &BigUint) -> Result<AffineCoordinates>;

    /// Checks that `(x, y)` is a point on the curve.
    fn validate_point(x: &BigUint, y: &BigUint) -> Result<()>;

    /// The base point G.
    fn base_point() -> Result<AffineCoordinates> {
        Self::base_point_mul(&BigUint::from(1u8))
    }
}
