//! Elliptic Curve providers
//!
//! Each provider is a zero-sized marker type implementing [`eccrypt_api::Curve`]
//! over the RustCrypto arithmetic backend for that curve. Integers cross the
//! provider boundary as [`num_bigint::BigUint`] so the scheme core stays
//! independent of any particular backend.
//!
//! Points received from callers are always checked against the curve equation
//! before any multiplication.

pub mod codec;

/// Implements [`eccrypt_api::Curve`] for a marker type backed by a RustCrypto
/// prime-order curve crate.
#[cfg(any(feature = "p192", feature = "p256"))]
macro_rules! impl_curve_provider {
    (
        curve: $curve:ident,
        backend: $backend:ident,
        name: $name:expr,
        field_size: $field_size:expr,
        bit_size: $bit_size:expr,
        order: $order:expr $(,)?
    ) => {
        use ::$backend::elliptic_curve::ff::PrimeField;
        use ::$backend::elliptic_curve::group::Curve as _;
        use ::$backend::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
        use ::$backend::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};
        use eccrypt_api::{AffineCoordinates, Result as ApiResult};
        use num_bigint::BigUint;
        use zeroize::Zeroizing;

        use $crate::ec::codec::{decode_coordinate, encode_coordinate};
        use $crate::error::{Error, Result};

        impl $curve {
            fn scalar(k: &BigUint) -> Result<Scalar> {
                if k.bits() == 0 || *k >= <Self as eccrypt_api::Curve>::order() {
                    return Err(Error::param("scalar", "must be in [1, N-1]"));
                }
                let bytes = Zeroizing::new(encode_coordinate(k, $field_size)?);
                let repr = FieldBytes::clone_from_slice(&bytes);
                Option::<Scalar>::from(Scalar::from_repr(repr))
                    .ok_or_else(|| Error::param("scalar", "must be in [1, N-1]"))
            }

            fn affine(x: &BigUint, y: &BigUint) -> Result<AffinePoint> {
                let not_on_curve = |_| Error::Point {
                    curve: $name,
                    details: "coordinate wider than the field",
                };
                let x = encode_coordinate(x, $field_size).map_err(not_on_curve)?;
                let y = encode_coordinate(y, $field_size).map_err(not_on_curve)?;
                let encoded = EncodedPoint::from_affine_coordinates(
                    &FieldBytes::clone_from_slice(&x),
                    &FieldBytes::clone_from_slice(&y),
                    false,
                );
                Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)).ok_or(
                    Error::Point {
                        curve: $name,
                        details: "not on curve",
                    },
                )
            }

            fn coordinates(point: ProjectivePoint) -> Result<AffineCoordinates> {
                let encoded = point.to_affine().to_encoded_point(false);
                match (encoded.x(), encoded.y()) {
                    (Some(x), Some(y)) => Ok(AffineCoordinates::new(
                        decode_coordinate(x.as_slice()),
                        decode_coordinate(y.as_slice()),
                    )),
                    _ => Err(Error::Point {
                        curve: $name,
                        details: "point at infinity",
                    }),
                }
            }
        }

        impl eccrypt_api::Curve for $curve {
            const NAME: &'static str = $name;
            const FIELD_SIZE: usize = $field_size;
            const BIT_SIZE: usize = $bit_size;

            fn order() -> BigUint {
                BigUint::from_bytes_be(&$order)
            }

            fn base_point_mul(k: &BigUint) -> ApiResult<AffineCoordinates> {
                let k = Self::scalar(k)?;
                Ok(Self::coordinates(ProjectivePoint::GENERATOR * k)?)
            }

            fn mul(x: &BigUint, y: &BigUint, k: &BigUint) -> ApiResult<AffineCoordinates> {
                let point = ProjectivePoint::from(Self::affine(x, y)?);
                let k = Self::scalar(k)?;
                Ok(Self::coordinates(point * k)?)
            }

            fn validate_point(x: &BigUint, y: &BigUint) -> ApiResult<()> {
                Self::affine(x, y)?;
                Ok(())
            }
        }
    };
}

#[cfg(feature = "p192")]
pub mod p192;
#[cfg(feature = "p256")]
pub mod p256;

#[cfg(feature = "p192")]
pub use self::p192::P192;
#[cfg(feature = "p256")]
pub use self::p256::P256;
