//! Key types for the hybrid scheme.
//!
//! Keys are plain values parameterised by their curve provider. A public key
//! always holds a validated point; a private key always holds a scalar in
//! `[1, N-2]` together with its derived public key.

use core::fmt;
use core::marker::PhantomData;

use eccrypt_algorithms::ec::codec::{decode_coordinate, encode_coordinate};
use eccrypt_api::error::{Error as ApiError, Result as ApiResult};
use eccrypt_api::{Curve, UNCOMPRESSED_POINT_MARKER};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error as PkeError, Result};

/// Recipient public key: a point `(X, Y)` on curve `C`.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey<C: Curve> {
    x: BigUint,
    y: BigUint,
    // 0x04 || X(F) || Y(F)
    encoded: Vec<u8>,
    _curve: PhantomData<C>,
}

impl<C: Curve> PublicKey<C> {
    /// Builds a public key from affine coordinates, rejecting points that are
    /// not on the curve.
    pub fn new(x: BigUint, y: BigUint) -> ApiResult<Self> {
        C::validate_point(&x, &y).map_err(|_| {
            ApiError::from(PkeError::InvalidKey("public point is not on the curve"))
        })?;

        let mut encoded = Vec::with_capacity(1 + 2 * C::FIELD_SIZE);
        encoded.push(UNCOMPRESSED_POINT_MARKER);
        encoded.extend_from_slice(&encode_coordinate(&x, C::FIELD_SIZE)?);
        encoded.extend_from_slice(&encode_coordinate(&y, C::FIELD_SIZE)?);

        Ok(Self {
            x,
            y,
            encoded,
            _curve: PhantomData,
        })
    }

    /// Parses `0x04 || X(F) || Y(F)`, or the bare `X(F) || Y(F)` form.
    pub fn from_uncompressed(bytes: &[u8]) -> ApiResult<Self> {
        let f = C::FIELD_SIZE;
        let coords = match bytes.len() {
            n if n == 1 + 2 * f && bytes[0] == UNCOMPRESSED_POINT_MARKER => &bytes[1..],
            n if n == 2 * f => bytes,
            _ => {
                return Err(PkeError::InvalidKey("public key is not an uncompressed point").into())
            }
        };
        Self::new(
            decode_coordinate(&coords[..f]),
            decode_coordinate(&coords[f..]),
        )
    }

    /// Returns `0x04 || X(F) || Y(F)`.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.encoded.clone()
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Name of the curve this key lives on.
    pub fn curve_name(&self) -> &'static str {
        C::NAME
    }
}

impl<C: Curve> AsRef<[u8]> for PublicKey<C> {
    fn as_ref(&self) -> &[u8] {
        &self.encoded
    }
}

impl<C: Curve> fmt::Debug for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

/// Recipient private key: scalar `D` plus its public key `D*G`.
///
/// The scalar is held as F big-endian bytes and wiped on drop.
#[derive(Clone)]
pub struct PrivateKey<C: Curve> {
    public: PublicKey<C>,
    d: Zeroizing<Vec<u8>>,
}

impl<C: Curve> PrivateKey<C> {
    /// Builds a private key from its scalar.
    ///
    /// Accepts `1 <= d <= N-2`; `0` and anything from `N-1` upwards are
    /// rejected with `InvalidKey`.
    pub fn from_scalar(d: &BigUint) -> ApiResult<Self> {
        let upper = C::order() - 2u8;
        if d.bits() == 0 || *d > upper {
            return Err(PkeError::InvalidKey("private scalar out of range").into());
        }

        let point = C::base_point_mul(d)?;
        Ok(Self {
            public: PublicKey::new(point.x, point.y)?,
            d: Zeroizing::new(encode_coordinate(d, C::FIELD_SIZE)?),
        })
    }

    /// Builds a private key from big-endian scalar bytes of any length.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::from_scalar(&decode_coordinate(bytes))
    }

    /// Generates a private key with `D` uniform over `[1, N-2]` (negligible bias).
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<Self> {
        let d = random_scalar::<C, R>(rng, &(C::order() - 2u8))?;
        Self::from_scalar(&d)
    }

    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public
    }

    /// Returns `D` left-padded to F bytes.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.d.clone()
    }

    pub(crate) fn scalar(&self) -> BigUint {
        decode_coordinate(&self.d)
    }
}

impl<C: Curve> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .field("d", &"<redacted>")
            .finish()
    }
}

/// Draws `BIT_SIZE/8 + 8` random bytes and maps them into `[1, bound]` as
/// `(r mod bound) + 1`.
///
/// The extra 64 bits keep the modular bias negligible.
pub(crate) fn random_scalar<C: Curve, R: RngCore + CryptoRng>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint> {
    let mut buf = Zeroizing::new(vec![0u8; C::BIT_SIZE / 8 + 8]);
    rng.try_fill_bytes(&mut buf)?;
    Ok(BigUint::from_bytes_be(&buf) % bound + 1u8)
}
