//! Hybrid elliptic-curve encryption: ECDH + counter-mode SHA-256 keystream + hash tag.
//!
//! Encryption of a message `M` to public key `Q` on curve `C`:
//!
//! 1. draw an ephemeral scalar `k` in `[1, N-1]`
//! 2. `(X1, Y1) = k*G`, `(X2, Y2) = k*Q`
//! 3. `keystream = KDF(len(M), X2 || Y2)`; an all-zero keystream restarts from 1
//! 4. `C2 = M xor keystream`
//! 5. `C3 = SHA-256(X2 || M || Y2)`
//! 6. emit `0x04 || X1 || Y1 || C3 || C2` (C1C3C2) or `0x04 || X1 || Y1 || C2 || C3` (C1C2C3)
//!
//! The tag binds the plaintext, not the ciphertext. All coordinates are
//! written as exactly F bytes.

use core::marker::PhantomData;

use eccrypt_algorithms::ec::codec::{decode_coordinate, encode_coordinate};
use eccrypt_algorithms::error::Error as PrimitiveError;
use eccrypt_algorithms::kdf::Sha256Kdf;
use eccrypt_api::error::{Error as ApiError, Result as ApiResult};
use eccrypt_api::{CipherMode, Curve, Pke, TAG_SIZE, UNCOMPRESSED_POINT_MARKER};
use eccrypt_internal::constant_time::{ct_eq, xor_in_place};
use log::{debug, trace, warn};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error as PkeError, Result};
use crate::keys::{random_scalar, PrivateKey, PublicKey};
use crate::wire::{self, min_compact_len};

/// Maximum number of ephemeral scalars tried before encryption gives up on
/// an all-zero keystream.
pub const MAX_ENCRYPT_ATTEMPTS: usize = 16;

/// The hybrid scheme over curve `C`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Eccrypt<C: Curve> {
    _curve: PhantomData<C>,
}

#[cfg(feature = "p192")]
pub type EccryptP192 = Eccrypt<eccrypt_algorithms::P192>;
#[cfg(feature = "p256")]
pub type EccryptP256 = Eccrypt<eccrypt_algorithms::P256>;

/// Fixed-width encodings of the shared point, wiped on drop.
struct SharedSecret {
    x2: Zeroizing<Vec<u8>>,
    y2: Zeroizing<Vec<u8>>,
}

impl SharedSecret {
    fn from_point<C: Curve>(x: &BigUint, y: &BigUint) -> Result<Self> {
        Ok(Self {
            x2: Zeroizing::new(encode_coordinate(x, C::FIELD_SIZE)?),
            y2: Zeroizing::new(encode_coordinate(y, C::FIELD_SIZE)?),
        })
    }

    fn keystream(&self, len: usize) -> core::result::Result<Zeroizing<Vec<u8>>, PrimitiveError> {
        Sha256Kdf::derive(len, &[self.x2.as_slice(), self.y2.as_slice()])
    }

    fn tag(&self, plaintext: &[u8]) -> [u8; TAG_SIZE] {
        let digest = Sha256::new()
            .chain_update(&*self.x2)
            .chain_update(plaintext)
            .chain_update(&*self.y2)
            .finalize();
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&digest);
        tag
    }
}

/// Runs `attempt` until it returns something other than a degenerate shared
/// secret, at most `max_attempts` times.
fn retry_degenerate<T, F>(max_attempts: usize, mut attempt: F) -> Result<T>
where
    F: FnMut(usize) -> Result<T>,
{
    for n in 1..=max_attempts {
        match attempt(n) {
            Err(PkeError::DegenerateSharedSecret { .. }) => {
                debug!("all-zero keystream on attempt {}, drawing a new ephemeral scalar", n);
            }
            other => return other,
        }
    }
    warn!("giving up after {} degenerate shared secrets", max_attempts);
    Err(PkeError::DegenerateSharedSecret {
        attempts: max_attempts,
    })
}

impl<C: Curve> Eccrypt<C> {
    /// Encrypts with a caller-chosen ephemeral scalar `k`.
    ///
    /// Returns `DegenerateSharedSecret { attempts: 1 }` if the keystream is
    /// all zero for this `k`.
    pub(crate) fn encrypt_with_scalar(
        pk: &PublicKey<C>,
        plaintext: &[u8],
        k: &BigUint,
        mode: CipherMode,
    ) -> Result<Vec<u8>> {
        let c1 = C::base_point_mul(k)?;
        let shared = C::mul(pk.x(), pk.y(), k)
            .map_err(|_| PkeError::InvalidKey("recipient point rejected by the curve"))?;
        let secret = SharedSecret::from_point::<C>(&shared.x, &shared.y)?;

        let keystream = secret.keystream(plaintext.len()).map_err(|e| match e {
            PrimitiveError::DegenerateOutput { .. } => {
                PkeError::DegenerateSharedSecret { attempts: 1 }
            }
            other => PkeError::Primitive(other),
        })?;

        let mut c2 = plaintext.to_vec();
        xor_in_place(&mut c2, &keystream);
        let c3 = secret.tag(plaintext);

        let f = C::FIELD_SIZE;
        let mut out = Vec::with_capacity(min_compact_len(f) + c2.len());
        out.push(UNCOMPRESSED_POINT_MARKER);
        out.extend_from_slice(&encode_coordinate(&c1.x, f)?);
        out.extend_from_slice(&encode_coordinate(&c1.y, f)?);
        match mode {
            CipherMode::C1C3C2 => {
                out.extend_from_slice(&c3);
                out.extend_from_slice(&c2);
            }
            CipherMode::C1C2C3 => {
                out.extend_from_slice(&c2);
                out.extend_from_slice(&c3);
            }
        }
        trace!(
            "{} {} ciphertext: {} bytes for {} bytes of plaintext",
            C::NAME,
            mode,
            out.len(),
            plaintext.len()
        );
        Ok(out)
    }

    fn encrypt_inner<R: RngCore + CryptoRng>(
        pk: &PublicKey<C>,
        plaintext: &[u8],
        mode: CipherMode,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let bound = C::order() - 1u8;
        retry_degenerate(MAX_ENCRYPT_ATTEMPTS, |_| {
            let k = random_scalar::<C, R>(rng, &bound)?;
            Self::encrypt_with_scalar(pk, plaintext, &k, mode)
        })
    }

    fn decrypt_inner(sk: &PrivateKey<C>, ciphertext: &[u8], mode: CipherMode) -> Result<Vec<u8>> {
        let f = C::FIELD_SIZE;
        if ciphertext.len() < min_compact_len(f) {
            return Err(PkeError::MalformedInput("ciphertext shorter than the fixed fields"));
        }
        if ciphertext[0] != UNCOMPRESSED_POINT_MARKER {
            return Err(PkeError::MalformedInput("missing 0x04 marker"));
        }

        let body = &ciphertext[1..];
        let (c1, rest) = body.split_at(2 * f);
        let (c3, c2) = match mode {
            CipherMode::C1C3C2 => rest.split_at(TAG_SIZE),
            CipherMode::C1C2C3 => {
                let (c2, c3) = rest.split_at(rest.len() - TAG_SIZE);
                (c3, c2)
            }
        };

        let x1 = decode_coordinate(&c1[..f]);
        let y1 = decode_coordinate(&c1[f..]);
        let shared = C::mul(&x1, &y1, &sk.scalar()).map_err(|e| match e {
            ApiError::InvalidPoint { .. } => {
                PkeError::MalformedInput("ephemeral point is not on the curve")
            }
            other => PkeError::Api(other),
        })?;
        let secret = SharedSecret::from_point::<C>(&shared.x, &shared.y)?;

        let keystream = secret
            .keystream(c2.len())
            .map_err(|_| PkeError::DecryptionFailed("all-zero keystream"))?;

        let mut plaintext = c2.to_vec();
        xor_in_place(&mut plaintext, &keystream);

        if !ct_eq(secret.tag(&plaintext), c3) {
            plaintext.zeroize();
            return Err(PkeError::IntegrityFailure);
        }
        Ok(plaintext)
    }

    /// Encrypts in the C1C3C2 layout and re-expresses the result as the DER record.
    pub fn encrypt_structured<R: RngCore + CryptoRng>(
        pk: &PublicKey<C>,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Vec<u8>> {
        let compact = Self::encrypt_inner(pk, plaintext, CipherMode::C1C3C2, rng)?;
        Ok(wire::to_structured(&compact, C::FIELD_SIZE)?)
    }

    /// Decrypts a DER record produced by [`Eccrypt::encrypt_structured`].
    pub fn decrypt_structured(sk: &PrivateKey<C>, der: &[u8]) -> ApiResult<Vec<u8>> {
        let compact = wire::to_compact(der, C::FIELD_SIZE)?;
        Ok(Self::decrypt_inner(sk, &compact, CipherMode::C1C3C2)?)
    }

    /// Compact C1C3C2 bytes to the DER record, for this curve's field size.
    pub fn to_structured(compact: &[u8]) -> ApiResult<Vec<u8>> {
        Ok(wire::to_structured(compact, C::FIELD_SIZE)?)
    }

    /// DER record to compact C1C3C2 bytes, for this curve's field size.
    pub fn to_compact(der: &[u8]) -> ApiResult<Vec<u8>> {
        Ok(wire::to_compact(der, C::FIELD_SIZE)?)
    }
}

impl<C: Curve> Pke for Eccrypt<C> {
    type PublicKey = PublicKey<C>;
    type SecretKey = PrivateKey<C>;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "ECIES-SHA256-CTR-KDF"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let sk = PrivateKey::<C>::generate(rng)?;
        Ok((sk.public_key().clone(), sk))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        mode: CipherMode,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        Ok(Self::encrypt_inner(pk_recipient, plaintext, mode, rng)?)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &[u8],
        mode: CipherMode,
    ) -> ApiResult<Vec<u8>> {
        Ok(Self::decrypt_inner(sk_recipient, ciphertext, mode)?)
    }
}
