//! # eccrypt
//!
//! Hybrid public-key encryption over NIST prime curves: an ECDH shared point
//! feeds a counter-mode SHA-256 keystream, and a SHA-256 tag over the
//! plaintext provides integrity.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eccrypt = "0.3"
//! ```
//!
//! ```
//! use eccrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let (pk, sk) = EccryptP256::keypair(&mut rng)?;
//!
//! let ct = EccryptP256::encrypt(&pk, b"hello", CipherMode::C1C3C2, &mut rng)?;
//! assert_eq!(EccryptP256::decrypt(&sk, &ct, CipherMode::C1C3C2)?, b"hello");
//!
//! let der = EccryptP256::to_structured(&ct)?;
//! assert_eq!(EccryptP256::to_compact(&der)?, ct);
//! # Ok::<(), eccrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `p192` (default): the NIST P-192 curve provider
//! - `p256` (default): the NIST P-256 curve provider
//! - `full`: all of the above plus a `rand` re-export
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`eccrypt-api`]: Error type, traits and shared types
//! - [`eccrypt-internal`]: Constant-time and byte-order helpers
//! - [`eccrypt-algorithms`]: Curve providers, coordinate codec and the KDF
//! - [`eccrypt-pke`]: The hybrid scheme, key types and wire transcoding

// Core re-exports (always available)
pub use eccrypt_algorithms as algorithms;
pub use eccrypt_api as api;
pub use eccrypt_internal as internal;
pub use eccrypt_pke as pke;

#[cfg(feature = "full")]
pub use rand;

/// Common imports for eccrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and types
    pub use crate::api::{AffineCoordinates, CipherMode, Curve, Pke};

    // Coordinates and secret bytes as they appear in the key API
    pub use num_bigint::BigUint;
    pub use zeroize::Zeroizing;

    // Scheme, keys and wire transcoding
    pub use crate::pke::{
        to_compact, to_structured, Eccrypt, PrivateKey, PublicKey, StructuredCiphertext,
        MAX_ENCRYPT_ATTEMPTS,
    };

    #[cfg(feature = "p192")]
    pub use crate::algorithms::P192;
    #[cfg(feature = "p192")]
    pub use crate::pke::EccryptP192;

    #[cfg(feature = "p256")]
    pub use crate::algorithms::P256;
    #[cfg(feature = "p256")]
    pub use crate::pke::EccryptP256;
}
