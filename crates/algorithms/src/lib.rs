//! Primitives for the eccrypt hybrid encryption scheme
//!
//! This crate provides the building blocks the scheme core is assembled from:
//!
//! - fixed-width big-endian encoding of curve coordinates ([`ec::codec`])
//! - curve providers for NIST P-192 and P-256 ([`ec::P192`], [`ec::P256`])
//! - the counter-mode SHA-256 keystream generator ([`kdf`])

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Elliptic Curve providers and coordinate codec
pub mod ec;
pub use ec::codec::{decode_coordinate, encode_coordinate};
#[cfg(feature = "p192")]
pub use ec::P192;
#[cfg(feature = "p256")]
pub use ec::P256;

// KDF implementations
pub mod kdf;
pub use kdf::{CounterKdf, Sha256Kdf, DIGEST_SIZE};
