//! Hybrid elliptic-curve public key encryption for the eccrypt library.
//!
//! The scheme combines an ECDH shared point, a counter-mode SHA-256
//! keystream and a SHA-256 tag over the plaintext. Ciphertexts come in two
//! compact layouts (C1C3C2 and C1C2C3) and can be re-expressed as a DER
//! record.

pub mod ecies;
pub mod error;
pub mod keys;
pub mod wire;

// Re-export key items
pub use ecies::{Eccrypt, MAX_ENCRYPT_ATTEMPTS};
#[cfg(feature = "p192")]
pub use ecies::EccryptP192;
#[cfg(feature = "p256")]
pub use ecies::EccryptP256;
pub use error::{Error, Result};
pub use keys::{PrivateKey, PublicKey};
pub use wire::{to_compact, to_structured, StructuredCiphertext};
