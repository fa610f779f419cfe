//! Shared fixtures for the eccrypt integration tests
pub mod vectors;

use eccrypt::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Private scalar used by every known-answer vector.
pub const VECTOR_PRIVATE_SCALAR: u8 = 0x2a;

/// Deterministic RNG for reproducible test runs.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// The recipient key the known-answer vectors were produced for.
pub fn vector_key<C: Curve>() -> PrivateKey<C> {
    PrivateKey::<C>::from_bytes(&[VECTOR_PRIVATE_SCALAR])
        .expect("0x2a is a valid scalar on every supported curve")
}

/// Flips one bit of `bytes` at absolute bit position `bit`.
pub fn flip_bit(bytes: &mut [u8], bit: usize) {
    bytes[bit / 8] ^= 1 << (bit % 8);
}
