//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use crate::types::CipherMode;
use rand::{CryptoRng, RngCore};

/// Trait for Public Key Encryption schemes with a caller-tracked ciphertext layout.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey;

    /// Ciphertext type produced by the PKE scheme.
    /// This is typically a `Vec<u8>` holding the compact wire bytes.
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Returns the PKE algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt. May be empty.
    /// * `mode` - Layout of the produced ciphertext.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        mode: CipherMode,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// `mode` must be the mode used at encryption time; it cannot be
    /// recovered from the bytes. On any failure no plaintext is returned.
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &[u8],
        mode: CipherMode,
    ) -> Result<Vec<u8>>;
}
