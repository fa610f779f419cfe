//! Counter-mode hash-based keystream generator
//!
//! For an output of `L` bytes the generator hashes
//! `inputs[0] || inputs[1] || ... || counter` for a 4-byte big-endian counter
//! starting at 1, appending each digest (the last one truncated) until `L`
//! bytes are produced.
//!
//! A non-empty output consisting only of zero bytes is reported as
//! [`Error::DegenerateOutput`] rather than returned, since XOR with it would
//! leave the plaintext unchanged.
//!
//! ## Example usage
//!
//! ```
//! use eccrypt_algorithms::kdf::Sha256Kdf;
//!
//! let x2 = [0x11u8; 32];
//! let y2 = [0x22u8; 32];
//! let keystream = Sha256Kdf::derive(45, &[&x2, &y2]).unwrap();
//! assert_eq!(keystream.len(), 45);
//! assert_eq!(*keystream, *Sha256Kdf::derive(45, &[&x2, &y2]).unwrap());
//! ```

use core::marker::PhantomData;

use eccrypt_internal::constant_time::ct_is_zero;
use eccrypt_internal::endian::u32_to_be_bytes;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Digest size of the hash used for keystream blocks and integrity tags.
pub const DIGEST_SIZE: usize = 32;

/// Counter-mode KDF over the hash function `D`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterKdf<D: Digest> {
    _hash: PhantomData<D>,
}

/// The KDF instantiation used by the scheme.
pub type Sha256Kdf = CounterKdf<Sha256>;

impl<D: Digest> CounterKdf<D> {
    /// Derives exactly `len` keystream bytes from the concatenation of `inputs`.
    ///
    /// Returns [`Error::DegenerateOutput`] when `len > 0` and every derived
    /// byte is zero, and [`Error::Parameter`] when `len` would overflow the
    /// 32-bit block counter.
    pub fn derive(len: usize, inputs: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        let block_size = <D as Digest>::output_size();
        let blocks = len.div_ceil(block_size);
        if blocks > u32::MAX as usize {
            return Err(Error::param("len", "exceeds the KDF counter range"));
        }

        let mut out = Zeroizing::new(Vec::with_capacity(blocks * block_size));
        for counter in 1..=blocks as u32 {
            let mut hasher = D::new();
            for input in inputs {
                hasher.update(input);
            }
            hasher.update(u32_to_be_bytes(counter));
            out.extend_from_slice(&hasher.finalize());
        }
        out.truncate(len);

        if len > 0 && ct_is_zero(&out) {
            return Err(Error::DegenerateOutput {
                algorithm: "counter-mode KDF",
            });
        }
        Ok(out)
    }
}
