//! Known-answer ciphertexts
//!
//! Every vector encrypts to the key with `D = 0x2a`. Hex strings are the
//! exact compact bytes; `der` is the matching structured record where given.

use eccrypt::prelude::CipherMode;

/// One known ciphertext and the plaintext it decrypts to.
#[derive(Debug, Clone, Copy)]
pub struct CiphertextVector {
    pub curve: &'static str,
    pub mode: CipherMode,
    pub plaintext: &'static [u8],
    pub compact: &'static str,
    pub der: Option<&'static str>,
}

/// Vectors with the ephemeral scalar fixed at 1, so C1 is the base point.
pub const BASE_POINT_VECTORS: &[CiphertextVector] = &[
    CiphertextVector {
        curve: "P-256",
        mode: CipherMode::C1C3C2,
        plaintext: b"AB",
        compact: "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
                  4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5\
                  d3b1387a6f653325f49d221cb79e1b5cb02a15179bf31d15a1cc1c3aed8763f3\
                  fac8",
        der: None,
    },
    CiphertextVector {
        curve: "P-256",
        mode: CipherMode::C1C2C3,
        plaintext: b"AB",
        compact: "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
                  4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5\
                  fac8\
                  d3b1387a6f653325f49d221cb79e1b5cb02a15179bf31d15a1cc1c3aed8763f3",
        der: None,
    },
    CiphertextVector {
        curve: "P-256",
        mode: CipherMode::C1C3C2,
        plaintext: b"",
        compact: "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
                  4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5\
                  18f8943809305aaad9b96b64c7738d646f0f238685f50faa6fabf51eb30ed3e7",
        der: None,
    },
    CiphertextVector {
        curve: "P-192",
        mode: CipherMode::C1C3C2,
        plaintext: b"AB",
        compact: "04188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012\
                  07192b95ffc8da78631011ed6b24cdd573f977a11e794811\
                  580db6a361f42c6ed31c3a7e6979c97cccbf84ecc3306eafb47c0d62ddccb199\
                  8f0f",
        der: None,
    },
    CiphertextVector {
        curve: "P-192",
        mode: CipherMode::C1C2C3,
        plaintext: b"AB",
        compact: "04188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012\
                  07192b95ffc8da78631011ed6b24cdd573f977a11e794811\
                  8f0f\
                  580db6a361f42c6ed31c3a7e6979c97cccbf84ecc3306eafb47c0d62ddccb199",
        der: None,
    },
    CiphertextVector {
        curve: "P-192",
        mode: CipherMode::C1C3C2,
        plaintext: b"",
        compact: "04188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012\
                  07192b95ffc8da78631011ed6b24cdd573f977a11e794811\
                  9cc913f7fcceb30926594f87d740b25daf280d0e81bb6e047437f39090f44d03",
        der: None,
    },
];

/// Vectors whose Y1 starts with a zero byte, so the DER INTEGER is shorter
/// than the field.
pub const LEADING_ZERO_VECTORS: &[CiphertextVector] = &[
    CiphertextVector {
        curve: "P-256",
        mode: CipherMode::C1C3C2,
        plaintext: b"AB",
        compact: "04986ae2506f1ff104d04230861d8f4b498f4bc4c6d009b30f7544dc129b82d28d\
                  003cccc0a6460e0ae328a4d97d3c7b61d86fc6289c189f2525110c441bb07e97\
                  cf5ff4e97360c4c9de3cab376a778c1e18e58c6ea04687021ca816de74b69483\
                  f09d",
        der: Some(
            "306a022100986ae2506f1ff104d04230861d8f4b498f4bc4c6d009b30f7544dc129b82d28d\
             021f3cccc0a6460e0ae328a4d97d3c7b61d86fc6289c189f2525110c441bb07e97\
             0420cf5ff4e97360c4c9de3cab376a778c1e18e58c6ea04687021ca816de74b69483\
             0402f09d",
        ),
    },
    CiphertextVector {
        curve: "P-192",
        mode: CipherMode::C1C3C2,
        plaintext: b"AB",
        compact: "04b61807df1ac28a360119d94c3b7c65268af156b734fd70b5\
                  000aff247d5f77247ae71b75dd1ffc217e8a0cb9431d5065\
                  dc0b2eabbc226039d5a78effa99af0cbc365172fa2564a0bd98d4908950b3b0b\
                  00b1",
        der: Some(
            "305a021900b61807df1ac28a360119d94c3b7c65268af156b734fd70b5\
             02170aff247d5f77247ae71b75dd1ffc217e8a0cb9431d5065\
             0420dc0b2eabbc226039d5a78effa99af0cbc365172fa2564a0bd98d4908950b3b0b\
             040200b1",
        ),
    },
];
