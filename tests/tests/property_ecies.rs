//! Property-based tests for the hybrid scheme and its wire formats

use eccrypt::prelude::*;
use eccrypt_tests::{flip_bit, seeded_rng};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = CipherMode> {
    prop_oneof![Just(CipherMode::C1C3C2), Just(CipherMode::C1C2C3)]
}

/// Syntactically valid compact bytes for field size `f`; the point need not
/// be on any curve.
fn compact_bytes(f: usize) -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(any::<u8>(), 2 * f + 32),
        prop::collection::vec(any::<u8>(), 0..300),
    )
        .prop_map(|(fixed, payload)| {
            let mut out = vec![0x04];
            out.extend(fixed);
            out.extend(payload);
            out
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn p256_roundtrip(
        seed in any::<u64>(),
        mode in mode(),
        plaintext in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = EccryptP256::keypair(&mut rng).unwrap();

        let ct = EccryptP256::encrypt(&pk, &plaintext, mode, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), 97 + plaintext.len());

        let decrypted = EccryptP256::decrypt(&sk, &ct, mode).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn p192_roundtrip(
        seed in any::<u64>(),
        mode in mode(),
        plaintext in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = EccryptP192::keypair(&mut rng).unwrap();

        let ct = EccryptP192::encrypt(&pk, &plaintext, mode, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), 81 + plaintext.len());

        let decrypted = EccryptP192::decrypt(&sk, &ct, mode).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn structured_roundtrip(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = EccryptP256::keypair(&mut rng).unwrap();

        let der = EccryptP256::encrypt_structured(&pk, &plaintext, &mut rng).unwrap();
        let decrypted = EccryptP256::decrypt_structured(&sk, &der).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn tampering_after_the_point_is_detected(
        seed in any::<u64>(),
        mode in mode(),
        plaintext in prop::collection::vec(any::<u8>(), 1..128),
        position in any::<prop::sample::Index>()
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = EccryptP256::keypair(&mut rng).unwrap();
        let mut ct = EccryptP256::encrypt(&pk, &plaintext, mode, &mut rng).unwrap();

        // any bit in C2 or C3
        let covered_bits = (ct.len() - 65) * 8;
        flip_bit(&mut ct, 65 * 8 + position.index(covered_bits));

        let err = EccryptP256::decrypt(&sk, &ct, mode).unwrap_err();
        prop_assert!(err.is_integrity_failure());
    }

    #[test]
    fn wrong_key_never_decrypts(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, _) = EccryptP192::keypair(&mut rng).unwrap();
        let (_, other) = EccryptP192::keypair(&mut rng).unwrap();

        let ct = EccryptP192::encrypt(&pk, &plaintext, CipherMode::C1C3C2, &mut rng).unwrap();
        prop_assert!(EccryptP192::decrypt(&other, &ct, CipherMode::C1C3C2).is_err());
    }
}

proptest! {
    #[test]
    fn der_transcoding_is_lossless_p256(compact in compact_bytes(32)) {
        let der = to_structured(&compact, 32).unwrap();
        prop_assert_eq!(to_compact(&der, 32).unwrap(), compact);
    }

    #[test]
    fn der_transcoding_is_lossless_p192(compact in compact_bytes(24)) {
        let der = to_structured(&compact, 24).unwrap();
        prop_assert_eq!(to_compact(&der, 24).unwrap(), compact);
    }

    #[test]
    fn der_parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let _ = to_compact(&bytes, 32);
        let _ = StructuredCiphertext::from_der(&bytes);
    }

    #[test]
    fn truncated_der_is_rejected(compact in compact_bytes(32), cut in any::<prop::sample::Index>()) {
        let der = to_structured(&compact, 32).unwrap();
        let len = cut.index(der.len());
        prop_assert!(to_compact(&der[..len], 32).is_err());
    }
}
