//! End-to-end tests through the facade crate

use eccrypt::prelude::*;
use eccrypt_tests::{flip_bit, seeded_rng};
use rand::rngs::OsRng;

fn full_flow<C: Curve>() {
    let mut rng = OsRng;
    let (pk, sk) = Eccrypt::<C>::keypair(&mut rng).unwrap();
    let message = b"The quick brown fox jumps over the lazy dog";

    for mode in [CipherMode::C1C3C2, CipherMode::C1C2C3] {
        let ct = Eccrypt::<C>::encrypt(&pk, message, mode, &mut rng).unwrap();
        assert_eq!(ct.len(), 1 + 2 * C::FIELD_SIZE + 32 + message.len());
        assert_eq!(Eccrypt::<C>::decrypt(&sk, &ct, mode).unwrap(), message);
    }

    let der = Eccrypt::<C>::encrypt_structured(&pk, message, &mut rng).unwrap();
    assert_eq!(Eccrypt::<C>::decrypt_structured(&sk, &der).unwrap(), message);
}

#[test]
fn test_full_flow_p192() {
    full_flow::<P192>();
}

#[test]
fn test_full_flow_p256() {
    full_flow::<P256>();
}

#[test]
fn test_keys_survive_serialization() {
    let mut rng = seeded_rng(5);
    let (pk, sk) = EccryptP256::keypair(&mut rng).unwrap();

    let pk2 = PublicKey::<P256>::from_uncompressed(&pk.to_uncompressed()).unwrap();
    let sk2 = PrivateKey::<P256>::from_bytes(&sk.to_bytes()).unwrap();
    assert_eq!(pk, pk2);
    assert_eq!(sk2.public_key(), &pk);

    let ct = EccryptP256::encrypt(&pk2, b"persisted keys", CipherMode::C1C2C3, &mut rng).unwrap();
    assert_eq!(
        EccryptP256::decrypt(&sk2, &ct, CipherMode::C1C2C3).unwrap(),
        b"persisted keys"
    );
}

#[test]
fn test_keys_do_not_cross_curves() {
    let mut rng = seeded_rng(6);
    let (pk192, _) = EccryptP192::keypair(&mut rng).unwrap();
    let (pk256, _) = EccryptP256::keypair(&mut rng).unwrap();

    assert!(PublicKey::<P256>::from_uncompressed(&pk192.to_uncompressed()).is_err());
    assert!(PublicKey::<P192>::from_uncompressed(&pk256.to_uncompressed()).is_err());
}

#[test]
fn test_public_key_from_coordinates() {
    let g = P256::base_point().unwrap();
    let pk = PublicKey::<P256>::new(g.x.clone(), g.y.clone()).unwrap();
    assert_eq!(pk.curve_name(), "P-256");

    let err = PublicKey::<P256>::new(g.x, g.y + 1u8).unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));
}

#[test]
fn test_cross_curve_ciphertext_is_malformed_or_rejected() {
    let mut rng = seeded_rng(7);
    let (pk192, _) = EccryptP192::keypair(&mut rng).unwrap();
    let (_, sk256) = EccryptP256::keypair(&mut rng).unwrap();

    // a short P-192 ciphertext does not even cover the P-256 fixed fields
    let ct = EccryptP192::encrypt(&pk192, b"x", CipherMode::C1C3C2, &mut rng).unwrap();
    assert!(EccryptP256::decrypt(&sk256, &ct, CipherMode::C1C3C2)
        .unwrap_err()
        .is_malformed());
}

#[test]
fn test_every_tag_bit_is_checked() {
    let mut rng = seeded_rng(8);
    let (pk, sk) = EccryptP192::keypair(&mut rng).unwrap();
    let ct = EccryptP192::encrypt(&pk, b"tag coverage", CipherMode::C1C3C2, &mut rng).unwrap();

    let tag_start = 1 + 2 * P192::FIELD_SIZE;
    for bit in tag_start * 8..(tag_start + 32) * 8 {
        let mut tampered = ct.clone();
        flip_bit(&mut tampered, bit);
        assert!(EccryptP192::decrypt(&sk, &tampered, CipherMode::C1C3C2)
            .unwrap_err()
            .is_integrity_failure());
    }
}

#[test]
fn test_structured_record_fields() {
    let mut rng = seeded_rng(9);
    let (pk, _) = EccryptP256::keypair(&mut rng).unwrap();
    let compact = EccryptP256::encrypt(&pk, b"fields", CipherMode::C1C3C2, &mut rng).unwrap();
    let der = EccryptP256::to_structured(&compact).unwrap();

    let record = StructuredCiphertext::from_der(&der).unwrap();
    assert_eq!(record.x1, BigUint::from_bytes_be(&compact[1..33]));
    assert_eq!(record.y1, BigUint::from_bytes_be(&compact[33..65]));
    assert_eq!(record.tag, compact[65..97]);
    assert_eq!(record.ciphertext, compact[97..]);
    assert_eq!(record.ciphertext.len(), b"fields".len());
}

#[test]
fn test_error_conversion_preserves_kind() {
    let mut rng = seeded_rng(10);
    let (_, sk) = EccryptP256::keypair(&mut rng).unwrap();
    let err = EccryptP256::decrypt_structured(&sk, &[0x30, 0x00]).unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("ECIES"));
}
