//! Key/certificate pair validation across both key families.
//!
//! The ECC fixtures are a SEC1 private key with an ecdsa-with-SHA256
//! certificate; the RSA fixtures a PKCS#1 private key with a
//! sha256WithRSAEncryption certificate. The verifier must treat the
//! certificate's declared algorithm as the single source of truth.

mod common;

use common::fixture;
use keyseal::{
    verify_key_pair, CryptoError, KeyFamily, KeyMaterialLoader, SignatureVerifier,
};

const MESSAGE: &[u8] = b"Any String";

#[test]
fn ecc_pair_validates() {
    let cert = KeyMaterialLoader::load_certificate(&fixture("ecc_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(&fixture("ecc_key.pem"), KeyFamily::Ecc)
        .expect("key");

    let valid = SignatureVerifier::sign_and_verify(&cert, &key, MESSAGE).expect("sign+verify");
    assert!(valid, "matching ECC pair must verify");
}

#[test]
fn rsa_pair_validates() {
    let cert = KeyMaterialLoader::load_certificate(&fixture("rsa_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(&fixture("rsa_key.pem"), KeyFamily::Rsa)
        .expect("key");

    let valid = SignatureVerifier::sign_and_verify(&cert, &key, MESSAGE).expect("sign+verify");
    assert!(valid, "matching RSA pair must verify");
}

#[test]
fn rsa_key_against_ecc_certificate_is_a_signature_error() {
    let cert = KeyMaterialLoader::load_certificate(&fixture("ecc_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(&fixture("rsa_key.pem"), KeyFamily::Rsa)
        .expect("key");

    let err = SignatureVerifier::sign_and_verify(&cert, &key, MESSAGE).unwrap_err();
    match err {
        CryptoError::SignatureError(msg) => {
            assert!(msg.contains("ECC") && msg.contains("RSA"), "names both families: {msg}");
        }
        other => panic!("expected SignatureError, got {other:?}"),
    }
}

#[test]
fn ecc_key_against_rsa_certificate_is_a_signature_error() {
    let cert = KeyMaterialLoader::load_certificate(&fixture("rsa_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(&fixture("ecc_key.pem"), KeyFamily::Ecc)
        .expect("key");

    let err = SignatureVerifier::sign_and_verify(&cert, &key, MESSAGE).unwrap_err();
    assert!(matches!(err, CryptoError::SignatureError(_)));
}

#[test]
fn same_family_mismatched_pair_verifies_false() {
    // RSA-4096 PKCS#8 key vs. the (unrelated) RSA certificate: same family,
    // same scheme, not a pair.
    let cert = KeyMaterialLoader::load_certificate(&fixture("rsa_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(
        &fixture("private_key_rsa_4096_pkcs8.pem"),
        KeyFamily::Rsa,
    )
    .expect("key");

    let valid = SignatureVerifier::sign_and_verify(&cert, &key, MESSAGE).expect("sign+verify");
    assert!(!valid, "non-matching pair must verify false, not error");
}

#[test]
fn tampered_message_verifies_false() {
    let cert = KeyMaterialLoader::load_certificate(&fixture("ecc_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(&fixture("ecc_key.pem"), KeyFamily::Ecc)
        .expect("key");
    let scheme = cert.signature_scheme().expect("scheme");

    let signature = SignatureVerifier::sign(scheme, &key, MESSAGE).expect("sign");
    let valid =
        SignatureVerifier::verify(&cert, &signature, b"Another String").expect("verify");
    assert!(!valid);
}

#[test]
fn corrupted_signature_verifies_false() {
    let cert = KeyMaterialLoader::load_certificate(&fixture("rsa_cert.pem")).expect("cert");
    let key = KeyMaterialLoader::load_private_key(&fixture("rsa_key.pem"), KeyFamily::Rsa)
        .expect("key");
    let scheme = cert.signature_scheme().expect("scheme");

    let signature = SignatureVerifier::sign(scheme, &key, MESSAGE).expect("sign");
    let mut bytes = signature.as_slice().to_vec();
    bytes[0] ^= 0xFF;
    let corrupted = keyseal::SignatureValue::new(scheme, bytes);

    let valid = SignatureVerifier::verify(&cert, &corrupted, MESSAGE).expect("verify");
    assert!(!valid, "corrupted signature must be rejected, not error");
}

#[test]
fn garbage_signature_bytes_verify_false_for_ecdsa() {
    // ECDSA signatures are DER structures; garbage bytes must still come
    // back as a rejection rather than an error.
    let cert = KeyMaterialLoader::load_certificate(&fixture("ecc_cert.pem")).expect("cert");
    let scheme = cert.signature_scheme().expect("scheme");
    let garbage = keyseal::SignatureValue::new(scheme, vec![0xFFu8; 70]);

    let valid = SignatureVerifier::verify(&cert, &garbage, MESSAGE).expect("verify");
    assert!(!valid);
}

mod convenience {
    use super::*;

    #[test]
    fn verify_key_pair_for_both_families() {
        assert!(
            verify_key_pair(&fixture("ecc_cert.pem"), &fixture("ecc_key.pem"))
                .expect("ECC pair")
        );
        assert!(
            verify_key_pair(&fixture("rsa_cert.pem"), &fixture("rsa_key.pem"))
                .expect("RSA pair")
        );
    }

    #[test]
    fn verify_key_pair_rejects_swapped_family() {
        // The RSA key cannot satisfy the ECC certificate's declared family.
        let err = verify_key_pair(&fixture("ecc_cert.pem"), &fixture("rsa_key.pem"))
            .unwrap_err();
        assert!(matches!(err, CryptoError::KeyParseError(_)));
    }
}
