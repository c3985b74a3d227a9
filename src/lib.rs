//! Keyseal
//!
//! Asymmetric encryption of short messages and key/certificate pair
//! validation over PEM-encoded key material, for both RSA and ECC.
//!
//! Two independent capabilities share only the key handle types:
//! - [`AsymmetricCipher`] encrypts/decrypts byte payloads under an RSA key
//!   pair, with Base64 text at the transport boundary.
//! - [`SignatureVerifier`] proves a private key and a certificate match by
//!   signing a message and verifying the signature against the certificate's
//!   embedded public key, with the algorithm taken from the certificate.
//!
//! All operations are synchronous and stateless between calls; handles are
//! immutable after loading and safe to share across threads.

pub mod domain;
pub mod infra;
pub mod services;

pub use domain::cert::Certificate;
pub use domain::key::{KeyFamily, PrivateKey, PublicKey};
pub use domain::pem::{PemBlock, PemError, PemLabel};
pub use domain::signature::{SignatureScheme, SignatureValue};
pub use infra::error::{CryptoError, CryptoResult};
pub use services::cipher::{AsymmetricCipher, KeyPairCipher, PKCS1_PADDING_OVERHEAD};
pub use services::loader::KeyMaterialLoader;
pub use services::verifier::SignatureVerifier;

/// Message signed during key-pair validation. Any bytes would do; the
/// signature is discarded after verification.
const PAIRING_PROBE: &[u8] = b"Any String";

/// Verify that a PEM-encoded private key and certificate form a matching
/// pair.
///
/// The expected key family is derived from the certificate's declared
/// signature algorithm, so the same call handles RSA and ECC material.
///
/// # Errors
/// `CertificateParseError`/`KeyParseError` on malformed input (including a
/// key whose family contradicts the certificate's algorithm),
/// `SignatureError` for unsupported algorithm identifiers.
pub fn verify_key_pair(cert_pem: &str, key_pem: &str) -> CryptoResult<bool> {
    let certificate = KeyMaterialLoader::load_certificate(cert_pem)?;
    let scheme = certificate.signature_scheme()?;
    log::info!(
        "validating key pair for {} (certificate algorithm {})",
        certificate.subject(),
        scheme
    );

    let private_key = KeyMaterialLoader::load_private_key(key_pem, scheme.family())?;
    SignatureVerifier::sign_and_verify(&certificate, &private_key, PAIRING_PROBE)
}
