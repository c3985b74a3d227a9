//! Key material loading: PEM text in, typed key/certificate handles out.
//!
//! The announced PEM label picks the decode path. The three private-key
//! labels are three different DER encodings (PKCS#8, legacy PKCS#1,
//! legacy SEC1), normalized here into the same [`PrivateKey`] handle, so
//! downstream operations never see the difference.

use openssl::ec::EcKey;
use openssl::pkey::PKey;
use openssl::rsa::Rsa;

use crate::domain::cert::Certificate;
use crate::domain::key::{KeyFamily, PrivateKey, PublicKey};
use crate::domain::pem::{PemBlock, PemLabel};
use crate::infra::error::{CryptoError, CryptoResult};

/// Loader for PEM-encoded key material.
pub struct KeyMaterialLoader;

impl KeyMaterialLoader {
    /// Load a private key from PEM text, enforcing the expected family.
    ///
    /// # Errors
    /// `KeyParseError` when the label is not a private-key label, the body
    /// is malformed, the DER does not decode as the announced encoding, or
    /// the decoded key's family differs from `expected_family`.
    pub fn load_private_key(
        pem_text: &str,
        expected_family: KeyFamily,
    ) -> CryptoResult<PrivateKey> {
        let block = PemBlock::parse(pem_text)
            .map_err(|e| CryptoError::KeyParseError(e.to_string()))?;

        let pkey = match block.label() {
            PemLabel::Pkcs8PrivateKey => PKey::private_key_from_pkcs8(block.as_der())
                .map_err(|e| {
                    CryptoError::KeyParseError(format!("invalid PKCS#8 private key: {e}"))
                })?,
            PemLabel::RsaPrivateKey => {
                let rsa = Rsa::private_key_from_der(block.as_der()).map_err(|e| {
                    CryptoError::KeyParseError(format!("invalid PKCS#1 RSA private key: {e}"))
                })?;
                PKey::from_rsa(rsa).map_err(|e| {
                    CryptoError::KeyParseError(format!("cannot wrap RSA private key: {e}"))
                })?
            }
            PemLabel::EcPrivateKey => {
                let ec = EcKey::private_key_from_der(block.as_der()).map_err(|e| {
                    CryptoError::KeyParseError(format!("invalid SEC1 EC private key: {e}"))
                })?;
                PKey::from_ec_key(ec).map_err(|e| {
                    CryptoError::KeyParseError(format!("cannot wrap EC private key: {e}"))
                })?
            }
            other => {
                return Err(CryptoError::KeyParseError(format!(
                    "expected a private key block, found \"{}\"",
                    other.as_str()
                )))
            }
        };

        let key = PrivateKey::new(pkey)?;
        if key.family() != expected_family {
            return Err(CryptoError::KeyParseError(format!(
                "decoded a {} private key where {} was expected",
                key.family(),
                expected_family
            )));
        }

        log::debug!(
            "loaded {} private key from \"{}\" block",
            key.family(),
            block.label().as_str()
        );
        Ok(key)
    }

    /// Load a public key from PEM text (X.509 SubjectPublicKeyInfo).
    ///
    /// # Errors
    /// `KeyParseError` on any malformed input, `UnsupportedKeyTypeError`
    /// for key algorithms outside {RSA, ECC}.
    pub fn load_public_key(pem_text: &str) -> CryptoResult<PublicKey> {
        let block = PemBlock::parse(pem_text)
            .map_err(|e| CryptoError::KeyParseError(e.to_string()))?;

        if block.label() != PemLabel::PublicKey {
            return Err(CryptoError::KeyParseError(format!(
                "expected a \"PUBLIC KEY\" block, found \"{}\"",
                block.label().as_str()
            )));
        }

        let pkey = PKey::public_key_from_der(block.as_der()).map_err(|e| {
            CryptoError::KeyParseError(format!("invalid SubjectPublicKeyInfo: {e}"))
        })?;
        let key = PublicKey::new(pkey)?;
        log::debug!("loaded {} public key", key.family());
        Ok(key)
    }

    /// Load an X.509 certificate from PEM text.
    ///
    /// # Errors
    /// `CertificateParseError` on malformed or unsupported encodings.
    pub fn load_certificate(pem_text: &str) -> CryptoResult<Certificate> {
        let block = PemBlock::parse(pem_text)
            .map_err(|e| CryptoError::CertificateParseError(e.to_string()))?;

        if block.label() != PemLabel::Certificate {
            return Err(CryptoError::CertificateParseError(format!(
                "expected a \"CERTIFICATE\" block, found \"{}\"",
                block.label().as_str()
            )));
        }

        let certificate = Certificate::from_der(block.into_der())?;
        log::debug!(
            "loaded certificate subject={} serial={}",
            certificate.subject(),
            certificate.serial_number()
        );
        Ok(certificate)
    }
}
