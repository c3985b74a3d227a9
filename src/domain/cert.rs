//! Certificate handle exposing the declared signature algorithm and the
//! embedded public key.

use std::fmt;

use der::asn1::ObjectIdentifier;
use der::Decode;
use x509_cert::Certificate as X509Certificate;

use crate::infra::error::{CryptoError, CryptoResult};

use super::key::PublicKey;
use super::signature::SignatureScheme;

/// Parsed X.509 certificate, held immutably alongside its DER encoding.
#[derive(Clone)]
pub struct Certificate {
    der: Box<[u8]>,
    parsed: X509Certificate,
}

impl Certificate {
    /// Parse a DER-encoded X.509 certificate.
    ///
    /// # Errors
    /// `CertificateParseError` when the bytes are not a valid certificate
    /// structure.
    pub fn from_der(der: Vec<u8>) -> CryptoResult<Self> {
        let parsed = X509Certificate::from_der(&der).map_err(|e| {
            CryptoError::CertificateParseError(format!("invalid X.509 structure: {e}"))
        })?;
        Ok(Self {
            der: der.into_boxed_slice(),
            parsed,
        })
    }

    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// The signature algorithm identifier the certificate declares.
    #[must_use]
    pub fn signature_algorithm_oid(&self) -> &ObjectIdentifier {
        &self.parsed.signature_algorithm.oid
    }

    /// Resolve the declared algorithm identifier to a supported scheme.
    ///
    /// # Errors
    /// `SignatureError` when the identifier is outside the supported set.
    pub fn signature_scheme(&self) -> CryptoResult<SignatureScheme> {
        let oid = self.signature_algorithm_oid();
        SignatureScheme::from_oid(oid).ok_or_else(|| {
            CryptoError::SignatureError(format!("unsupported signature algorithm {oid}"))
        })
    }

    /// The public key embedded in the certificate.
    ///
    /// # Errors
    /// `CertificateParseError` when the embedded SubjectPublicKeyInfo cannot
    /// be decoded, `UnsupportedKeyTypeError` for key algorithms outside
    /// {RSA, ECC}.
    pub fn public_key(&self) -> CryptoResult<PublicKey> {
        let x509 = openssl::x509::X509::from_der(&self.der).map_err(|e| {
            CryptoError::CertificateParseError(format!("certificate rejected by provider: {e}"))
        })?;
        let pkey = x509.public_key().map_err(|e| {
            CryptoError::CertificateParseError(format!("cannot extract public key: {e}"))
        })?;
        PublicKey::new(pkey)
    }

    /// Subject distinguished name, RFC 4514 rendering.
    #[must_use]
    pub fn subject(&self) -> String {
        self.parsed.tbs_certificate.subject.to_string()
    }

    /// Certificate serial number as lowercase hex.
    #[must_use]
    pub fn serial_number(&self) -> String {
        hex::encode(self.parsed.tbs_certificate.serial_number.as_bytes())
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Certificate(subject={}, serial={}, len={})",
            self.subject(),
            self.serial_number(),
            self.der.len()
        )
    }
}
