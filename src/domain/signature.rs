//! Signature algorithm schemes and signature values.
//!
//! A [`SignatureScheme`] is resolved from a certificate's declared algorithm
//! identifier, never assumed by the caller: an RSA certificate advertises an
//! RSA-with-SHA variant, an ECC certificate an ECDSA-with-SHA variant, and
//! the scheme fixes both the digest and the key family a signing operation
//! must use.

use std::fmt;

use der::asn1::ObjectIdentifier;
use openssl::hash::MessageDigest;

use super::key::KeyFamily;

const SHA256_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");
const SHA384_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12");
const SHA512_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");
const ECDSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");
const ECDSA_WITH_SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");
const ECDSA_WITH_SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.4");

/// Supported signature schemes: {algorithm OID → (digest, key family)}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    Sha256WithRsa,
    Sha384WithRsa,
    Sha512WithRsa,
    EcdsaWithSha256,
    EcdsaWithSha384,
    EcdsaWithSha512,
}

/// Dispatch table keyed by algorithm identifier.
const SCHEME_TABLE: [(ObjectIdentifier, SignatureScheme); 6] = [
    (SHA256_WITH_RSA, SignatureScheme::Sha256WithRsa),
    (SHA384_WITH_RSA, SignatureScheme::Sha384WithRsa),
    (SHA512_WITH_RSA, SignatureScheme::Sha512WithRsa),
    (ECDSA_WITH_SHA256, SignatureScheme::EcdsaWithSha256),
    (ECDSA_WITH_SHA384, SignatureScheme::EcdsaWithSha384),
    (ECDSA_WITH_SHA512, SignatureScheme::EcdsaWithSha512),
];

impl SignatureScheme {
    /// Look up the scheme for a declared algorithm identifier. `None` for
    /// identifiers outside the supported set.
    #[must_use]
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        SCHEME_TABLE
            .iter()
            .find(|(known, _)| known == oid)
            .map(|(_, scheme)| *scheme)
    }

    /// Key family this scheme signs with.
    #[must_use]
    pub fn family(&self) -> KeyFamily {
        match self {
            SignatureScheme::Sha256WithRsa
            | SignatureScheme::Sha384WithRsa
            | SignatureScheme::Sha512WithRsa => KeyFamily::Rsa,
            SignatureScheme::EcdsaWithSha256
            | SignatureScheme::EcdsaWithSha384
            | SignatureScheme::EcdsaWithSha512 => KeyFamily::Ecc,
        }
    }

    /// Digest the scheme hashes the message with.
    #[must_use]
    pub fn digest(&self) -> MessageDigest {
        match self {
            SignatureScheme::Sha256WithRsa | SignatureScheme::EcdsaWithSha256 => {
                MessageDigest::sha256()
            }
            SignatureScheme::Sha384WithRsa | SignatureScheme::EcdsaWithSha384 => {
                MessageDigest::sha384()
            }
            SignatureScheme::Sha512WithRsa | SignatureScheme::EcdsaWithSha512 => {
                MessageDigest::sha512()
            }
        }
    }

    /// RFC 5912 algorithm name, as certificates print it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Sha256WithRsa => "sha256WithRSAEncryption",
            SignatureScheme::Sha384WithRsa => "sha384WithRSAEncryption",
            SignatureScheme::Sha512WithRsa => "sha512WithRSAEncryption",
            SignatureScheme::EcdsaWithSha256 => "ecdsa-with-SHA256",
            SignatureScheme::EcdsaWithSha384 => "ecdsa-with-SHA384",
            SignatureScheme::EcdsaWithSha512 => "ecdsa-with-SHA512",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw signature bytes tagged with the scheme that produced them.
///
/// For ECDSA the bytes are the ASN.1 DER encoded Ecdsa-Sig-Value. A value is
/// only meaningful relative to the exact message it was computed over.
#[derive(Clone, Eq, PartialEq)]
pub struct SignatureValue {
    scheme: SignatureScheme,
    bytes: Box<[u8]>,
}

impl SignatureValue {
    #[must_use]
    pub fn new(scheme: SignatureScheme, bytes: Vec<u8>) -> Self {
        Self {
            scheme,
            bytes: bytes.into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SignatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignatureValue(scheme={}, len={})",
            self.scheme,
            self.bytes.len()
        )
    }
}
