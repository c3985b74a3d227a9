//! Key handles tagged with their algorithm family.
//!
//! Private and public keys are modeled as a tagged union over {RSA, ECC}
//! rather than a trait hierarchy: operations that only make sense for one
//! family (direct RSA encryption) match on the tag and reject the other
//! family explicitly instead of failing somewhere inside the provider.

use std::fmt;

use openssl::pkey::{Id, PKey, Private, Public};
use openssl::rsa::Rsa;

use crate::infra::error::{CryptoError, CryptoResult};

/// Algorithm family of a decoded key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    Rsa,
    Ecc,
}

impl KeyFamily {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFamily::Rsa => "RSA",
            KeyFamily::Ecc => "ECC",
        }
    }

    /// Map an openssl key id onto a family, for the key types this crate
    /// supports.
    pub(crate) fn from_pkey_id(id: Id) -> CryptoResult<Self> {
        match id {
            Id::RSA => Ok(KeyFamily::Rsa),
            Id::EC => Ok(KeyFamily::Ecc),
            other => Err(CryptoError::UnsupportedKeyTypeError(format!(
                "key algorithm {other:?} is not supported (expected RSA or EC)"
            ))),
        }
    }
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded private key, held immutably for the lifetime of the operation.
///
/// Never serialized back out; the material only leaves through signing and
/// decryption operations.
#[derive(Clone)]
pub struct PrivateKey {
    family: KeyFamily,
    pkey: PKey<Private>,
}

impl PrivateKey {
    pub(crate) fn new(pkey: PKey<Private>) -> CryptoResult<Self> {
        let family = KeyFamily::from_pkey_id(pkey.id())?;
        Ok(Self { family, pkey })
    }

    #[must_use]
    pub fn family(&self) -> KeyFamily {
        self.family
    }

    #[must_use]
    pub fn as_pkey(&self) -> &PKey<Private> {
        &self.pkey
    }

    /// Access the RSA component of this key.
    ///
    /// # Errors
    /// `UnsupportedKeyTypeError` when the key is not RSA.
    pub fn rsa(&self) -> CryptoResult<Rsa<Private>> {
        self.pkey.rsa().map_err(|_| {
            CryptoError::UnsupportedKeyTypeError(format!(
                "operation requires an RSA private key, got {}",
                self.family
            ))
        })
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material stays out of debug output.
        write!(f, "PrivateKey(family={})", self.family)
    }
}

/// Decoded public key, immutable and freely shareable.
#[derive(Clone)]
pub struct PublicKey {
    family: KeyFamily,
    pkey: PKey<Public>,
}

impl PublicKey {
    pub(crate) fn new(pkey: PKey<Public>) -> CryptoResult<Self> {
        let family = KeyFamily::from_pkey_id(pkey.id())?;
        Ok(Self { family, pkey })
    }

    #[must_use]
    pub fn family(&self) -> KeyFamily {
        self.family
    }

    #[must_use]
    pub fn as_pkey(&self) -> &PKey<Public> {
        &self.pkey
    }

    /// Access the RSA component of this key.
    ///
    /// # Errors
    /// `UnsupportedKeyTypeError` when the key is not RSA.
    pub fn rsa(&self) -> CryptoResult<Rsa<Public>> {
        self.pkey.rsa().map_err(|_| {
            CryptoError::UnsupportedKeyTypeError(format!(
                "operation requires an RSA public key, got {}",
                self.family
            ))
        })
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(family={})", self.family)
    }
}
