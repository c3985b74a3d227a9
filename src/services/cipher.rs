//! Direct asymmetric encryption of short messages.
//!
//! RSA-only: plaintext is encrypted directly under the public key with
//! PKCS#1 v1.5 padding, so the payload is bounded by the modulus size minus
//! the padding overhead. There is no chunking and no hybrid scheme; inputs
//! over the bound are rejected, never truncated. Ciphertext crosses the
//! transport boundary as standard Base64 text.

use base64::Engine;
use openssl::rsa::Padding;

use crate::domain::key::{KeyFamily, PrivateKey, PublicKey};
use crate::infra::error::{CryptoError, CryptoResult};

/// PKCS#1 v1.5 reserves 11 bytes of every block for padding.
pub const PKCS1_PADDING_OVERHEAD: usize = 11;

/// Asymmetric cipher over loaded key handles.
pub struct AsymmetricCipher;

impl AsymmetricCipher {
    /// Largest plaintext, in bytes, this key can encrypt in one block.
    ///
    /// # Errors
    /// `UnsupportedKeyTypeError` when the key is not RSA.
    pub fn max_message_len(public_key: &PublicKey) -> CryptoResult<usize> {
        let rsa = public_key.rsa()?;
        Ok(rsa.size() as usize - PKCS1_PADDING_OVERHEAD)
    }

    /// Encrypt `plain` directly under `public_key` (RSA, PKCS#1 v1.5).
    ///
    /// # Errors
    /// `UnsupportedKeyTypeError` for non-RSA keys, `MessageTooLargeError`
    /// when `plain` exceeds the key's block capacity.
    pub fn encrypt(public_key: &PublicKey, plain: &[u8]) -> CryptoResult<Vec<u8>> {
        if public_key.family() != KeyFamily::Rsa {
            return Err(CryptoError::UnsupportedKeyTypeError(format!(
                "direct encryption is RSA-only, got an {} key",
                public_key.family()
            )));
        }

        let rsa = public_key.rsa()?;
        let max = rsa.size() as usize - PKCS1_PADDING_OVERHEAD;
        if plain.len() > max {
            return Err(CryptoError::MessageTooLargeError {
                size: plain.len(),
                max,
            });
        }

        let mut ciphertext = vec![0u8; rsa.size() as usize];
        let written = rsa
            .public_encrypt(plain, &mut ciphertext, Padding::PKCS1)
            .map_err(|e| CryptoError::CryptographicError(format!("RSA encryption failed: {e}")))?;
        ciphertext.truncate(written);

        log::debug!(
            "encrypted {} plaintext bytes into {} ciphertext bytes",
            plain.len(),
            ciphertext.len()
        );
        Ok(ciphertext)
    }

    /// Decrypt `ciphertext` with `private_key`.
    ///
    /// A padding or key mismatch is a hard `DecryptionError`, never an empty
    /// result.
    ///
    /// # Errors
    /// `UnsupportedKeyTypeError` for non-RSA keys, `DecryptionError` on
    /// wrong key, corrupted ciphertext or padding mismatch.
    pub fn decrypt(private_key: &PrivateKey, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        if private_key.family() != KeyFamily::Rsa {
            return Err(CryptoError::UnsupportedKeyTypeError(format!(
                "direct decryption is RSA-only, got an {} key",
                private_key.family()
            )));
        }

        let rsa = private_key.rsa()?;
        let mut plain = vec![0u8; rsa.size() as usize];
        let written = rsa
            .private_decrypt(ciphertext, &mut plain, Padding::PKCS1)
            .map_err(|e| {
                CryptoError::DecryptionError(format!(
                    "PKCS#1 decryption failed (wrong key or corrupted ciphertext): {e}"
                ))
            })?;
        plain.truncate(written);
        Ok(plain)
    }

    /// Encrypt UTF-8 text and return standard Base64 (no line wrapping).
    ///
    /// # Errors
    /// As [`AsymmetricCipher::encrypt`].
    pub fn encrypt_to_text(public_key: &PublicKey, plain_text: &str) -> CryptoResult<String> {
        let ciphertext = Self::encrypt(public_key, plain_text.as_bytes())?;
        Ok(base64::engine::general_purpose::STANDARD.encode(ciphertext))
    }

    /// Decode Base64 ciphertext, decrypt it and interpret the result as
    /// UTF-8 text.
    ///
    /// Base64 failures surface as `EncodingError`, kept distinct from the
    /// `DecryptionError` a cryptographic mismatch produces.
    ///
    /// # Errors
    /// `EncodingError` on malformed Base64, otherwise as
    /// [`AsymmetricCipher::decrypt`]; non-UTF-8 plaintext is a
    /// `DecryptionError`.
    pub fn decrypt_from_text(private_key: &PrivateKey, base64_text: &str) -> CryptoResult<String> {
        let ciphertext =
            base64::engine::general_purpose::STANDARD.decode(base64_text.trim().as_bytes())?;
        let plain = Self::decrypt(private_key, &ciphertext)?;
        String::from_utf8(plain).map_err(|_| {
            CryptoError::DecryptionError("decrypted bytes are not valid UTF-8".to_string())
        })
    }
}

/// A bound RSA key pair for repeated encrypt/decrypt round trips.
///
/// Holds one public and one private handle; both must be RSA. The handles
/// are immutable, so a context can be shared freely across callers.
#[derive(Debug)]
pub struct KeyPairCipher {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl KeyPairCipher {
    /// Bind a public/private handle pair.
    ///
    /// # Errors
    /// `UnsupportedKeyTypeError` when either handle is not RSA.
    pub fn new(public_key: PublicKey, private_key: PrivateKey) -> CryptoResult<Self> {
        if public_key.family() != KeyFamily::Rsa || private_key.family() != KeyFamily::Rsa {
            return Err(CryptoError::UnsupportedKeyTypeError(format!(
                "key pair cipher requires RSA keys, got {} public / {} private",
                public_key.family(),
                private_key.family()
            )));
        }
        Ok(Self {
            public_key,
            private_key,
        })
    }

    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    #[must_use]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Encrypt UTF-8 text under the bound public key.
    ///
    /// # Errors
    /// As [`AsymmetricCipher::encrypt_to_text`].
    pub fn encrypt_to_text(&self, plain_text: &str) -> CryptoResult<String> {
        AsymmetricCipher::encrypt_to_text(&self.public_key, plain_text)
    }

    /// Decrypt Base64 ciphertext with the bound private key.
    ///
    /// # Errors
    /// As [`AsymmetricCipher::decrypt_from_text`].
    pub fn decrypt_from_text(&self, base64_text: &str) -> CryptoResult<String> {
        AsymmetricCipher::decrypt_from_text(&self.private_key, base64_text)
    }
}
