//! Key-pair validation by sign-then-verify.
//!
//! The signature algorithm comes from the certificate's declared algorithm
//! identifier, never from the caller or from the private key's family alone.
//! `sign_and_verify` runs the whole protocol in one synchronous call: resolve
//! the scheme, sign the message with the private key, verify the produced
//! signature against the certificate's embedded public key.

use openssl::sign::{Signer, Verifier};

use crate::domain::cert::Certificate;
use crate::domain::key::PrivateKey;
use crate::domain::signature::{SignatureScheme, SignatureValue};
use crate::infra::error::{CryptoError, CryptoResult};

/// Sign/verify service for key-pair validation.
pub struct SignatureVerifier;

impl SignatureVerifier {
    /// Sign `message` with `private_key` under `scheme`.
    ///
    /// # Errors
    /// `SignatureError` when the key family does not match the scheme or
    /// the provider rejects the signing operation.
    pub fn sign(
        scheme: SignatureScheme,
        private_key: &PrivateKey,
        message: &[u8],
    ) -> CryptoResult<SignatureValue> {
        if private_key.family() != scheme.family() {
            return Err(CryptoError::SignatureError(format!(
                "{} requires an {} private key, got {}",
                scheme,
                scheme.family(),
                private_key.family()
            )));
        }

        let mut signer = Signer::new(scheme.digest(), private_key.as_pkey())
            .map_err(|e| CryptoError::SignatureError(format!("cannot initialize signer: {e}")))?;
        let bytes = signer
            .sign_oneshot_to_vec(message)
            .map_err(|e| CryptoError::SignatureError(format!("signing failed: {e}")))?;

        log::debug!("signed {} message bytes with {}", message.len(), scheme);
        Ok(SignatureValue::new(scheme, bytes))
    }

    /// Verify `signature` over `message` against the certificate's embedded
    /// public key, under the certificate's declared scheme.
    ///
    /// Returns `Ok(false)` for a signature that does not verify, including
    /// structurally broken signature bytes; a mismatch is never reported as
    /// an unrelated error.
    ///
    /// # Errors
    /// `SignatureError` when the certificate declares an unsupported
    /// algorithm, the signature was produced under a different scheme, or
    /// the embedded key family contradicts the declared scheme.
    pub fn verify(
        certificate: &Certificate,
        signature: &SignatureValue,
        message: &[u8],
    ) -> CryptoResult<bool> {
        let scheme = certificate.signature_scheme()?;
        if signature.scheme() != scheme {
            return Err(CryptoError::SignatureError(format!(
                "signature was produced under {}, certificate declares {}",
                signature.scheme(),
                scheme
            )));
        }

        let public_key = certificate.public_key()?;
        if public_key.family() != scheme.family() {
            return Err(CryptoError::SignatureError(format!(
                "certificate declares {} but embeds an {} public key",
                scheme,
                public_key.family()
            )));
        }

        let mut verifier = Verifier::new(scheme.digest(), public_key.as_pkey())
            .map_err(|e| CryptoError::SignatureError(format!("cannot initialize verifier: {e}")))?;
        match verifier.verify_oneshot(signature.as_slice(), message) {
            Ok(valid) => Ok(valid),
            Err(e) => {
                // Structurally invalid signature bytes; a rejection, not a failure.
                log::debug!("verification rejected: {e}");
                Ok(false)
            }
        }
    }

    /// Sign `message` with `private_key` and verify the result against
    /// `certificate`, using the certificate's declared signature algorithm.
    ///
    /// Returns `true` only when the signature verifies, i.e. when the
    /// private key and the certificate's public key form a matching pair.
    ///
    /// # Errors
    /// `SignatureError` for structural problems: unsupported algorithm
    /// identifier, or a key family that contradicts the declared scheme.
    pub fn sign_and_verify(
        certificate: &Certificate,
        private_key: &PrivateKey,
        message: &[u8],
    ) -> CryptoResult<bool> {
        let scheme = certificate.signature_scheme()?;
        let signature = Self::sign(scheme, private_key, message)?;
        let valid = Self::verify(certificate, &signature, message)?;

        log::info!(
            "{} signature {}",
            scheme,
            if valid { "verified" } else { "rejected" }
        );
        Ok(valid)
    }
}
