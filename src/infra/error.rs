//! Error types for key loading, encryption and signature operations.

use thiserror::Error;

/// Result type for all cryptographic operations in this crate
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Error taxonomy for key material handling and cryptographic operations.
///
/// Parse failures, encoding failures and cryptographic mismatches stay
/// distinct: fixing input formatting is a different remediation than
/// re-pairing keys.
#[derive(Error, Debug, miette::Diagnostic)]
pub enum CryptoError {
    #[error("key parse error: {0}")]
    KeyParseError(String),

    #[error("certificate parse error: {0}")]
    CertificateParseError(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("message too large: {size} bytes exceeds maximum of {max}")]
    MessageTooLargeError { size: usize, max: usize },

    #[error("decryption error: {0}")]
    DecryptionError(String),

    #[error("unsupported key type: {0}")]
    UnsupportedKeyTypeError(String),

    #[error("signature error: {0}")]
    SignatureError(String),

    #[error("cryptographic error: {0}")]
    CryptographicError(String),
}

impl From<base64::DecodeError> for CryptoError {
    fn from(error: base64::DecodeError) -> Self {
        CryptoError::EncodingError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CryptoError::KeyParseError("unknown PEM label".to_string());
        assert_eq!(error.to_string(), "key parse error: unknown PEM label");

        let error = CryptoError::MessageTooLargeError { size: 502, max: 501 };
        assert_eq!(
            error.to_string(),
            "message too large: 502 bytes exceeds maximum of 501"
        );
    }

    #[test]
    fn test_base64_error_conversion() {
        let decode_err = base64::DecodeError::InvalidPadding;
        let converted: CryptoError = decode_err.into();
        assert!(matches!(converted, CryptoError::EncodingError(_)));
    }
}
