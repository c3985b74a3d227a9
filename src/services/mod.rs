//! Service layer module root.
//! Loading, encryption and signature services over the domain types.

pub mod cipher;
pub mod loader;
pub mod verifier;

pub use cipher::{AsymmetricCipher, KeyPairCipher, PKCS1_PADDING_OVERHEAD};
pub use loader::KeyMaterialLoader;
pub use verifier::SignatureVerifier;
