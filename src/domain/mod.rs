//! Foundational domain types.
//!
//! Provides strongly-typed representations of the key material this crate
//! operates on:
//! - PEM blocks with exact-delimiter labels
//! - Private/public key handles tagged with their algorithm family
//! - Certificates with their declared signature algorithm
//! - Signature schemes and scheme-tagged signature values
//!
//! Nothing in this layer performs I/O or orchestration; the service layer
//! composes these types into the load/encrypt/verify operations.

pub mod cert;
pub mod key;
pub mod pem;
pub mod signature;

pub use cert::Certificate;
pub use key::{KeyFamily, PrivateKey, PublicKey};
pub use pem::{PemBlock, PemError, PemLabel};
pub use signature::{SignatureScheme, SignatureValue};
