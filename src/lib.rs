//! # BLS Signatures
//!
//! This crate implements deterministic BLS (Boneh–Lynn–Shacham) signatures
//! over the BLS12-377 curve. Signatures and hashed messages live in G1,
//! public keys in G2. Messages are mapped to G1 with a SHAKE-256
//! try-and-increment map, and a signature is checked by evaluating a single
//! product of two pairings against the target-group identity.
//!
//! ```rust
//! use bls_sig::{hash_to_curve::try_and_increment::SHAKE_HASH_TO_G1, PrivateKey};
//!
//! let hasher = &*SHAKE_HASH_TO_G1;
//! let sk = PrivateKey::generate().expect("os rng");
//! let sig = sk.sign(b"hello", hasher).expect("signing");
//! assert!(sk.to_public().verify(b"hello", &sig, hasher).expect("verification"));
//! ```

/// BLS signing
pub(crate) mod bls;
pub use bls::{PrivateKey, PublicKey, Signature, PUBLIC_KEY_BYTES, SCALAR_BYTES, SIGNATURE_BYTES};

/// Hashing to curve utilities
pub mod hash_to_curve;
pub use hash_to_curve::HashToCurve;

/// Useful hash functions
pub mod hashers;
pub use hashers::XOF;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use thiserror::Error;

/// Convenience result alias
pub type BlsResult<T> = std::result::Result<T, BLSError>;

#[derive(Debug, Error)]
/// Error type
pub enum BLSError {
    /// The operating system refused to provide entropy. Key generation never
    /// falls back to a weaker source.
    #[error("system randomness unavailable: {0}")]
    RandomnessUnavailable(#[from] rand::Error),
    /// Secret key bytes had the wrong length or encoded a scalar outside
    /// [0, r).
    #[error("invalid secret key encoding")]
    InvalidSecretKey,
    /// Public key bytes did not decode to a point in the G2 prime-order
    /// subgroup.
    #[error("malformed public key: {0}")]
    MalformedPublicKey(ark_serialize::SerializationError),
    /// Signature bytes did not decode to a point in the G1 prime-order
    /// subgroup.
    #[error("malformed signature: {0}")]
    MalformedSignature(ark_serialize::SerializationError),
    /// The try-and-increment loop gave up. With a correctly implemented
    /// curve backend the odds of seeing this are about 2^-256.
    #[error("could not construct a curve point after {0} attempts")]
    CurveConstructionExhausted(usize),
    /// Error while writing a point encoding
    #[error("{0}")]
    SerializationError(#[from] ark_serialize::SerializationError),
}
