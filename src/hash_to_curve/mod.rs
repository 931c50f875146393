/// Implementation of the `MapToGroup` algorithm (Paragraph
/// 3.3) of [this paper](https://link.springer.com/content/pdf/10.1007/3-540-45682-1_30.pdf)
///
/// This method hashes the message with an XOF and interprets the digest as a
/// candidate x-coordinate. If the candidate can be completed to an elliptic
/// curve point, it returns. If not, it increments the candidate and tries
/// again.
///
/// **This algorithm is not constant time**.
///
/// # Examples
///
/// Hashing the data requires instantiating a hasher and importing the
/// `HashToCurve` trait:
///
/// ```rust
/// use bls_sig::hash_to_curve::{try_and_increment::SHAKE_HASH_TO_G1, HashToCurve};
///
/// let hasher = &*SHAKE_HASH_TO_G1;
/// let hash = hasher.hash(&b"some_data"[..]).expect("should not fail");
/// ```
pub mod try_and_increment;
pub use try_and_increment::TryAndIncrement;

use crate::BLSError;

use ark_ff::PrimeField;

/// Trait for hashing arbitrary data to a group element on an elliptic curve
pub trait HashToCurve {
    /// The type of the curve point produced.
    type Output;

    /// Given a message, produces a hash of it which is a curve point.
    /// Deterministic: the same message always maps to the same point.
    fn hash(&self, message: &[u8]) -> Result<Self::Output, BLSError>;
}

/// Number of bytes needed to hold one base-field element.
pub(crate) fn field_byte_length<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize + 7) / 8
}
