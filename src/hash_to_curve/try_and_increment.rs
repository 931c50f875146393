use super::{field_byte_length, HashToCurve};
use crate::hashers::{Shake256Xof, XOF};
use crate::{BLSError, BlsResult};

use ark_bls12_377::g1::Config as G1Config;
use ark_ec::{
    short_weierstrass::{Affine, Projective, SWCurveConfig},
    AffineRepr,
};
use ark_ff::{PrimeField, Zero};
use log::{trace, warn};
use once_cell::sync::Lazy;
use std::marker::PhantomData;

/// Attempt bound for the increment loop. Each candidate yields a valid
/// x-coordinate with probability about 1/2, so the loop practically always
/// ends within a handful of iterations; the bound makes a broken backend
/// fail loudly instead of spinning forever.
const NUM_TRIES: usize = 256;

/// SHAKE-256 Try-and-Increment hasher to BLS12-377 G1.
pub static SHAKE_HASH_TO_G1: Lazy<TryAndIncrement<Shake256Xof, G1Config>> =
    Lazy::new(|| TryAndIncrement::new(Shake256Xof));

/// A try-and-increment method for hashing to a short Weierstrass curve over
/// a prime base field. See page 521 in
/// <https://link.springer.com/content/pdf/10.1007/3-540-45682-1_30.pdf>.
#[derive(Clone, Debug)]
pub struct TryAndIncrement<H, P> {
    hasher: H,
    curve_config: PhantomData<P>,
}

impl<H, P> TryAndIncrement<H, P>
where
    H: XOF<Error = BLSError>,
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    /// Instantiates a new Try-and-increment hasher with the provided XOF
    /// and curve configuration based on the type.
    pub fn new(hasher: H) -> Self {
        TryAndIncrement {
            hasher,
            curve_config: PhantomData,
        }
    }
}

impl<H, P> HashToCurve for TryAndIncrement<H, P>
where
    H: XOF<Error = BLSError>,
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    type Output = Projective<P>;

    fn hash(&self, message: &[u8]) -> BlsResult<Self::Output> {
        self.hash_with_attempt(message).map(|res| res.0)
    }
}

impl<H, P> TryAndIncrement<H, P>
where
    H: XOF<Error = BLSError>,
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    /// Hashes the message and also returns which attempt of the increment
    /// loop produced the point (0-based).
    pub fn hash_with_attempt(&self, message: &[u8]) -> BlsResult<(Projective<P>, usize)> {
        let num_bytes = field_byte_length::<P::BaseField>();
        let mut candidate = self.hasher.xof(message, num_bytes)?;

        for c in 0..NUM_TRIES {
            // Candidates at or above the modulus get reduced; the increment
            // rule applies to the digest bytes, which is what every
            // implementation of this map must agree on.
            let x = P::BaseField::from_be_bytes_mod_order(&candidate);
            // The smaller of the two square roots is taken, again so that
            // independent implementations land on the same point.
            if let Some(point) = Affine::<P>::get_point_from_x_unchecked(x, false) {
                let scaled = point.mul_by_cofactor_to_group();
                if !scaled.is_zero() {
                    trace!(
                        "succeeded hashing \"{}\" to curve in {} tries",
                        hex::encode(message),
                        c
                    );
                    return Ok((scaled, c));
                }
            }
            increment_be(&mut candidate);
        }

        warn!(
            "no valid x-coordinate for \"{}\" after {} tries",
            hex::encode(message),
            NUM_TRIES
        );
        Err(BLSError::CurveConstructionExhausted(NUM_TRIES))
    }
}

/// Adds one to a big-endian byte string, wrapping on overflow.
fn increment_be(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::CurveGroup;
    use ark_serialize::CanonicalSerialize;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn encoded<P: SWCurveConfig>(point: &Projective<P>) -> Vec<u8> {
        let mut out = vec![];
        point.into_affine().serialize_compressed(&mut out).unwrap();
        out
    }

    #[test]
    fn hash_is_deterministic() {
        let hasher = &*SHAKE_HASH_TO_G1;
        let rng = &mut XorShiftRng::seed_from_u64(7);
        for _ in 0..10 {
            let message: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
            let a = hasher.hash(&message).unwrap();
            let b = hasher.hash(&message).unwrap();
            assert_eq!(a, b);
            assert_eq!(encoded(&a), encoded(&b));
        }
    }

    #[test]
    fn distinct_messages_map_to_distinct_points() {
        let hasher = &*SHAKE_HASH_TO_G1;
        let a = hasher.hash(b"hello").unwrap();
        let b = hasher.hash(b"hellp").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hash_lands_in_prime_order_subgroup() {
        let hasher = &*SHAKE_HASH_TO_G1;
        for message in &[&b"test"[..], b"", b"another message"] {
            let point = hasher.hash(message).unwrap().into_affine();
            assert!(point.is_on_curve());
            assert!(point.is_in_correct_subgroup_assuming_on_curve());
        }
    }

    #[test]
    fn attempt_count_stays_small() {
        let hasher = &*SHAKE_HASH_TO_G1;
        let rng = &mut XorShiftRng::seed_from_u64(42);
        for _ in 0..20 {
            let message: Vec<u8> = (0..16).map(|_| rng.gen()).collect();
            let (_, attempt) = hasher.hash_with_attempt(&message).unwrap();
            // Failing 32 times in a row has probability ~2^-32.
            assert!(attempt < 32);
        }
    }

    #[test]
    fn increment_carries_through_be_bytes() {
        let mut bytes = [0x00, 0xff, 0xff];
        increment_be(&mut bytes);
        assert_eq!(bytes, [0x01, 0x00, 0x00]);

        let mut bytes = [0xff, 0xff];
        increment_be(&mut bytes);
        assert_eq!(bytes, [0x00, 0x00]);

        let mut bytes = [0x01, 0x02];
        increment_be(&mut bytes);
        assert_eq!(bytes, [0x01, 0x03]);
    }
}
