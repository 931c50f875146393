use crate::{BLSError, BlsResult};

use ark_bls12_377::{G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::io::{Read, Write};

/// Width of the compressed G1 signature encoding: one Fq element with the
/// y sign and infinity flags packed into the top bits.
pub const SIGNATURE_BYTES: usize = 48;

/// A BLS signature on G1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(G1Projective);

impl From<G1Projective> for Signature {
    fn from(sig: G1Projective) -> Signature {
        Signature(sig)
    }
}

impl AsRef<G1Projective> for Signature {
    fn as_ref(&self) -> &G1Projective {
        &self.0
    }
}

impl Signature {
    /// Decodes a compressed G1 point, including the on-curve and
    /// prime-subgroup checks. The input must be exactly one compressed
    /// point, nothing more.
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Signature> {
        if bytes.len() != SIGNATURE_BYTES {
            return Err(BLSError::MalformedSignature(SerializationError::InvalidData));
        }
        Signature::deserialize_compressed(bytes).map_err(BLSError::MalformedSignature)
    }

    /// Canonical compressed encoding.
    pub fn to_bytes(&self) -> BlsResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialized_size(Compress::Yes));
        self.serialize_compressed(&mut out)?;
        Ok(out)
    }
}

impl CanonicalSerialize for Signature {
    fn serialize_with_mode<W: Write>(
        &self,
        writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.0.into_affine().serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.0.into_affine().serialized_size(compress)
    }
}

impl Valid for Signature {
    fn check(&self) -> Result<(), SerializationError> {
        self.0.check()
    }
}

impl CanonicalDeserialize for Signature {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        Ok(Signature(
            G1Affine::deserialize_with_mode(reader, compress, validate)?.into_group(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_to_curve::try_and_increment::SHAKE_HASH_TO_G1;
    use crate::test_helpers::{keygen, random_message, seeded_rng};

    use ark_bls12_377::Fq;
    use ark_ff::UniformRand;
    use rand::{thread_rng, Rng};

    #[test]
    fn signature_bytes_round_trip() {
        let hasher = &*SHAKE_HASH_TO_G1;
        let rng = &mut seeded_rng();
        for _ in 0..20 {
            let message = random_message(rng, 32);
            let (sk, _) = keygen(rng);
            let sig = sk.sign(&message, hasher).unwrap();
            let bytes = sig.to_bytes().unwrap();
            assert_eq!(bytes.len(), SIGNATURE_BYTES);
            assert_eq!(Signature::from_bytes(&bytes).unwrap(), sig);
        }
    }

    #[test]
    fn rejects_wrong_length_encodings() {
        assert!(matches!(
            Signature::from_bytes(&[0u8; SIGNATURE_BYTES - 1]),
            Err(BLSError::MalformedSignature(_))
        ));
        assert!(matches!(
            Signature::from_bytes(&[0u8; SIGNATURE_BYTES + 1]),
            Err(BLSError::MalformedSignature(_))
        ));
        assert!(matches!(
            Signature::from_bytes(&[]),
            Err(BLSError::MalformedSignature(_))
        ));
    }

    #[test]
    fn rejects_points_outside_the_prime_subgroup() {
        let rng = &mut seeded_rng();
        let rogue = loop {
            let x = Fq::rand(rng);
            if let Some(point) = G1Affine::get_point_from_x_unchecked(x, false) {
                if !point.is_in_correct_subgroup_assuming_on_curve() {
                    break point;
                }
            }
        };
        let mut bytes = vec![];
        rogue.serialize_compressed(&mut bytes).unwrap();
        assert!(matches!(
            Signature::from_bytes(&bytes),
            Err(BLSError::MalformedSignature(_))
        ));
    }

    #[test]
    fn flipped_signature_bits_do_not_verify() {
        let hasher = &*SHAKE_HASH_TO_G1;
        let rng = &mut thread_rng();
        let message = random_message(rng, 32);
        let (sk, pk) = keygen(rng);
        let sig_bytes = sk.sign(&message, hasher).unwrap().to_bytes().unwrap();

        for _ in 0..64 {
            let mut flipped = sig_bytes.clone();
            let bit = rng.gen_range(0..flipped.len() * 8);
            flipped[bit / 8] ^= 1 << (bit % 8);
            // A flipped bit either breaks the encoding or yields a valid
            // point that signs nothing useful.
            match Signature::from_bytes(&flipped) {
                Err(BLSError::MalformedSignature(_)) => {}
                Err(e) => panic!("unexpected error kind: {}", e),
                Ok(sig) => assert!(!pk.verify(&message, &sig, hasher).unwrap()),
            }
        }
    }
}
