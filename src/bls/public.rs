use super::{PrivateKey, Signature};
use crate::{BLSError, BlsResult, HashToCurve};

use ark_bls12_377::{Bls12_377, G1Projective, G2Affine, G2Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::io::{Read, Write};

use std::ops::Neg;

/// Width of the compressed G2 public key encoding: one Fq2 element with the
/// y sign and infinity flags packed into the top bits.
pub const PUBLIC_KEY_BYTES: usize = 96;

/// A BLS public key on G2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(G2Projective);

impl From<G2Projective> for PublicKey {
    fn from(pk: G2Projective) -> PublicKey {
        PublicKey(pk)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(sk: &PrivateKey) -> PublicKey {
        sk.to_public()
    }
}

impl AsRef<G2Projective> for PublicKey {
    fn as_ref(&self) -> &G2Projective {
        &self.0
    }
}

impl PublicKey {
    /// Decodes a compressed G2 point, including the on-curve and
    /// prime-subgroup checks. The input must be exactly one compressed
    /// point, nothing more.
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<PublicKey> {
        if bytes.len() != PUBLIC_KEY_BYTES {
            return Err(BLSError::MalformedPublicKey(SerializationError::InvalidData));
        }
        PublicKey::deserialize_compressed(bytes).map_err(BLSError::MalformedPublicKey)
    }

    /// Canonical compressed encoding.
    pub fn to_bytes(&self) -> BlsResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialized_size(Compress::Yes));
        self.serialize_compressed(&mut out)?;
        Ok(out)
    }

    /// Checks `e(sig, G) == e(H(m), pk)` for the fixed G2 generator `G`.
    ///
    /// The signature is negated and folded into a single product of two
    /// pairings, so the check passes exactly when the product lands on the
    /// target-group identity. A wrong signature is an `Ok(false)`, never an
    /// error; malformed encodings are rejected earlier, when decoding.
    pub fn verify<H: HashToCurve<Output = G1Projective>>(
        &self,
        message: &[u8],
        signature: &Signature,
        hash_to_g1: &H,
    ) -> BlsResult<bool> {
        let message_hash = hash_to_g1.hash(message)?.into_affine();
        let neg_sig = signature.as_ref().into_affine().neg();

        let product = Bls12_377::multi_miller_loop(
            [neg_sig, message_hash],
            [G2Affine::generator(), self.0.into_affine()],
        );
        Ok(Bls12_377::final_exponentiation(product)
            .map(|target| target.0.is_one())
            .unwrap_or(false))
    }
}

impl CanonicalSerialize for PublicKey {
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

impl Valid for PublicKey {
    fn check(&self) -> Result<(), SerializationError> {
        self.0.check()
    }
}

impl CanonicalDeserialize for PublicKey {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        Ok(PublicKey(
            G2Affine::deserialize_with_mode(reader, compress, validate)?.into_group(),
        ))
    }
}
