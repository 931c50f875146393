use super::{PublicKey, Signature};
use crate::{BLSError, BlsResult, HashToCurve};

use ark_bls12_377::{Fr, G1Projective, G2Projective};
use ark_ec::Group;
use ark_ff::{BigInteger, PrimeField, UniformRand};
use ark_serialize::CanonicalDeserialize;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Width of the big-endian secret scalar encoding, ceil(253 / 8) bytes.
pub const SCALAR_BYTES: usize = 32;

/// A BLS private key: a uniformly sampled scalar in [0, r).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    sk: Fr,
}

impl PrivateKey {
    /// Samples a fresh key from operating-system entropy, expanded through
    /// ChaCha20.
    ///
    /// Fails with [`BLSError::RandomnessUnavailable`] when the entropy
    /// source does; there is deliberately no fallback to a weaker source.
    pub fn generate() -> BlsResult<PrivateKey> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;
        let mut rng = ChaCha20Rng::from_seed(seed);
        Ok(PrivateKey::generate_with_rng(&mut rng))
    }

    /// Samples a key from the provided RNG. The caller is responsible for
    /// the quality of its randomness.
    pub fn generate_with_rng<R: Rng>(rng: &mut R) -> PrivateKey {
        PrivateKey { sk: Fr::rand(rng) }
    }

    /// Signs a message: `sk * H(message)` where `H` is the provided
    /// hash-to-G1. Deterministic, no per-signature randomness.
    pub fn sign<H: HashToCurve<Output = G1Projective>>(
        &self,
        message: &[u8],
        hash_to_g1: &H,
    ) -> BlsResult<Signature> {
        Ok(Signature::from(hash_to_g1.hash(message)? * self.sk))
    }

    /// Derives the public key `sk * G` for the fixed G2 generator `G`.
    pub fn to_public(&self) -> PublicKey {
        PublicKey::from(G2Projective::generator() * self.sk)
    }

    /// Fixed-width big-endian scalar encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.sk.into_bigint().to_bytes_be()
    }

    /// Decodes a big-endian scalar, rejecting wrong lengths and values at or
    /// above the group order.
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<PrivateKey> {
        if bytes.len() != SCALAR_BYTES {
            return Err(BLSError::InvalidSecretKey);
        }
        // The wire format is big-endian; arkworks deserializes scalars as
        // little-endian words with a built-in range check.
        let mut le = bytes.to_vec();
        le.reverse();
        let sk = Fr::deserialize_compressed(&le[..]).map_err(|_| BLSError::InvalidSecretKey)?;
        Ok(PrivateKey { sk })
    }
}

impl From<Fr> for PrivateKey {
    fn from(sk: Fr) -> PrivateKey {
        PrivateKey { sk }
    }
}

impl AsRef<Fr> for PrivateKey {
    fn as_ref(&self) -> &Fr {
        &self.sk
    }
}
