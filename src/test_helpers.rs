use crate::{PrivateKey, PublicKey};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible fixtures.
pub fn seeded_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0)
}

/// generate a keypair
pub fn keygen<R: Rng>(rng: &mut R) -> (PrivateKey, PublicKey) {
    let sk = PrivateKey::generate_with_rng(rng);
    let pk = sk.to_public();
    (sk, pk)
}

/// generate N keypairs
pub fn keygen_mul<R: Rng>(rng: &mut R, num: usize) -> Vec<(PrivateKey, PublicKey)> {
    (0..num).map(|_| keygen(rng)).collect()
}

/// a random byte string of the given length
pub fn random_message<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}
