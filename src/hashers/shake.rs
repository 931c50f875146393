use super::XOF;
use crate::BLSError;

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// SHAKE-256 extendable output function.
#[derive(Clone, Debug, Default)]
pub struct Shake256Xof;

impl XOF for Shake256Xof {
    type Error = BLSError;

    fn xof(&self, message: &[u8], output_size_in_bytes: usize) -> Result<Vec<u8>, BLSError> {
        let mut hasher = Shake256::default();
        hasher.update(message);
        let mut output = vec![0u8; output_size_in_bytes];
        hasher.finalize_xof().read(&mut output);
        Ok(output)
    }
}
