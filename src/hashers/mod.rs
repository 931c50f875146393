mod shake;
pub use shake::Shake256Xof;

/// An extendable output function (XOF): hashes arbitrary input to a digest
/// of the requested length.
pub trait XOF {
    /// The returned error type from each hashing call
    type Error;

    /// Runs the XOF over the message, producing exactly
    /// `output_size_in_bytes` bytes.
    fn xof(&self, message: &[u8], output_size_in_bytes: usize) -> Result<Vec<u8>, Self::Error>;
}
