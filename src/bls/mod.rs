/// Implements BLS signatures as specified in https://crypto.stanford.edu/~dabo/pubs/papers/BLSmultisig.html.
mod secret;
pub use secret::{PrivateKey, SCALAR_BYTES};

mod public;
pub use public::{PublicKey, PUBLIC_KEY_BYTES};

mod signature;
pub use signature::{Signature, SIGNATURE_BYTES};
