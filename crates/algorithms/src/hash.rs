//! Message digests used by the signature schemes

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 digest of `message`
pub fn sha256(message: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(message).into()
}

/// SHA-256 digest of `message` read as a big-endian integer
pub fn sha256_number(message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&sha256(message))
}
