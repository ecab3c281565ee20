//! Reference vectors and shared fixtures for the ecsig integration tests
pub mod vectors;

use ecsig_sign::PrivateKey;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible randomized tests
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Build the private key of a reference vector
pub fn vector_key(vector: &vectors::SignatureVector) -> PrivateKey {
    PrivateKey::from_hex(vector.secret, vector.curve).expect("vector secret is valid")
}
