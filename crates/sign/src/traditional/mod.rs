//! Traditional signature schemes
//!
//! ECDSA over prime-field curves is the only scheme provided.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{Ecdsa, PrivateKey, PublicKey, Signature};
