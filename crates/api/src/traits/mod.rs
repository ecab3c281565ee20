//! Traits implemented by ecsig signature schemes and key types

pub mod serialize;
pub mod signature;

pub use serialize::{Serialize, SerializeSecret};
pub use signature::SignatureScheme;
