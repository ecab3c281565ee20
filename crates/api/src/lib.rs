//! Public API traits and types for the ecsig library
//!
//! This crate provides the public API surface shared by every ecsig member:
//! the error taxonomy returned by all fallible operations and the traits that
//! signature schemes and key types implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Serialize, SerializeSecret, SignatureScheme};

// Re-export trait modules for direct access
pub use traits::{serialize, signature};
