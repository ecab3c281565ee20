//! Error handling for the ecsig ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Specialized result types for different operations
pub type KeyResult<T> = Result<T>;
pub type EncodingResult<T> = Result<T>;
pub type SignatureResult<T> = Result<T>;
