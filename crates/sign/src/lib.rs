//! Digital Signature Schemes
//!
//! ECDSA keys, signatures and the sign/verify protocol, built on the curve
//! arithmetic in `ecsig-algorithms` and the encodings in `ecsig-utils`.
//!
//! ```
//! use ecsig_algorithms::ec::default_curve;
//! use ecsig_sign::{Ecdsa, PrivateKey, PublicKey};
//!
//! let private_key = PrivateKey::generate(default_curve())?;
//! let public_key = private_key.public_key()?;
//! let signature = Ecdsa::sign("transfer 10 to bob", &private_key)?;
//! assert!(Ecdsa::verify("transfer 10 to bob", &signature, &public_key));
//!
//! let restored = PublicKey::from_pem(&public_key.to_pem()?)?;
//! assert_eq!(restored, public_key);
//! # Ok::<(), ecsig_api::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{Ecdsa, PrivateKey, PublicKey, Signature};
