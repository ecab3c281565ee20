//! # ecsig
//!
//! ECDSA over configurable prime-field curves, with key and signature
//! encodings for authenticating ledger transactions and blocks.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecsig = "0.4"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): keys, signatures and the sign/verify protocol
//! - `algorithms`: curve arithmetic and the curve registry
//! - `utils`: hex, DER and PEM helpers
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecsig-api`]: error taxonomy and scheme traits
//! - [`ecsig-params`]: curve constants and encoding identifiers
//! - [`ecsig-algorithms`]: modular arithmetic, points and curves
//! - [`ecsig-utils`]: binary, DER and PEM codecs
//! - [`ecsig-sign`]: ECDSA keys and signatures
//!
//! ## Example
//!
//! ```
//! use ecsig::prelude::*;
//!
//! let curve = curve_by_name("secp256k1")?;
//! let private_key = PrivateKey::generate(curve)?;
//! let public_key = private_key.public_key()?;
//!
//! let signature = Ecdsa::sign("transfer 10 to bob", &private_key)?;
//! assert!(Ecdsa::verify("transfer 10 to bob", &signature, &public_key));
//! # Ok::<(), ecsig::prelude::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ecsig_api as api;
pub use ecsig_internal as internal;
pub use ecsig_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecsig_algorithms as algorithms;

#[cfg(feature = "utils")]
pub use ecsig_utils as utils;

#[cfg(feature = "sign")]
pub use ecsig_sign as sign;

// Types that appear in the public signatures of the member crates
pub use num_bigint::BigUint;
pub use zeroize::Zeroizing;

/// Common imports for ecsig users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Core traits
    pub use crate::api::{Serialize, SerializeSecret, SignatureScheme};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{curve_by_name, default_curve, CurveFp, Point};

    #[cfg(feature = "sign")]
    pub use crate::sign::{Ecdsa, PrivateKey, PublicKey, Signature};
}
