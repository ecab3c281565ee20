//! Prime-field elliptic curve arithmetic
//!
//! This crate provides the arithmetic layer under the ECDSA implementation in
//! `ecsig-sign`:
//!
//! - true-modulo reduction and uniform scalar sampling (`ec::integer`)
//! - affine points with a point-at-infinity sentinel (`ec::point`)
//! - the group law over any short Weierstrass curve (`ec::math`)
//! - curve parameters and the process-wide curve registry
//!
//! All arithmetic uses arbitrary-precision integers and is not constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::{curve_by_name, curve_by_oid, default_curve, CurveFp, Point};

// Hash functions
pub mod hash;
pub use hash::sha256;
