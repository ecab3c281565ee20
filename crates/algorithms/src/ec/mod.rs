//! Elliptic curve primitives over prime fields
//!
//! Curves are plain parameter values consumed by one generic group-law
//! implementation. Adding a curve means registering new constants in
//! `ecsig-params`, not writing new arithmetic.

pub mod curve;
pub mod integer;
pub mod math;
pub mod point;
pub mod registry;

pub use curve::CurveFp;
pub use point::Point;
pub use registry::{curve_by_name, curve_by_oid, curve_names, default_curve, supported_curves};
