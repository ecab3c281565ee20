//! Affine curve points

use num_bigint::BigUint;
use num_traits::Zero;

/// A point on a short Weierstrass curve in affine coordinates
///
/// The point at infinity is a sentinel with zeroed coordinates. Points carry
/// no curve; on-curve validation happens at key import.
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) is_identity: bool,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if self.is_identity || other.is_identity {
            return self.is_identity == other.is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a finite point from its coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point {
            x,
            y,
            is_identity: false,
        }
    }

    /// The point at infinity (group identity).
    pub fn infinity() -> Self {
        Point {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_identity: true,
        }
    }

    /// Check if this point is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.is_identity
    }

    /// The x-coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}
