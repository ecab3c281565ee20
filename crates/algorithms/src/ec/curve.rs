//! Curve parameters

use core::fmt;

use crate::ec::math;
use crate::ec::point::Point;
use crate::error::{validate, Error, Result};
use ecsig_params::traditional::ecdsa::CurveConstants;
use num_bigint::BigUint;
use num_traits::{Num, Zero};

/// A prime-field short Weierstrass curve, y² = x³ + A·x + B (mod P)
///
/// Instances are built once by the registry and shared as `&'static CurveFp`.
#[derive(Clone, PartialEq, Eq)]
pub struct CurveFp {
    name: &'static str,
    oid: &'static [u64],
    p: BigUint,
    a: BigUint,
    b: BigUint,
    n: BigUint,
    g: Point,
    length: usize,
}

impl fmt::Debug for CurveFp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveFp")
            .field("name", &self.name)
            .field("oid", &self.oid)
            .finish_non_exhaustive()
    }
}

fn parse_hex(name: &'static str, value: &str) -> Result<BigUint> {
    BigUint::from_str_radix(value, 16).map_err(|_| Error::param(name, "invalid hex constant"))
}

impl CurveFp {
    /// Build a curve from its parameters
    ///
    /// Checks that the generator lies on the curve, that the coefficients are
    /// reduced and that field elements fit in the scalar width. Primality of
    /// `p` and `n` is taken on trust.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &'static str,
        oid: &'static [u64],
        p: BigUint,
        a: BigUint,
        b: BigUint,
        n: BigUint,
        gx: BigUint,
        gy: BigUint,
    ) -> Result<Self> {
        validate::parameter(p > BigUint::from(3u32), "p", "field prime too small")?;
        validate::parameter(a < p && b < p, "a, b", "coefficients must be reduced mod p")?;
        validate::parameter(n > BigUint::from(1u32), "n", "group order too small")?;

        let length = ((n.bits() + 7) / 8) as usize;
        // coordinates are encoded with the scalar width
        validate::parameter(
            p.bits() <= (length as u64) * 8,
            "p",
            "field elements must fit the scalar byte length",
        )?;
        let curve = CurveFp {
            name,
            oid,
            p,
            a,
            b,
            n,
            g: Point::new(gx, gy),
            length,
        };
        if !curve.contains(&curve.g) {
            return Err(Error::param("g", "generator is not on the curve"));
        }
        Ok(curve)
    }

    /// Build a curve from hex-encoded constants
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        CurveFp::new(
            constants.name,
            constants.oid,
            parse_hex("p", constants.p)?,
            parse_hex("a", constants.a)?,
            parse_hex("b", constants.b)?,
            parse_hex("n", constants.n)?,
            parse_hex("gx", constants.gx)?,
            parse_hex("gy", constants.gy)?,
        )
    }

    /// Human-readable curve name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// OID components naming this curve in DER structures
    pub fn oid(&self) -> &'static [u64] {
        self.oid
    }

    /// Field prime
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient A
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient B
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order of the generator
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Generator point
    pub fn g(&self) -> &Point {
        &self.g
    }

    /// Byte length of a scalar or coordinate
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether `point` satisfies the curve equation with reduced coordinates
    ///
    /// Infinity is not considered a member.
    pub fn contains(&self, point: &Point) -> bool {
        if point.is_infinity() || point.x >= self.p || point.y >= self.p {
            return false;
        }
        let x = &point.x;
        let lhs = (&point.y * &point.y) % &self.p;
        let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
        lhs == rhs
    }

    /// Whether `N·point` is infinity
    pub fn is_in_subgroup(&self, point: &Point) -> Result<bool> {
        if point.is_infinity() {
            return Ok(true);
        }
        Ok(math::mul_unreduced(point, &self.n, &self.a, &self.p)?.is_infinity())
    }

    /// `n·point` on this curve
    pub fn multiply(&self, point: &Point, n: &BigUint) -> Result<Point> {
        math::multiply(point, n, &self.n, &self.a, &self.p)
    }

    /// `n·G`
    pub fn multiply_generator(&self, n: &BigUint) -> Result<Point> {
        self.multiply(&self.g, n)
    }

    /// `p + q` on this curve
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        math::add(p, q, &self.a, &self.p)
    }

    /// Whether `value` is a usable nonzero scalar, i.e. lies in [1, N-1]
    pub fn is_valid_scalar(&self, value: &BigUint) -> bool {
        !value.is_zero() && value < &self.n
    }
}
