//! Group law for short Weierstrass curves over prime fields
//!
//! Every routine takes the curve coefficients explicitly, so one implementation
//! serves every registered curve. Coordinates of finite points are assumed to be
//! reduced modulo `prime`.

use core::mem;

use crate::ec::integer::modulo;
use crate::ec::point::Point;
use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// `(a - b) mod p` without leaving unsigned arithmetic
fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + p - (b % p)) % p
}

/// Modular inverse of `x` modulo `n` by the extended Euclidean algorithm
///
/// Fails with `NotInvertible` when `gcd(x, n) != 1`, which includes `x ≡ 0`.
pub fn inv(x: &BigUint, n: &BigUint) -> Result<BigUint> {
    let not_invertible = || Error::NotInvertible {
        context: "modular inverse",
        modulus: n.clone(),
    };

    let x = x % n;
    if x.is_zero() {
        return Err(not_invertible());
    }

    let (mut lm, mut hm) = (BigInt::one(), BigInt::zero());
    let (mut low, mut high) = (BigInt::from(x), BigInt::from(n.clone()));
    while low > BigInt::one() {
        let r = &high / &low;
        let next_m = &hm - &lm * &r;
        let next = &high - &low * &r;
        hm = mem::replace(&mut lm, next_m);
        high = mem::replace(&mut low, next);
    }

    if !low.is_one() {
        return Err(not_invertible());
    }
    Ok(modulo(&lm, n))
}

/// The additive inverse `-p`
pub fn negate(p: &Point, prime: &BigUint) -> Point {
    if p.is_infinity() {
        return Point::infinity();
    }
    Point::new(p.x.clone(), sub_mod(&BigUint::zero(), &p.y, prime))
}

/// Double a point using the tangent slope
pub fn double(p: &Point, a: &BigUint, prime: &BigUint) -> Result<Point> {
    // a vertical tangent also lands on infinity
    if p.is_infinity() || p.y.is_zero() {
        return Ok(Point::infinity());
    }

    let numerator = (BigUint::from(3u32) * &p.x * &p.x + a) % prime;
    let denominator = inv(&((BigUint::from(2u32) * &p.y) % prime), prime)?;
    let lambda = (numerator * denominator) % prime;

    let x = sub_mod(&(&lambda * &lambda), &(BigUint::from(2u32) * &p.x), prime);
    let y = sub_mod(&(&lambda * sub_mod(&p.x, &x, prime)), &p.y, prime);
    Ok(Point::new(x, y))
}

/// Add two points using the chord slope
pub fn add(p: &Point, q: &Point, a: &BigUint, prime: &BigUint) -> Result<Point> {
    if p.is_infinity() {
        return Ok(q.clone());
    }
    if q.is_infinity() {
        return Ok(p.clone());
    }

    if p.x == q.x {
        if ((&p.y + &q.y) % prime).is_zero() {
            return Ok(Point::infinity());
        }
        return double(p, a, prime);
    }

    let numerator = sub_mod(&q.y, &p.y, prime);
    let denominator = inv(&sub_mod(&q.x, &p.x, prime), prime)?;
    let lambda = (numerator * denominator) % prime;

    let x = sub_mod(
        &sub_mod(&(&lambda * &lambda), &p.x, prime),
        &q.x,
        prime,
    );
    let y = sub_mod(&(&lambda * sub_mod(&p.x, &x, prime)), &p.y, prime);
    Ok(Point::new(x, y))
}

/// Scalar multiplication `n·p` with `n` reduced modulo the group order
///
/// A scalar that is a multiple of `order` yields infinity.
pub fn multiply(
    p: &Point,
    n: &BigUint,
    order: &BigUint,
    a: &BigUint,
    prime: &BigUint,
) -> Result<Point> {
    mul_unreduced(p, &(n % order), a, prime)
}

/// Scalar multiplication `n·p` without reducing `n`
///
/// Used for subgroup membership, where reducing by the order would make
/// `order·p` trivially infinity.
pub fn mul_unreduced(p: &Point, n: &BigUint, a: &BigUint, prime: &BigUint) -> Result<Point> {
    if p.is_infinity() || n.is_zero() {
        return Ok(Point::infinity());
    }

    // left-to-right double-and-add
    let mut acc = Point::infinity();
    for byte in n.to_bytes_be() {
        for bit in (0..8).rev() {
            acc = double(&acc, a, prime)?;
            if (byte >> bit) & 1 == 1 {
                acc = add(&acc, p, a, prime)?;
            }
        }
    }
    Ok(acc)
}
