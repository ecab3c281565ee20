//! Scalar arithmetic over arbitrary-precision integers

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Reduce `a` into `[0, n)`
///
/// Unlike `%` on signed integers, negative inputs map to a non-negative result,
/// so `modulo(-1, 7) == 6`.
pub fn modulo(a: &BigInt, n: &BigUint) -> BigUint {
    let n = BigInt::from(n.clone());
    let (_, magnitude) = a.mod_floor(&n).into_parts();
    magnitude
}

/// Uniformly random integer in the closed range `[low, high]`
pub fn random_between<R>(rng: &mut R, low: &BigUint, high: &BigUint) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if low > high {
        return Err(Error::param("random_between", "low bound exceeds high bound"));
    }
    let bound = high + BigUint::one();
    Ok(rng.gen_biguint_range(low, &bound))
}
