//! Validation utilities for curve arithmetic primitives

use super::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a scalar lies in [1, n-1]
#[inline]
pub fn scalar_range(name: &'static str, value: &BigUint, n: &BigUint) -> Result<()> {
    if value.is_zero() || value >= n {
        return Err(Error::param(name, "must lie in [1, N-1]"));
    }
    Ok(())
}
