//! ECDSA signatures

use ecsig_algorithms::ec::CurveFp;
use ecsig_algorithms::error::{to_core_result, validate};
use ecsig_api::error::SignatureResult;
use ecsig_utils::binary::{bytes_from_number, number_from_bytes};
use ecsig_utils::bytes;
use num_bigint::BigUint;

/// An ECDSA signature `(r, s)`
///
/// Components are stored as given. Range checks against the curve order
/// happen during verification, which rejects anything outside [1, N-1].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Fixed-width `r || s` using the byte length of `curve`
    pub fn to_bytes(&self, curve: &CurveFp) -> SignatureResult<Vec<u8>> {
        let length = curve.length();
        Ok(bytes::concat(&[
            bytes_from_number(&self.r, length)?,
            bytes_from_number(&self.s, length)?,
        ]))
    }

    /// Parse fixed-width `r || s` for `curve`
    pub fn from_bytes(data: &[u8], curve: &CurveFp) -> SignatureResult<Self> {
        let length = curve.length();
        to_core_result(
            validate::length("Signature bytes", data.len(), 2 * length),
            "Signature bytes",
        )?;
        let (r, s) = bytes::take(data, length, "Signature bytes")?;
        Ok(Signature::new(number_from_bytes(r), number_from_bytes(s)))
    }
}
