//! Conversions between bytes, hex text and unsigned big integers
//!
//! All integers are big-endian and unsigned.

use ecsig_api::error::EncodingResult;
use ecsig_api::Error;
use num_bigint::BigUint;

/// Lowercase hex encoding of `data`
pub fn hex_from_binary(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex text (either case) into bytes
pub fn binary_from_hex(data: &str) -> EncodingResult<Vec<u8>> {
    hex::decode(data).map_err(|e| Error::InvalidEncoding {
        context: "hex",
        message: e.to_string(),
    })
}

/// Interpret hex text as a big-endian unsigned integer
pub fn number_from_hex(data: &str) -> EncodingResult<BigUint> {
    if data.is_empty() {
        return Err(Error::InvalidEncoding {
            context: "hex number",
            message: "empty string".to_string(),
        });
    }
    BigUint::parse_bytes(data.as_bytes(), 16).ok_or_else(|| Error::InvalidEncoding {
        context: "hex number",
        message: format!("'{}' is not a hexadecimal number", data),
    })
}

/// Interpret bytes as a big-endian unsigned integer; empty input is zero
pub fn number_from_bytes(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

/// Encode `number` big-endian, left-padded with zeros to exactly `length` bytes
///
/// Fails if the number does not fit.
pub fn bytes_from_number(number: &BigUint, length: usize) -> EncodingResult<Vec<u8>> {
    // to_bytes_be() renders zero as a single 0x00 byte
    let raw = if number.bits() == 0 {
        Vec::new()
    } else {
        number.to_bytes_be()
    };

    if raw.len() > length {
        return Err(Error::InvalidLength {
            context: "fixed-width integer",
            expected: length,
            actual: raw.len(),
        });
    }

    let mut out = vec![0u8; length];
    out[length - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}
