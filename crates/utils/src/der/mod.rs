//! ASN.1 DER primitives
//!
//! Only the subset needed for SEC1 `ECPrivateKey` and X.509
//! `SubjectPublicKeyInfo` structures is implemented: SEQUENCE, INTEGER
//! (non-negative), BIT STRING (no unused bits), OCTET STRING, OBJECT IDENTIFIER
//! and context-specific constructed tags `[0]`..`[30]`.
//!
//! Every `remove_*` decoder returns the decoded value together with the bytes
//! that follow it. Decoders never ignore those bytes on their own; callers pass
//! the remainder to [`ensure_empty`] once a structure is fully consumed so that
//! trailing junk surfaces as [`Error::TrailingBytes`].

use crate::binary::hex_from_binary;
use crate::bytes::take;
use ecsig_api::error::EncodingResult;
use ecsig_api::Error;
use num_bigint::BigUint;
use tracing::debug;

/// DER tag bytes
pub mod tag {
    /// INTEGER
    pub const INTEGER: u8 = 0x02;
    /// BIT STRING
    pub const BIT_STRING: u8 = 0x03;
    /// OCTET STRING
    pub const OCTET_STRING: u8 = 0x04;
    /// OBJECT IDENTIFIER
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    /// SEQUENCE (always constructed)
    pub const SEQUENCE: u8 = 0x30;
    /// Context-specific class with the constructed bit set
    pub const CONTEXT_CONSTRUCTED: u8 = 0xa0;
}

/// Highest tag number expressible in the low-tag-number form
const MAX_LOW_TAG_NUMBER: u8 = 0x1e;

/// Encode a length in short form (< 128) or minimal long form
pub fn encode_length(length: usize) -> Vec<u8> {
    if length < 0x80 {
        return vec![length as u8];
    }
    let bytes = length.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[skip..];

    let mut out = Vec::with_capacity(1 + significant.len());
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
    out
}

/// Decode a length prefix; returns the length and the bytes after the prefix
pub fn read_length(data: &[u8]) -> EncodingResult<(usize, &[u8])> {
    let (first, rest) = take(data, 1, "DER length").map_err(|_| {
        Error::malformed_der("length", "missing length byte")
    })?;
    let first = first[0];

    if first < 0x80 {
        return Ok((first as usize, rest));
    }
    if first == 0x80 {
        return Err(Error::malformed_der(
            "length",
            "indefinite length is not allowed in DER",
        ));
    }

    let count = (first & 0x7f) as usize;
    if count > core::mem::size_of::<usize>() {
        return Err(Error::malformed_der(
            "length",
            format!("length of {} bytes does not fit", count),
        ));
    }
    let (digits, rest) = take(rest, count, "DER length")
        .map_err(|_| Error::malformed_der("length", "truncated long-form length"))?;
    if digits[0] == 0 {
        return Err(Error::malformed_der(
            "length",
            "long-form length has a leading zero byte",
        ));
    }

    let length = digits
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize);
    if length < 0x80 {
        return Err(Error::malformed_der(
            "length",
            "long form used for a length below 128",
        ));
    }
    Ok((length, rest))
}

fn encode_tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let length = encode_length(value.len());
    let mut out = Vec::with_capacity(1 + length.len() + value.len());
    out.push(tag);
    out.extend_from_slice(&length);
    out.extend_from_slice(value);
    out
}

/// Read one TLV with the given tag; returns (value, rest)
fn remove_tlv<'a>(
    data: &'a [u8],
    expected: u8,
    context: &'static str,
) -> EncodingResult<(&'a [u8], &'a [u8])> {
    let Some((&found, rest)) = data.split_first() else {
        return Err(Error::malformed_der(context, "empty input"));
    };
    if found != expected {
        return Err(Error::malformed_der(
            context,
            format!("wanted type 0x{:02x}, got 0x{:02x}", expected, found),
        ));
    }
    let (length, rest) = read_length(rest).map_err(|e| e.with_context(context))?;
    if rest.len() < length {
        return Err(Error::malformed_der(
            context,
            format!("length {} exceeds the {} remaining bytes", length, rest.len()),
        ));
    }
    Ok(rest.split_at(length))
}

/// Concatenate already-encoded elements inside a SEQUENCE
pub fn encode_sequence<T: AsRef<[u8]>>(encoded_pieces: &[T]) -> Vec<u8> {
    encode_tlv(tag::SEQUENCE, &crate::bytes::concat(encoded_pieces))
}

/// Encode a non-negative INTEGER in minimal two's-complement form
pub fn encode_integer(value: &BigUint) -> Vec<u8> {
    let mut bytes = value.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    encode_tlv(tag::INTEGER, &bytes)
}

/// Encode an OBJECT IDENTIFIER from its numeric components
pub fn encode_oid(components: &[u64]) -> EncodingResult<Vec<u8>> {
    let (first, second, tail) = match components {
        [first, second, tail @ ..] => (*first, *second, tail),
        _ => {
            return Err(Error::InvalidParameter {
                context: "OBJECT IDENTIFIER",
                message: "an OID needs at least two components".to_string(),
            })
        }
    };
    if first > 2 || (first < 2 && second >= 40) {
        return Err(Error::InvalidParameter {
            context: "OBJECT IDENTIFIER",
            message: format!("invalid leading arcs {}.{}", first, second),
        });
    }
    let head = second.checked_add(40 * first).ok_or_else(|| Error::InvalidParameter {
        context: "OBJECT IDENTIFIER",
        message: "second arc is too large".to_string(),
    })?;

    let mut body = Vec::new();
    encode_base128(head, &mut body);
    for &component in tail {
        encode_base128(component, &mut body);
    }
    Ok(encode_tlv(tag::OBJECT_IDENTIFIER, &body))
}

fn encode_base128(mut value: u64, out: &mut Vec<u8>) {
    let mut groups = vec![(value & 0x7f) as u8];
    value >>= 7;
    while value > 0 {
        groups.push(0x80 | (value & 0x7f) as u8);
        value >>= 7;
    }
    out.extend(groups.iter().rev());
}

/// Encode a BIT STRING with zero unused bits
pub fn encode_bit_string(bits: &[u8]) -> Vec<u8> {
    let mut value = Vec::with_capacity(1 + bits.len());
    value.push(0x00);
    value.extend_from_slice(bits);
    encode_tlv(tag::BIT_STRING, &value)
}

/// Encode an OCTET STRING
pub fn encode_octet_string(data: &[u8]) -> Vec<u8> {
    encode_tlv(tag::OCTET_STRING, data)
}

/// Wrap already-encoded content in an explicit context tag `[tag_number]`
pub fn encode_constructed(tag_number: u8, value: &[u8]) -> EncodingResult<Vec<u8>> {
    if tag_number > MAX_LOW_TAG_NUMBER {
        return Err(Error::InvalidParameter {
            context: "context tag",
            message: format!("tag number {} needs the high-tag form", tag_number),
        });
    }
    Ok(encode_tlv(tag::CONTEXT_CONSTRUCTED | tag_number, value))
}

/// Split a SEQUENCE into its body and the bytes that follow it
pub fn remove_sequence(data: &[u8]) -> EncodingResult<(&[u8], &[u8])> {
    remove_tlv(data, tag::SEQUENCE, "SEQUENCE")
}

/// Decode a non-negative INTEGER
pub fn remove_integer(data: &[u8]) -> EncodingResult<(BigUint, &[u8])> {
    let (body, rest) = remove_tlv(data, tag::INTEGER, "INTEGER")?;
    match body {
        [] => Err(Error::malformed_der("INTEGER", "empty body")),
        [first, ..] if first & 0x80 != 0 => Err(Error::malformed_der(
            "INTEGER",
            "negative numbers are not supported",
        )),
        [0x00, second, ..] if second & 0x80 == 0 => Err(Error::malformed_der(
            "INTEGER",
            "non-minimal encoding",
        )),
        _ => Ok((BigUint::from_bytes_be(body), rest)),
    }
}

/// Decode an OBJECT IDENTIFIER into its numeric components
pub fn remove_object(data: &[u8]) -> EncodingResult<(Vec<u64>, &[u8])> {
    let (body, rest) = remove_tlv(data, tag::OBJECT_IDENTIFIER, "OBJECT IDENTIFIER")?;
    if body.is_empty() {
        return Err(Error::malformed_der("OBJECT IDENTIFIER", "empty body"));
    }

    let mut numbers = Vec::new();
    let mut value: u64 = 0;
    let mut in_progress = false;
    for &byte in body {
        if !in_progress && byte == 0x80 {
            return Err(Error::malformed_der(
                "OBJECT IDENTIFIER",
                "component has a leading 0x80 byte",
            ));
        }
        if value > (u64::MAX >> 7) {
            return Err(Error::malformed_der(
                "OBJECT IDENTIFIER",
                "component does not fit in 64 bits",
            ));
        }
        value = (value << 7) | u64::from(byte & 0x7f);
        if byte & 0x80 != 0 {
            in_progress = true;
        } else {
            numbers.push(value);
            value = 0;
            in_progress = false;
        }
    }
    if in_progress {
        return Err(Error::malformed_der(
            "OBJECT IDENTIFIER",
            "last component is truncated",
        ));
    }

    let head = numbers[0];
    let (first, second) = match head {
        0..=39 => (0, head),
        40..=79 => (1, head - 40),
        _ => (2, head - 80),
    };
    let mut components = Vec::with_capacity(numbers.len() + 1);
    components.push(first);
    components.push(second);
    components.extend_from_slice(&numbers[1..]);
    Ok((components, rest))
}

/// Decode a BIT STRING; only zero unused bits are accepted
pub fn remove_bit_string(data: &[u8]) -> EncodingResult<(&[u8], &[u8])> {
    let (body, rest) = remove_tlv(data, tag::BIT_STRING, "BIT STRING")?;
    match body.split_first() {
        Some((0, bits)) => Ok((bits, rest)),
        Some((unused, _)) => Err(Error::malformed_der(
            "BIT STRING",
            format!("{} unused bits are not supported", unused),
        )),
        None => Err(Error::malformed_der("BIT STRING", "missing unused-bits byte")),
    }
}

/// Decode an OCTET STRING
pub fn remove_octet_string(data: &[u8]) -> EncodingResult<(&[u8], &[u8])> {
    remove_tlv(data, tag::OCTET_STRING, "OCTET STRING")
}

/// Decode an explicit context tag; returns (tag number, body, rest)
pub fn remove_constructed(data: &[u8]) -> EncodingResult<(u8, &[u8], &[u8])> {
    let Some(&found) = data.first() else {
        return Err(Error::malformed_der("context tag", "empty input"));
    };
    if found & 0xe0 != tag::CONTEXT_CONSTRUCTED || found & 0x1f > MAX_LOW_TAG_NUMBER {
        return Err(Error::malformed_der(
            "context tag",
            format!("wanted a constructed context tag, got 0x{:02x}", found),
        ));
    }
    let (body, rest) = remove_tlv(data, found, "context tag")?;
    Ok((found & 0x1f, body, rest))
}

/// Fail with [`Error::TrailingBytes`] unless `rest` is empty
pub fn ensure_empty(rest: &[u8], context: &'static str) -> EncodingResult<()> {
    if rest.is_empty() {
        return Ok(());
    }
    debug!(context, trailing = rest.len(), "rejecting DER with trailing bytes");
    Err(Error::TrailingBytes {
        context,
        trailing: hex_from_binary(rest),
    })
}
