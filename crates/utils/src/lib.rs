//! Encoding utilities for the ecsig library
//!
//! - [`binary`]: hex ↔ bytes ↔ big integer conversions with fixed-width padding
//! - [`bytes`]: bounds-checked slicing and concatenation
//! - [`der`]: the ASN.1 DER subset used by SEC1 / SubjectPublicKeyInfo keys
//! - [`pem`]: RFC 7468 textual envelopes around DER

#![forbid(unsafe_code)]

pub mod binary;
pub mod bytes;
pub mod der;
pub mod pem;

pub use binary::{
    binary_from_hex, bytes_from_number, hex_from_binary, number_from_bytes, number_from_hex,
};
pub use pem::{from_pem, to_pem};
