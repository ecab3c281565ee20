//! Constant values for ecsig curve operations
//!
//! This crate holds the raw parameters of every supported curve as they are
//! published in SEC 2 / FIPS 186-4, together with the object identifiers
//! used in DER key encodings. Parsing into big integers happens in
//! `ecsig-algorithms`.

#![no_std]

pub mod traditional;
