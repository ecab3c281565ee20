//! Internal utilities for the ecsig library
//!
//! Not part of the public API; shared by the member crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
