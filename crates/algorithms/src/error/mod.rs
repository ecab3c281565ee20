//! Error handling for curve arithmetic primitives

use std::borrow::Cow;
use std::fmt;

use ecsig_api::{Error as CoreError, Result as CoreResult};
use num_bigint::BigUint;

/// The error type for curve arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Modular inverse requested for a value sharing a factor with the modulus
    NotInvertible {
        /// Operation that needed the inverse
        context: &'static str,
        /// The modulus
        modulus: BigUint,
    },

    /// Curve lookup failed
    UnsupportedCurve {
        /// Name or OID that was asked for
        requested: String,
        /// Names of every registered curve
        available: Vec<&'static str>,
    },

    /// A point failed curve or subgroup validation
    InvalidPoint {
        /// Why the point was rejected
        reason: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for curve arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::NotInvertible { context, modulus } => {
                write!(f, "{}: value is not invertible modulo {:x}", context, modulus)
            }
            Error::UnsupportedCurve {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Unknown curve {}. Only the following are available: {}",
                    requested,
                    available.join(", ")
                )
            }
            Error::InvalidPoint { reason } => write!(f, "Invalid point: {}", reason),
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NotInvertible { context, modulus } => CoreError::NotInvertible {
                context,
                modulus: format!("{:x}", modulus),
            },
            Error::UnsupportedCurve {
                requested,
                available,
            } => CoreError::UnsupportedCurve {
                requested,
                available,
            },
            Error::InvalidPoint { reason } => CoreError::InvalidPoint { message: reason },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
