//! Process-wide registry of supported curves
//!
//! Built lazily from the constants in `ecsig-params` and never mutated, so
//! lookups are safe from any thread without locking.

use crate::ec::curve::CurveFp;
use crate::error::{Error, Result};
use ecsig_params::traditional::ecdsa::{DEFAULT_CURVE, PRIME256V1, SECP256K1, SUPPORTED_CURVES};
use once_cell::sync::Lazy;
use tracing::debug;

static CURVES: Lazy<Vec<CurveFp>> = Lazy::new(|| {
    SUPPORTED_CURVES
        .iter()
        .map(|constants| {
            // constants are compile-time data covered by the registry tests
            CurveFp::from_constants(constants)
                .unwrap_or_else(|e| panic!("invalid built-in curve {}: {}", constants.name, e))
        })
        .collect()
});

/// Every registered curve, default first
pub fn supported_curves() -> &'static [CurveFp] {
    &CURVES
}

/// Names of every registered curve
pub fn curve_names() -> Vec<&'static str> {
    CURVES.iter().map(CurveFp::name).collect()
}

/// Look up a curve by name
pub fn curve_by_name(name: &str) -> Result<&'static CurveFp> {
    CURVES.iter().find(|c| c.name() == name).ok_or_else(|| {
        debug!(curve = name, "curve lookup by name failed");
        Error::UnsupportedCurve {
            requested: format!("'{}'", name),
            available: curve_names(),
        }
    })
}

/// Look up a curve by OID components
pub fn curve_by_oid(oid: &[u64]) -> Result<&'static CurveFp> {
    CURVES.iter().find(|c| c.oid() == oid).ok_or_else(|| {
        debug!(?oid, "curve lookup by oid failed");
        Error::UnsupportedCurve {
            requested: format!("with oid {:?}", oid),
            available: curve_names(),
        }
    })
}

/// Registered curve with the given name; only for names known to be built in
fn builtin(name: &str) -> &'static CurveFp {
    CURVES
        .iter()
        .find(|c| c.name() == name)
        .unwrap_or_else(|| panic!("built-in curve {} is not registered", name))
}

/// The default curve
pub fn default_curve() -> &'static CurveFp {
    builtin(DEFAULT_CURVE)
}

/// secp256k1
pub fn secp256k1() -> &'static CurveFp {
    builtin(SECP256K1.name)
}

/// prime256v1 (NIST P-256)
pub fn prime256v1() -> &'static CurveFp {
    builtin(PRIME256V1.name)
}
