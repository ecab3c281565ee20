//! Constants for the Elliptic Curve Digital Signature Algorithm

/// Name of the curve used when a caller does not specify one
pub const DEFAULT_CURVE: &str = "secp256k1";

/// OID of `id-ecPublicKey` (RFC 5480), the algorithm identifier of every
/// SubjectPublicKeyInfo produced by this library
pub const EC_PUBLIC_KEY_OID: &[u64] = &[1, 2, 840, 10045, 2, 1];

/// PEM label of a DER SubjectPublicKeyInfo
pub const PUBLIC_KEY_PEM_LABEL: &str = "PUBLIC KEY";

/// PEM label of a SEC1 `ECPrivateKey`
pub const PRIVATE_KEY_PEM_LABEL: &str = "EC PRIVATE KEY";

/// Version field of a SEC1 `ECPrivateKey`
pub const EC_PRIVATE_KEY_VERSION: u8 = 1;

/// Short Weierstrass curve parameters, y² = x³ + a·x + b over F_p
///
/// Big integers are stored as big-endian hex strings without a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Human-readable curve name
    pub name: &'static str,
    /// Curve OID components
    pub oid: &'static [u64],
    /// Field prime
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Order of the base point
    pub n: &'static str,
    /// Base point x-coordinate
    pub gx: &'static str,
    /// Base point y-coordinate
    pub gy: &'static str,
}

/// secp256k1 (SEC 2, section 2.4.1)
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    oid: &[1, 3, 132, 0, 10],
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "0",
    b: "7",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
};

/// prime256v1 / NIST P-256 (SEC 2, section 2.4.2)
pub const PRIME256V1: CurveConstants = CurveConstants {
    name: "prime256v1",
    oid: &[1, 2, 840, 10045, 3, 1, 7],
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
};

/// Every curve the registry is built from, default first
pub const SUPPORTED_CURVES: &[CurveConstants] = &[SECP256K1, PRIME256V1];
