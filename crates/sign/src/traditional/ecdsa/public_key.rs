//! ECDSA public keys and their SEC1 / DER / PEM encodings

use core::fmt;

use ecsig_algorithms::ec::{curve_by_name, curve_by_oid, default_curve, CurveFp, Point};
use ecsig_api::{error::KeyResult, Error as ApiError, ResultExt, Serialize};
use ecsig_params::traditional::ecdsa::{EC_PUBLIC_KEY_OID, PUBLIC_KEY_PEM_LABEL};
use ecsig_utils::binary::{binary_from_hex, bytes_from_number, hex_from_binary, number_from_bytes};
use ecsig_utils::{bytes, der, pem};
use tracing::debug;

/// SEC1 tag for an uncompressed point
const UNCOMPRESSED_POINT: u8 = 0x04;

/// An ECDSA public key: a validated point together with its curve
///
/// Every constructor except derivation from a private key checks that the
/// point is finite, on the curve and in the prime-order subgroup.
#[derive(Clone)]
pub struct PublicKey {
    point: Point,
    curve: &'static CurveFp,
    // fixed-width X || Y, computed once at construction
    raw: Vec<u8>,
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve.oid() == other.curve.oid() && self.point == other.point
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve.name())
            .field("point", &hex_from_binary(&self.raw))
            .finish()
    }
}

fn reject(curve: &CurveFp, err: ApiError) -> ApiError {
    debug!(curve = curve.name(), error = %err, "public key import rejected");
    err
}

impl PublicKey {
    /// Wrap a point already known to be a valid public key for `curve`
    pub(crate) fn from_trusted_point(point: Point, curve: &'static CurveFp) -> KeyResult<Self> {
        let length = curve.length();
        let x = bytes_from_number(point.x(), length)?;
        let y = bytes_from_number(point.y(), length)?;
        Ok(PublicKey {
            point,
            curve,
            raw: bytes::concat(&[x, y]),
        })
    }

    /// Create a public key from a point, validating it against `curve`
    pub fn from_point(point: Point, curve: &'static CurveFp) -> KeyResult<Self> {
        if point.is_infinity() {
            return Err(reject(
                curve,
                ApiError::invalid_point("Public Key point is at infinity"),
            ));
        }
        if !curve.contains(&point) {
            return Err(reject(
                curve,
                ApiError::invalid_point(format!(
                    "Point ({:x}, {:x}) is not valid for curve {}",
                    point.x(),
                    point.y(),
                    curve.name()
                )),
            ));
        }
        if !curve.is_in_subgroup(&point).map_err(ApiError::from)? {
            return Err(reject(
                curve,
                ApiError::invalid_point(format!(
                    "Point ({:x}, {:x}) * {}.N is not at infinity",
                    point.x(),
                    point.y(),
                    curve.name()
                )),
            ));
        }
        Self::from_trusted_point(point, curve)
    }

    /// The public point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The curve this key lives on
    pub fn curve(&self) -> &'static CurveFp {
        self.curve
    }

    /// Fixed-width `X || Y`, prefixed with `00 04` when `encoded` is set
    pub fn to_bytes(&self, encoded: bool) -> Vec<u8> {
        if encoded {
            bytes::concat(&[&[0x00, UNCOMPRESSED_POINT][..], &self.raw[..]])
        } else {
            self.raw.clone()
        }
    }

    /// Parse a fixed-width `X || Y` string for `curve`
    pub fn from_bytes(data: &[u8], curve: &'static CurveFp) -> KeyResult<Self> {
        let length = curve.length();
        if data.len() != 2 * length {
            return Err(reject(
                curve,
                ApiError::InvalidLength {
                    context: "PublicKey point string",
                    expected: 2 * length,
                    actual: data.len(),
                },
            ));
        }
        let (x, y) = bytes::take(data, length, "PublicKey point string")?;
        let point = Point::new(number_from_bytes(x), number_from_bytes(y));
        Self::from_point(point, curve)
    }

    /// Hex form of `X || Y`
    pub fn to_hex(&self) -> String {
        hex_from_binary(&self.raw)
    }

    /// Parse the hex form of `X || Y` on the named curve
    pub fn from_hex(data: &str, curve_name: &str) -> KeyResult<Self> {
        let curve = curve_by_name(curve_name).map_err(ApiError::from)?;
        let data = binary_from_hex(data).with_context("PublicKey::from_hex")?;
        Self::from_bytes(&data, curve)
    }

    /// DER `SubjectPublicKeyInfo`
    pub fn to_der(&self) -> KeyResult<Vec<u8>> {
        let algorithm = der::encode_sequence(&[
            der::encode_oid(EC_PUBLIC_KEY_OID)?,
            der::encode_oid(self.curve.oid())?,
        ]);
        let point = bytes::concat(&[&[UNCOMPRESSED_POINT][..], &self.raw[..]]);
        Ok(der::encode_sequence(&[algorithm, der::encode_bit_string(&point)]))
    }

    /// Parse a DER `SubjectPublicKeyInfo`
    ///
    /// Rejects trailing bytes after every structure, algorithms other than
    /// `id-ecPublicKey`, unregistered curves and anything but an uncompressed
    /// point.
    pub fn from_der(data: &[u8]) -> KeyResult<Self> {
        let (spki, rest) = der::remove_sequence(data)?;
        der::ensure_empty(rest, "DER public key")?;

        let (algorithm, point_bit_string) = der::remove_sequence(spki)?;
        let (key_type, rest) = der::remove_object(algorithm)?;
        let (curve_oid, rest) = der::remove_object(rest)?;
        der::ensure_empty(rest, "DER public key objects")?;

        if key_type != EC_PUBLIC_KEY_OID {
            return Err(ApiError::malformed_der(
                "DER public key",
                format!("unexpected key type {:?}", key_type),
            ));
        }
        let curve = curve_by_oid(&curve_oid).map_err(ApiError::from)?;

        let (point, rest) = der::remove_bit_string(point_bit_string)?;
        der::ensure_empty(rest, "public key point-string")?;

        match point.split_first() {
            Some((&UNCOMPRESSED_POINT, xy)) => Self::from_bytes(xy, curve),
            Some((tag, _)) => Err(reject(
                curve,
                ApiError::malformed_der(
                    "public key point-string",
                    format!("unsupported point format 0x{:02x}", tag),
                ),
            )),
            None => Err(reject(
                curve,
                ApiError::malformed_der("public key point-string", "empty point"),
            )),
        }
    }

    /// PEM `PUBLIC KEY` document
    pub fn to_pem(&self) -> KeyResult<String> {
        Ok(pem::to_pem(&self.to_der()?, PUBLIC_KEY_PEM_LABEL))
    }

    /// Parse a PEM `PUBLIC KEY` document
    pub fn from_pem(data: &str) -> KeyResult<Self> {
        Self::from_der(&pem::from_pem(data, PUBLIC_KEY_PEM_LABEL)?)
    }
}

impl Serialize for PublicKey {
    /// Parse `X || Y` on the default curve
    fn from_bytes(bytes: &[u8]) -> ecsig_api::Result<Self> {
        PublicKey::from_bytes(bytes, default_curve())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.raw.clone()
    }
}
