//! ECDSA private keys and their SEC1 `ECPrivateKey` encoding

use core::fmt;

use super::public_key::PublicKey;
use ecsig_algorithms::ec::{curve_by_name, curve_by_oid, default_curve, integer, CurveFp};
use ecsig_api::{error::KeyResult, Error as ApiError, ResultExt, SerializeSecret};
use ecsig_internal::constant_time::ct_eq;
use ecsig_params::traditional::ecdsa::{EC_PRIVATE_KEY_VERSION, PRIVATE_KEY_PEM_LABEL};
use ecsig_utils::binary::{binary_from_hex, bytes_from_number, hex_from_binary, number_from_bytes};
use ecsig_utils::{der, pem};
use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

/// Context-specific tag holding the curve OID
const PARAMETERS_TAG: u8 = 0;
/// Context-specific tag holding the public point
const PUBLIC_KEY_TAG: u8 = 1;

/// An ECDSA private key: a secret scalar in [1, N-1] bound to a curve
///
/// The scalar is held as fixed-width big-endian bytes and wiped on drop.
#[derive(Clone)]
pub struct PrivateKey {
    secret: Zeroizing<Vec<u8>>,
    curve: &'static CurveFp,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve.oid() == other.curve.oid()
            && ct_eq(self.secret.as_slice(), other.secret.as_slice())
    }
}

impl Eq for PrivateKey {}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }
}

fn reject(curve: Option<&CurveFp>, err: ApiError) -> ApiError {
    debug!(
        curve = curve.map(CurveFp::name).unwrap_or("unknown"),
        error = %err,
        "private key import rejected"
    );
    err
}

impl PrivateKey {
    /// Generate a key on `curve` using the operating system RNG
    pub fn generate(curve: &'static CurveFp) -> KeyResult<Self> {
        Self::generate_with_rng(curve, &mut OsRng)
    }

    /// Generate a key on `curve` using the provided RNG
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        curve: &'static CurveFp,
        rng: &mut R,
    ) -> KeyResult<Self> {
        let one = BigUint::one();
        let high = curve.n() - &one;
        let secret = integer::random_between(rng, &one, &high).map_err(ApiError::from)?;
        Self::from_secret(&secret, curve)
    }

    /// Wrap an existing secret scalar, which must lie in [1, N-1]
    pub fn from_secret(secret: &BigUint, curve: &'static CurveFp) -> KeyResult<Self> {
        if !curve.is_valid_scalar(secret) {
            return Err(reject(
                Some(curve),
                ApiError::invalid_key("PrivateKey", "secret must lie in [1, N-1]"),
            ));
        }
        Ok(PrivateKey {
            secret: Zeroizing::new(bytes_from_number(secret, curve.length())?),
            curve,
        })
    }

    /// The secret scalar
    pub fn secret(&self) -> BigUint {
        number_from_bytes(&self.secret)
    }

    /// The curve this key lives on
    pub fn curve(&self) -> &'static CurveFp {
        self.curve
    }

    /// Derive the public key `secret·G`
    pub fn public_key(&self) -> KeyResult<PublicKey> {
        let point = self
            .curve
            .multiply_generator(&self.secret())
            .map_err(ApiError::from)?;
        PublicKey::from_trusted_point(point, self.curve)
    }

    /// Fixed-width big-endian secret
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.secret.clone()
    }

    /// Parse a fixed-width big-endian secret for `curve`
    pub fn from_bytes(data: &[u8], curve: &'static CurveFp) -> KeyResult<Self> {
        if data.len() != curve.length() {
            return Err(reject(
                Some(curve),
                ApiError::InvalidLength {
                    context: "PrivateKey secret",
                    expected: curve.length(),
                    actual: data.len(),
                },
            ));
        }
        Self::from_secret(&number_from_bytes(data), curve)
    }

    /// Hex form of the fixed-width secret
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex_from_binary(&self.secret))
    }

    /// Parse the hex form of a secret on the named curve
    pub fn from_hex(data: &str, curve_name: &str) -> KeyResult<Self> {
        let curve = curve_by_name(curve_name).map_err(ApiError::from)?;
        let data = Zeroizing::new(binary_from_hex(data).with_context("PrivateKey::from_hex")?);
        Self::from_bytes(&data, curve)
    }

    /// SEC1 `ECPrivateKey` DER, including the curve OID and public point
    pub fn to_der(&self) -> KeyResult<Zeroizing<Vec<u8>>> {
        let public_key = self.public_key()?;
        let parameters =
            der::encode_constructed(PARAMETERS_TAG, &der::encode_oid(self.curve.oid())?)?;
        let point = der::encode_bit_string(&public_key.to_bytes(true)[1..]);
        let public = der::encode_constructed(PUBLIC_KEY_TAG, &point)?;

        let version = der::encode_integer(&BigUint::from(EC_PRIVATE_KEY_VERSION));
        let secret = Zeroizing::new(der::encode_octet_string(&self.secret));
        Ok(Zeroizing::new(der::encode_sequence(&[
            &version[..],
            &secret[..],
            &parameters[..],
            &public[..],
        ])))
    }

    /// Parse a SEC1 `ECPrivateKey` DER document
    ///
    /// The curve parameters must be present and name a registered curve. When
    /// the public point is present it must match the secret.
    pub fn from_der(data: &[u8]) -> KeyResult<Self> {
        let (body, rest) = der::remove_sequence(data)?;
        der::ensure_empty(rest, "DER private key")?;

        let (version, body) = der::remove_integer(body)?;
        if version != BigUint::from(EC_PRIVATE_KEY_VERSION) {
            return Err(reject(
                None,
                ApiError::invalid_key(
                    "DER private key",
                    format!("unsupported version {}", version),
                ),
            ));
        }
        let (secret, body) = der::remove_octet_string(body)?;

        let (tag, parameters, body) = der::remove_constructed(body)?;
        if tag != PARAMETERS_TAG {
            return Err(ApiError::malformed_der(
                "DER private key",
                format!("expected curve parameters [0], got [{}]", tag),
            ));
        }
        let (curve_oid, rest) = der::remove_object(parameters)?;
        der::ensure_empty(rest, "DER private key parameters")?;
        let curve = curve_by_oid(&curve_oid).map_err(ApiError::from)?;

        let key = Self::from_bytes(secret, curve)?;

        if !body.is_empty() {
            let (tag, public, rest) = der::remove_constructed(body)?;
            der::ensure_empty(rest, "DER private key")?;
            if tag != PUBLIC_KEY_TAG {
                return Err(ApiError::malformed_der(
                    "DER private key",
                    format!("expected public key [1], got [{}]", tag),
                ));
            }
            let (point, rest) = der::remove_bit_string(public)?;
            der::ensure_empty(rest, "private key point-string")?;
            if point != &key.public_key()?.to_bytes(true)[1..] {
                return Err(reject(
                    Some(curve),
                    ApiError::invalid_key(
                        "DER private key",
                        "embedded public key does not match the secret",
                    ),
                ));
            }
        }

        Ok(key)
    }

    /// PEM `EC PRIVATE KEY` document
    pub fn to_pem(&self) -> KeyResult<Zeroizing<String>> {
        Ok(Zeroizing::new(pem::to_pem(&self.to_der()?, PRIVATE_KEY_PEM_LABEL)))
    }

    /// Parse a PEM `EC PRIVATE KEY` document
    ///
    /// Other blocks before it, such as the `EC PARAMETERS` block OpenSSL
    /// writes by default, are skipped.
    pub fn from_pem(data: &str) -> KeyResult<Self> {
        let der = Zeroizing::new(pem::from_pem(data, PRIVATE_KEY_PEM_LABEL)?);
        Self::from_der(&der)
    }
}

impl SerializeSecret for PrivateKey {
    /// Parse a fixed-width secret on the default curve
    fn from_bytes(bytes: &[u8]) -> ecsig_api::Result<Self> {
        PrivateKey::from_bytes(bytes, default_curve())
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}
