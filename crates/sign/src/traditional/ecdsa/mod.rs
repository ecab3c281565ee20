//! ECDSA over the registered prime-field curves
//!
//! Messages are text: the signed value is SHA-256 over the UTF-8 bytes of the
//! message, read as a big-endian integer and used without truncation. Callers
//! signing binary data should hex or base64 encode it first.

mod private_key;
mod public_key;
mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;

use ecsig_algorithms::ec::{default_curve, integer, math, CurveFp};
use ecsig_algorithms::error::{to_core_result, validate};
use ecsig_algorithms::hash::sha256_number;
use ecsig_api::{error::SignatureResult, Error as ApiError, Result as ApiResult, SignatureScheme};
use ecsig_internal::constant_time::ct_eq;
use ecsig_utils::binary::bytes_from_number;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

/// ECDSA with SHA-256
///
/// Stateless: every call is independent and safe to run concurrently.
pub struct Ecdsa;

/// Attempts at drawing a nonce before giving up
///
/// r = 0 or s = 0 happens with probability about 2^-256 per attempt on the
/// registered curves, so hitting this bound points at a broken RNG.
const MAX_NONCE_ATTEMPTS: usize = 64;

/// Compute `(r, s)` for digest `h` and nonce `k`, or `None` if either is zero
fn sign_digest(
    h: &BigUint,
    secret: &BigUint,
    k: &BigUint,
    curve: &CurveFp,
) -> SignatureResult<Option<Signature>> {
    let n = curve.n();
    let rand_sign_point = curve.multiply_generator(k).map_err(ApiError::from)?;
    let r = rand_sign_point.x() % n;
    if r.is_zero() {
        return Ok(None);
    }
    let k_inv = math::inv(k, n).map_err(ApiError::from)?;
    let s = ((h + &r * secret) * k_inv) % n;
    if s.is_zero() {
        return Ok(None);
    }
    Ok(Some(Signature::new(r, s)))
}

/// Why a signature failed to verify
fn verify_digest(
    h: &BigUint,
    signature: &Signature,
    public_key: &PublicKey,
) -> Result<(), &'static str> {
    let curve = public_key.curve();
    let n = curve.n();
    let (r, s) = (signature.r(), signature.s());

    if !curve.is_valid_scalar(r) {
        return Err("r outside [1, N-1]");
    }
    if !curve.is_valid_scalar(s) {
        return Err("s outside [1, N-1]");
    }

    let w = math::inv(s, n).map_err(|_| "s not invertible")?;
    let u1 = (h * &w) % n;
    let u2 = (r * &w) % n;

    let v = curve
        .multiply_generator(&u1)
        .and_then(|p1| {
            let p2 = curve.multiply(public_key.point(), &u2)?;
            curve.add(&p1, &p2)
        })
        .map_err(|_| "group arithmetic failed")?;
    if v.is_infinity() {
        return Err("u1·G + u2·Q is at infinity");
    }

    // r < N so it fits the scalar width, as does v.x mod N
    let length = curve.length();
    let expected = bytes_from_number(r, length).map_err(|_| "r too wide")?;
    let actual = bytes_from_number(&(v.x() % n), length).map_err(|_| "x too wide")?;
    if !ct_eq(&expected, &actual) {
        return Err("x(u1·G + u2·Q) mod N != r");
    }
    Ok(())
}

impl Ecdsa {
    /// Sign `message` with a nonce from the operating system RNG
    pub fn sign(message: &str, private_key: &PrivateKey) -> SignatureResult<Signature> {
        Self::sign_with_rng(message, private_key, &mut OsRng)
    }

    /// Sign `message` drawing nonces from `rng`
    ///
    /// A nonce that yields r = 0 or s = 0 is discarded and a fresh one drawn.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        message: &str,
        private_key: &PrivateKey,
        rng: &mut R,
    ) -> SignatureResult<Signature> {
        Self::sign_bytes(message.as_bytes(), private_key, rng)
    }

    /// Sign `message` with a caller-chosen nonce `k`
    ///
    /// Only for reproducing known-answer vectors: reusing `k` across two
    /// messages reveals the private key. Fails if `k` is outside [1, N-1] or
    /// produces r = 0 or s = 0.
    pub fn sign_with_nonce(
        message: &str,
        private_key: &PrivateKey,
        k: &BigUint,
    ) -> SignatureResult<Signature> {
        let curve = private_key.curve();
        to_core_result(validate::scalar_range("k", k, curve.n()), "ECDSA nonce")?;
        let h = sha256_number(message.as_bytes());
        sign_digest(&h, &private_key.secret(), k, curve)?.ok_or_else(|| {
            ApiError::InvalidParameter {
                context: "ECDSA nonce",
                message: "k yields a degenerate signature".into(),
            }
        })
    }

    /// Check `signature` over `message` against `public_key`
    ///
    /// Malformed or mismatching signatures return `false`; this never errors.
    pub fn verify(message: &str, signature: &Signature, public_key: &PublicKey) -> bool {
        Self::verify_bytes(message.as_bytes(), signature, public_key)
    }

    fn sign_bytes<R: RngCore + CryptoRng>(
        message: &[u8],
        private_key: &PrivateKey,
        rng: &mut R,
    ) -> SignatureResult<Signature> {
        let curve = private_key.curve();
        let h = sha256_number(message);
        let secret = private_key.secret();
        let one = BigUint::one();
        let high = curve.n() - &one;

        for attempt in 1..=MAX_NONCE_ATTEMPTS {
            let k = integer::random_between(rng, &one, &high).map_err(ApiError::from)?;
            match sign_digest(&h, &secret, &k, curve)? {
                Some(signature) => return Ok(signature),
                None => debug!(curve = curve.name(), attempt, "degenerate nonce, retrying"),
            }
        }
        Err(ApiError::InvalidParameter {
            context: "ECDSA sign",
            message: format!("no usable nonce after {} attempts", MAX_NONCE_ATTEMPTS),
        })
    }

    fn verify_bytes(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        match verify_digest(&sha256_number(message), signature, public_key) {
            Ok(()) => true,
            Err(reason) => {
                trace!(curve = public_key.curve().name(), reason, "signature rejected");
                false
            }
        }
    }
}

impl SignatureScheme for Ecdsa {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = Signature;
    type KeyPair = (PublicKey, PrivateKey);

    fn name() -> &'static str {
        "ECDSA-SHA256"
    }

    /// Generate a key pair on the default curve
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let secret_key = PrivateKey::generate_with_rng(default_curve(), rng)?;
        let public_key = secret_key.public_key()?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Self::sign_bytes(message, secret_key, &mut OsRng)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if Self::verify_bytes(message, signature, public_key) {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "ECDSA verify",
                message: "signature does not match message and key".into(),
            })
        }
    }
}
