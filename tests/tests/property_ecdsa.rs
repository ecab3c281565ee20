//! Property-based tests for ECDSA signing and key encodings

use ecsig_algorithms::ec::supported_curves;
use ecsig_sign::{Ecdsa, PrivateKey, PublicKey, Signature};
use ecsig_tests::test_rng;
use num_bigint::BigUint;
use proptest::prelude::*;

/// Index into the curve registry
fn curve_index() -> impl Strategy<Value = usize> {
    0..supported_curves().len()
}

proptest! {
    // every case runs several scalar multiplications
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_then_verify(seed in any::<u64>(), curve in curve_index(), message in ".{0,64}") {
        let curve = &supported_curves()[curve];
        let mut rng = test_rng(seed);
        let key = PrivateKey::generate_with_rng(curve, &mut rng).unwrap();
        let public_key = key.public_key().unwrap();
        let signature = Ecdsa::sign_with_rng(&message, &key, &mut rng).unwrap();

        prop_assert!(Ecdsa::verify(&message, &signature, &public_key));
        let n = curve.n();
        prop_assert!(signature.r() < n && signature.s() < n);
    }

    #[test]
    fn altered_message_fails(seed in any::<u64>(), message in "[a-z]{1,32}", flip in any::<usize>()) {
        let curve = &supported_curves()[0];
        let mut rng = test_rng(seed);
        let key = PrivateKey::generate_with_rng(curve, &mut rng).unwrap();
        let signature = Ecdsa::sign_with_rng(&message, &key, &mut rng).unwrap();

        let mut bytes = message.into_bytes();
        let idx = flip % bytes.len();
        // stays within ASCII letters
        bytes[idx] ^= 0x20;
        let altered = String::from_utf8(bytes).unwrap();
        prop_assert!(!Ecdsa::verify(&altered, &signature, &key.public_key().unwrap()));
    }

    #[test]
    fn altered_signature_fails(seed in any::<u64>(), delta in 1u64..1_000_000, on_r in any::<bool>()) {
        let curve = &supported_curves()[1];
        let mut rng = test_rng(seed);
        let key = PrivateKey::generate_with_rng(curve, &mut rng).unwrap();
        let signature = Ecdsa::sign_with_rng("ledger block", &key, &mut rng).unwrap();

        let delta = BigUint::from(delta);
        let tampered = if on_r {
            Signature::new((signature.r() + &delta) % curve.n(), signature.s().clone())
        } else {
            Signature::new(signature.r().clone(), (signature.s() + &delta) % curve.n())
        };
        prop_assert!(!Ecdsa::verify("ledger block", &tampered, &key.public_key().unwrap()));
    }

    #[test]
    fn other_key_fails(seed in any::<u64>(), curve in curve_index()) {
        let curve = &supported_curves()[curve];
        let mut rng = test_rng(seed);
        let key = PrivateKey::generate_with_rng(curve, &mut rng).unwrap();
        let other = PrivateKey::generate_with_rng(curve, &mut rng).unwrap();
        let signature = Ecdsa::sign_with_rng("hello", &key, &mut rng).unwrap();
        prop_assert!(!Ecdsa::verify("hello", &signature, &other.public_key().unwrap()));
    }

    #[test]
    fn key_encodings_round_trip(seed in any::<u64>(), curve in curve_index()) {
        let curve = &supported_curves()[curve];
        let key = PrivateKey::generate_with_rng(curve, &mut test_rng(seed)).unwrap();
        let public_key = key.public_key().unwrap();

        prop_assert_eq!(&PublicKey::from_pem(&public_key.to_pem().unwrap()).unwrap(), &public_key);
        prop_assert_eq!(&PublicKey::from_der(&public_key.to_der().unwrap()).unwrap(), &public_key);
        prop_assert_eq!(
            &PublicKey::from_bytes(&public_key.to_bytes(false), curve).unwrap(),
            &public_key
        );

        prop_assert_eq!(&PrivateKey::from_pem(&key.to_pem().unwrap()).unwrap(), &key);
        prop_assert_eq!(&PrivateKey::from_der(&key.to_der().unwrap()).unwrap(), &key);
        prop_assert_eq!(&PrivateKey::from_bytes(&key.to_bytes(), curve).unwrap(), &key);
    }

    #[test]
    fn corrupted_der_never_yields_a_different_valid_key(seed in any::<u64>(), pos in any::<usize>(), bit in 0u8..8) {
        let curve = &supported_curves()[0];
        let key = PrivateKey::generate_with_rng(curve, &mut test_rng(seed)).unwrap();
        let public_key = key.public_key().unwrap();
        let mut der = public_key.to_der().unwrap();
        let idx = pos % der.len();
        der[idx] ^= 1 << bit;

        // a flipped coordinate bit takes the point off the curve
        prop_assert!(PublicKey::from_der(&der).is_err());
    }
}
