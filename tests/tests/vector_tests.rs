//! Known-answer tests for signatures and public key encodings

use ecsig_algorithms::ec::curve_by_name;
use ecsig_sign::{Ecdsa, PublicKey, Signature};
use ecsig_tests::vector_key;
use ecsig_tests::vectors::{PUBLIC_KEY_VECTORS, SIGNATURE_VECTORS};
use ecsig_utils::binary::{binary_from_hex, number_from_hex};

#[test]
fn test_signature_vectors() {
    for vector in SIGNATURE_VECTORS {
        let key = vector_key(vector);
        let nonce = number_from_hex(vector.nonce).unwrap();
        let signature = Ecdsa::sign_with_nonce(vector.message, &key, &nonce).unwrap();

        assert_eq!(
            *signature.r(),
            number_from_hex(vector.r).unwrap(),
            "r mismatch for {:?}",
            vector
        );
        assert_eq!(
            *signature.s(),
            number_from_hex(vector.s).unwrap(),
            "s mismatch for {:?}",
            vector
        );

        let public_key = key.public_key().unwrap();
        assert_eq!(public_key.to_hex(), format!("{}{}", vector.qx, vector.qy));
        assert!(Ecdsa::verify(vector.message, &signature, &public_key));
    }
}

#[test]
fn test_signature_vectors_verify_from_imported_key() {
    for vector in SIGNATURE_VECTORS {
        let public_key =
            PublicKey::from_hex(&format!("{}{}", vector.qx, vector.qy), vector.curve).unwrap();
        let signature = Signature::new(
            number_from_hex(vector.r).unwrap(),
            number_from_hex(vector.s).unwrap(),
        );
        assert!(Ecdsa::verify(vector.message, &signature, &public_key));

        let altered = format!("{}!", vector.message);
        assert!(!Ecdsa::verify(&altered, &signature, &public_key));
    }
}

#[test]
fn test_signature_vectors_raw_bytes() {
    for vector in SIGNATURE_VECTORS {
        let curve = curve_by_name(vector.curve).unwrap();
        let bytes = binary_from_hex(&format!("{}{}", vector.r, vector.s)).unwrap();
        let signature = Signature::from_bytes(&bytes, curve).unwrap();
        assert_eq!(signature.to_bytes(curve).unwrap(), bytes);
    }
}

#[test]
fn test_public_key_vectors() {
    for vector in PUBLIC_KEY_VECTORS {
        let curve = curve_by_name(vector.curve).unwrap();
        let point = binary_from_hex(vector.point).unwrap();
        let der = binary_from_hex(vector.der).unwrap();

        let public_key = PublicKey::from_bytes(&point, curve).unwrap();
        assert_eq!(public_key.to_der().unwrap(), der);
        assert_eq!(public_key.to_pem().unwrap(), vector.pem);

        assert_eq!(PublicKey::from_der(&der).unwrap(), public_key);
        assert_eq!(PublicKey::from_pem(vector.pem).unwrap(), public_key);
        assert_eq!(PublicKey::from_pem(vector.pem).unwrap().curve().name(), vector.curve);
    }
}

#[test]
fn test_public_key_pem_with_crlf_and_surrounding_text() {
    let vector = &PUBLIC_KEY_VECTORS[0];
    let wrapped = format!("key for node-7\r\n{}trailer\r\n", vector.pem.replace('\n', "\r\n"));
    let expected = PublicKey::from_pem(vector.pem).unwrap();
    assert_eq!(PublicKey::from_pem(&wrapped).unwrap(), expected);
}
