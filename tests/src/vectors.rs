//! Known-answer vectors
//!
//! secp256k1 entries were generated independently and checked with
//! `openssl dgst -verify`; prime256v1 entries come from RFC 6979 A.2.5.
//! All values are big-endian hex.

/// A signature produced with a fixed nonce
#[derive(Debug, Clone, Copy)]
pub struct SignatureVector {
    /// Registered curve name
    pub curve: &'static str,
    /// Signed text
    pub message: &'static str,
    /// Private scalar
    pub secret: &'static str,
    /// Nonce k
    pub nonce: &'static str,
    /// Expected r
    pub r: &'static str,
    /// Expected s
    pub s: &'static str,
    /// Public point x-coordinate
    pub qx: &'static str,
    /// Public point y-coordinate
    pub qy: &'static str,
}

/// Fixed-nonce signatures over both registered curves
pub const SIGNATURE_VECTORS: &[SignatureVector] = &[
    SignatureVector {
        curve: "secp256k1",
        message: "hello",
        secret: "3b1f5a8c6d2e4f7091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f7a1",
        nonce: "6a0f3c9e2b5d8a17c4e6f1a3b5d7e9f0c2a4b6d8e0f1a3c5e7b9d1f3a5c7e9b2",
        r: "6daa14268328ddb4e32fed9ef897b19bce205197aa6d4a09d80b4b984fd9cac8",
        s: "881d841be8a90fb7490b19977f6f4a16cde89dd3c38ab43078b8ee0a968a49af",
        qx: "25bba31c7ae0be991c85ff15e1f3627a3db2e8f730cf90f59abc0fbf648aaa25",
        qy: "264a50a55c277c68b8d2a0ae51e61d85d0d97bde0236b63e2645e9feded8120a",
    },
    SignatureVector {
        curve: "secp256k1",
        message: "genesis",
        secret: "0000000000000000000000000000000000000000000000000000000000000001",
        nonce: "0000000000000000000000000000000000000000000000000000000000000002",
        r: "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        s: "3a78166f5daea4cda310c6677bba6dd9aa9e51e7deb71a9b34839bf906de6799",
        qx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        qy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    },
    SignatureVector {
        curve: "secp256k1",
        message: "héllo wörld",
        secret: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        nonce: "0000000000000000000000000000000000000000000000001234567890abcdef",
        r: "f973a0b87062c389d125d8199e803b832b6ac6bf7867a4f6cd87506060fc4c58",
        s: "a911fa1b6efbb950f25752936f885702702973f647a748c96b18b44c1cb4dff8",
        qx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        qy: "b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777",
    },
    SignatureVector {
        curve: "prime256v1",
        message: "sample",
        secret: "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
        nonce: "a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60",
        r: "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716",
        s: "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
        qx: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6",
        qy: "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
    },
    SignatureVector {
        curve: "prime256v1",
        message: "test",
        secret: "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
        nonce: "d16b6ae827f17175e040871a1c7ec3500192c4c92677336ec2537acaee0008e0",
        r: "f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367",
        s: "019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083",
        qx: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6",
        qy: "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
    },
];

/// A public key with its expected DER and PEM encodings
#[derive(Debug, Clone, Copy)]
pub struct PublicKeyVector {
    /// Registered curve name
    pub curve: &'static str,
    /// `X || Y`
    pub point: &'static str,
    /// SubjectPublicKeyInfo
    pub der: &'static str,
    /// PEM `PUBLIC KEY` document
    pub pem: &'static str,
}

/// Public key encodings, matching `openssl ec -pubout`
pub const PUBLIC_KEY_VECTORS: &[PublicKeyVector] = &[
    PublicKeyVector {
        curve: "secp256k1",
        point: "25bba31c7ae0be991c85ff15e1f3627a3db2e8f730cf90f59abc0fbf648aaa25\
                264a50a55c277c68b8d2a0ae51e61d85d0d97bde0236b63e2645e9feded8120a",
        der: "3056301006072a8648ce3d020106052b8104000a03420004\
              25bba31c7ae0be991c85ff15e1f3627a3db2e8f730cf90f59abc0fbf648aaa25\
              264a50a55c277c68b8d2a0ae51e61d85d0d97bde0236b63e2645e9feded8120a",
        pem: "-----BEGIN PUBLIC KEY-----\n\
              MFYwEAYHKoZIzj0CAQYFK4EEAAoDQgAEJbujHHrgvpkchf8V4fNiej2y6Pcwz5D1\n\
              mrwPv2SKqiUmSlClXCd8aLjSoK5R5h2F0Nl73gI2tj4mRen+3tgSCg==\n\
              -----END PUBLIC KEY-----\n",
    },
    PublicKeyVector {
        curve: "prime256v1",
        point: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
        der: "3059301306072a8648ce3d020106082a8648ce3d03010703420004\
              60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
              7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
        pem: "-----BEGIN PUBLIC KEY-----\n\
              MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEYP7UuiVanTHJYet0xjVtaMBJuJI7\n\
              Yfps5mliLmDyn7Z5A/4QCLi8maQa6elWKLxk8vGyDC1+n1F3o8KU1EYimQ==\n\
              -----END PUBLIC KEY-----\n",
    },
];
