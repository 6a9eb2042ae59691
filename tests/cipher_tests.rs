//! Integration tests for the CredVault keystream cipher.

use credvault::crypto::{decrypt, encrypt};

// ---------------------------------------------------------------------------
// Round-trip and involution
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = b"hunter2";
    let plaintext = b"email,alice,p@ss,a@x.com,";

    let ciphertext = encrypt(plaintext, key).expect("encrypt should succeed");
    assert_ne!(ciphertext.as_slice(), plaintext.as_slice());

    let recovered = decrypt(&ciphertext, key).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn transform_is_its_own_inverse() {
    let key = b"k3y";
    let data = b"some stored bytes";

    // encrypt and decrypt are the same operation: applying either one
    // twice yields the original input.
    let once = encrypt(data, key).unwrap();
    let twice = encrypt(&once, key).unwrap();
    assert_eq!(twice, data);
}

// ---------------------------------------------------------------------------
// Length and key cycling
// ---------------------------------------------------------------------------

#[test]
fn output_length_equals_input_length() {
    let key = b"longer-than-the-data";
    for len in [0usize, 1, 7, 64, 1000] {
        let data = vec![0x5Au8; len];
        let out = encrypt(&data, key).unwrap();
        assert_eq!(out.len(), len);
    }
}

#[test]
fn key_repeats_across_the_input() {
    // With a one-byte key every output byte is input ^ key.
    let out = encrypt(&[0x00, 0xFF, 0x10], &[0x0F]).unwrap();
    assert_eq!(out, vec![0x0F, 0xF0, 0x1F]);

    // With a two-byte key the key alternates.
    let out = encrypt(&[0x00, 0x00, 0x00, 0x00], &[0xAA, 0xBB]).unwrap();
    assert_eq!(out, vec![0xAA, 0xBB, 0xAA, 0xBB]);
}

#[test]
fn empty_input_yields_empty_output() {
    let out = encrypt(&[], b"key").unwrap();
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// Empty key is rejected
// ---------------------------------------------------------------------------

#[test]
fn empty_key_is_an_error() {
    assert!(encrypt(b"data", &[]).is_err());
    assert!(decrypt(b"data", &[]).is_err());
}
