//! Tests for the external API
use crate::api;
use crate::types::{PublicKeyBytes, SignatureBytes};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

#[test]
fn keypair_from_rng_should_be_deterministic() {
    assert_eq!(
        api::keypair_from_rng(&mut ChaCha20Rng::seed_from_u64(42)),
        api::keypair_from_rng(&mut ChaCha20Rng::seed_from_u64(42))
    );
}

#[test]
fn signatures_should_verify() {
    let mut csprng = ChaCha20Rng::seed_from_u64(42);
    let (secret_key, public_key) = api::keypair_from_rng(&mut csprng);
    let message = api::round_message(1);
    let signature = api::sign(&message, secret_key).expect("Failed to sign");
    assert_eq!(Ok(()), api::verify(&message, signature, public_key));
}

#[test]
fn corrupted_messages_should_not_verify() {
    let mut csprng = ChaCha20Rng::seed_from_u64(42);
    let (secret_key, public_key) = api::keypair_from_rng(&mut csprng);
    let message = api::round_message(1);
    let signature = api::sign(&message, secret_key).expect("Failed to sign");
    match api::verify(&api::round_message(2), signature, public_key) {
        Err(error) => assert!(
            error.is_signature_verification_error(),
            "Unexpected error: {:?}",
            error
        ),
        Ok(()) => panic!("A signature over another round should not verify"),
    }
}

#[test]
fn other_public_keys_should_not_verify() {
    let mut csprng = ChaCha20Rng::seed_from_u64(42);
    let (secret_key, _public_key) = api::keypair_from_rng(&mut csprng);
    let (_secret_key, other_public_key) = api::keypair_from_rng(&mut csprng);
    let message = api::round_message(1);
    let signature = api::sign(&message, secret_key).expect("Failed to sign");
    match api::verify(&message, signature, other_public_key) {
        Err(error) => assert!(
            error.is_signature_verification_error(),
            "Unexpected error: {:?}",
            error
        ),
        Ok(()) => panic!("A signature should not verify under another public key"),
    }
}

#[test]
fn malformed_public_keys_should_be_reported() {
    let mut csprng = ChaCha20Rng::seed_from_u64(42);
    let (secret_key, _public_key) = api::keypair_from_rng(&mut csprng);
    let message = api::round_message(1);
    let signature = api::sign(&message, secret_key).expect("Failed to sign");
    let malformed = PublicKeyBytes([1u8; PublicKeyBytes::SIZE]);
    match api::verify(&message, signature, malformed) {
        Err(error) => assert!(
            error.is_malformed_public_key(),
            "Unexpected error: {:?}",
            error
        ),
        Ok(()) => panic!("A malformed public key should not parse"),
    }
}

#[test]
fn malformed_signatures_should_be_reported() {
    let mut csprng = ChaCha20Rng::seed_from_u64(42);
    let (_secret_key, public_key) = api::keypair_from_rng(&mut csprng);
    let message = api::round_message(1);
    let malformed = SignatureBytes([1u8; SignatureBytes::SIZE]);
    match api::verify(&message, malformed, public_key) {
        Err(error) => assert!(
            error.is_malformed_signature(),
            "Unexpected error: {:?}",
            error
        ),
        Ok(()) => panic!("A malformed signature should not parse"),
    }
}
