//! Helpers for testing beacon signatures
use crate::api;
use crate::types::{PublicKeyBytes, SecretKeyBytes};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

pub fn keypair_from_seed(seed: u64) -> (SecretKeyBytes, PublicKeyBytes) {
    api::keypair_from_rng(&mut ChaCha20Rng::seed_from_u64(seed))
}

/// Asserts that a signature over the message of `round` verifies.
pub fn signed_round_verifies(round: u64, seed: u64) {
    let (secret_key, public_key) = keypair_from_seed(seed);
    let message = api::round_message(round);
    let signature = api::sign(&message, secret_key).expect("Failed to sign");
    assert_eq!(
        Ok(()),
        api::verify(&message, signature, public_key),
        "Round {} signed with seed {} does not verify",
        round,
        seed
    );
}
