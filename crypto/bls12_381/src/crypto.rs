//! Signing and verification of beacon rounds
use crate::hash;
use crate::types::{PublicKey, SecretKey, Signature};
use ff::Field;
use group::{CurveAffine, CurveProjective};
use pairing::bls12_381::{Bls12, Fr, G1Affine};
use pairing::Engine;
use rand::{CryptoRng, Rng};

/// The message signed for a beacon round: the SHA-256 digest of the round
/// number as 8 big endian bytes.
pub fn round_message(round: u64) -> [u8; 32] {
    let mut state = miracl_core::hash256::HASH256::new();
    state.process_array(&round.to_be_bytes());
    state.hash()
}

pub fn keypair_from_rng<R: Rng + CryptoRng>(rng: &mut R) -> (SecretKey, PublicKey) {
    let secret_key = Fr::random(rng);
    let public_key = G1Affine::one().mul(secret_key);
    (secret_key.into(), public_key)
}

pub fn sign_message(message: &[u8], secret_key: SecretKey) -> Signature {
    let mut signature = hash::hash_to_g2(hash::BLS_SIG_G2_DST, message);
    signature.mul_assign(secret_key);
    signature
}

/// Checks `e(public_key, H(message)) == e(g1, signature)`.
pub fn verify_message_signature(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
) -> bool {
    let point = hash::hash_to_g2(hash::BLS_SIG_G2_DST, message);
    Bls12::pairing(public_key.into_affine(), point.into_affine())
        == Bls12::pairing(G1Affine::one(), signature.into_affine())
}
