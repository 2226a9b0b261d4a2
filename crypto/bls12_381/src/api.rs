//! External API for the beacon signature library
use super::crypto;
use super::types::{PublicKeyBytes, SecretKeyBytes, SignatureBytes};
use crate::error::{CryptoError, CryptoResult};
use rand::{CryptoRng, Rng};
use std::convert::TryInto;

#[cfg(test)]
mod tests;

/// Returns the message signed for a beacon round: the SHA-256 digest of
/// the round number as 8 big endian bytes.
pub fn round_message(round: u64) -> [u8; 32] {
    crypto::round_message(round)
}

pub fn keypair_from_rng<R: Rng + CryptoRng>(rng: &mut R) -> (SecretKeyBytes, PublicKeyBytes) {
    let (secret_key, public_key) = crypto::keypair_from_rng(rng);
    (secret_key.into(), public_key.into())
}

/// Sign a message
/// Note: This hashes the message to G2 under the proof of possession
/// ciphersuite before signing.
pub fn sign(message: &[u8], secret_key: SecretKeyBytes) -> CryptoResult<SignatureBytes> {
    Ok(crypto::sign_message(message, secret_key.into()).into())
}

/// Verifies a signature over `message`.
///
/// As part of the verification, it is also verified that the public key
/// and the signature are points on the curve and in the right subgroup.
pub fn verify(
    message: &[u8],
    signature_bytes: SignatureBytes,
    public_key_bytes: PublicKeyBytes,
) -> CryptoResult<()> {
    let signature = signature_bytes.try_into()?;
    let public_key = public_key_bytes.try_into()?;
    if crypto::verify_message_signature(message, &signature, &public_key) {
        Ok(())
    } else {
        Err(CryptoError::SignatureVerification {
            public_key_bytes: public_key_bytes.0.to_vec(),
            sig_bytes: signature_bytes.0.to_vec(),
            internal_error: "Verification of beacon signature failed".to_string(),
        })
    }
}
