//! Limb encoding of curve points for the pairing circuit
use beacon_crypto_bls12381::serde::FP_SIZE;
use beacon_encoding_limbs as limbs;
use beacon_encoding_limbs::LimbError;
use serde::Serialize;

/// Limb shape expected by the circuit: 7 limbs of 55 bits each,
/// little-endian, enough for a 381 bit Fp element.
pub const LIMB_BITS: usize = 55;
pub const NUM_LIMBS: usize = 7;

/// Input document for the pairing circuit, serialized to JSON for display.
///
/// The field names and array shapes are the circuit's contract: `pubkey`
/// holds the affine (x, y) of the G1 public key, `signature` the affine
/// ((x.c0, x.c1), (y.c0, y.c1)) of the G2 signature, and `hash` the two
/// Fp2 field elements the message hashes to before mapping to the curve.
#[derive(Clone, Debug, Serialize)]
pub struct CircuitInputs {
    pub pubkey: [Vec<String>; 2],
    pub signature: [[Vec<String>; 2]; 2],
    pub hash: [[Vec<String>; 2]; 2],
}

/// Limbs of a big-endian Fp element.
pub fn fp_limbs(bytes: &[u8]) -> Result<Vec<String>, LimbError> {
    limbs::decompose_bytes_be(bytes, LIMB_BITS, NUM_LIMBS)
}

/// Limbs of an Fp2 element given as `[c0, c1]` coordinate bytes.
pub fn fp2_limbs(coordinates: &[[u8; FP_SIZE]; 2]) -> Result<[Vec<String>; 2], LimbError> {
    Ok([fp_limbs(&coordinates[0])?, fp_limbs(&coordinates[1])?])
}
