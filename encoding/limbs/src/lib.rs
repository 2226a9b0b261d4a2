#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

//! Fixed-radix limb encoding of big integers.
//!
//! Arithmetic circuits take their witness values as little-endian arrays
//! of fixed-width digits. A BLS12-381 base-field element (381 bits) fits
//! in 7 limbs of 55 bits each. Limbs are rendered as decimal strings:
//! a 55-bit value does not survive a round trip through a JSON number.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;


#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LimbError {
    #[error("value of {bits} bits does not fit in {num_limbs} limbs of {limb_bits} bits")]
    ValueTooLarge {
        bits: u64,
        limb_bits: usize,
        num_limbs: usize,
    },

    #[error("limb {index} is not an unsigned decimal integer: {limb:?}")]
    BadDigits { index: usize, limb: String },

    #[error("limb {index} does not fit in {limb_bits} bits: {limb}")]
    LimbOutOfRange {
        index: usize,
        limb_bits: usize,
        limb: String,
    },
}

/// Splits `x` into exactly `num_limbs` limbs of `limb_bits` bits,
/// least significant first, each rendered in decimal.
///
/// Values too wide for the limb array are an error; the high bits of a
/// field element must never be dropped on the way into a circuit.
pub fn decompose(
    x: &BigUint,
    limb_bits: usize,
    num_limbs: usize,
) -> Result<Vec<String>, LimbError> {
    if x.bits() > (limb_bits * num_limbs) as u64 {
        return Err(LimbError::ValueTooLarge {
            bits: x.bits(),
            limb_bits,
            num_limbs,
        });
    }
    let base: BigUint = BigUint::one() << limb_bits;
    let mut rest = x.clone();
    let mut limbs = Vec::with_capacity(num_limbs);
    for _ in 0..num_limbs {
        limbs.push((&rest % &base).to_str_radix(10));
        rest >>= limb_bits;
    }
    Ok(limbs)
}

/// `decompose` over a big-endian byte string.
pub fn decompose_bytes_be(
    bytes: &[u8],
    limb_bits: usize,
    num_limbs: usize,
) -> Result<Vec<String>, LimbError> {
    decompose(&BigUint::from_bytes_be(bytes), limb_bits, num_limbs)
}

/// Reassembles a little-endian limb array into the integer it encodes.
/// Inverse of `decompose` on its image; limbs at or above `2^limb_bits`
/// are rejected rather than carried into the next position.
pub fn recompose(limbs: &[String], limb_bits: usize) -> Result<BigUint, LimbError> {
    let mut acc = BigUint::zero();
    for (index, limb) in limbs.iter().enumerate().rev() {
        let digits = BigUint::parse_bytes(limb.as_bytes(), 10).ok_or_else(|| {
            LimbError::BadDigits {
                index,
                limb: limb.clone(),
            }
        })?;
        if digits.bits() > limb_bits as u64 {
            return Err(LimbError::LimbOutOfRange {
                index,
                limb_bits,
                limb: limb.clone(),
            });
        }
        acc = (acc << limb_bits) + digits;
    }
    Ok(acc)
}
