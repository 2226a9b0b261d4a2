//! Beacon signature types
#![allow(clippy::unit_arg)] // Arbitrary is a unit arg in: derive(proptest_derive::Arbitrary)
use crate::serde as bls_serde;
use pairing::bls12_381::{FrRepr, G1, G2};
use zeroize::Zeroize;

pub mod conversions;
mod generic_traits;

pub type SecretKey = FrRepr;
pub type PublicKey = G1;
pub type Signature = G2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Zeroize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct SecretKeyBytes(pub [u8; SecretKeyBytes::SIZE]);
impl SecretKeyBytes {
    pub const SIZE: usize = bls_serde::FR_SIZE;
}

#[derive(Copy, Clone)]
pub struct PublicKeyBytes(pub [u8; PublicKeyBytes::SIZE]);
impl PublicKeyBytes {
    pub const SIZE: usize = bls_serde::G1_SIZE;
}

#[derive(Copy, Clone)]
pub struct SignatureBytes(pub [u8; SignatureBytes::SIZE]);
impl SignatureBytes {
    pub const SIZE: usize = bls_serde::G2_SIZE;
}
