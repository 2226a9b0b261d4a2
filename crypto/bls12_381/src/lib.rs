#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

//! BLS12-381 beacon signatures: public keys in G1, signatures in G2,
//! messages hashed to G2 under the proof-of-possession ciphersuite.
pub mod api;
mod crypto;
mod error;
pub mod hash;
pub mod serde;
#[cfg(test)]
mod test_utils;
pub mod types;

pub use api::*;
pub use error::{CryptoError, CryptoResult};
