//! Generate pairing-circuit inputs from a drand beacon round
//!
//! Usage:
//!
//! beacon-gen-inputs ROUND PUBLIC_KEY SIGNATURE [--out PATH]
//!
//! Where ROUND is the decimal round number, PUBLIC_KEY is the beacon's
//! compressed G1 public key as 96 hex characters and SIGNATURE is the
//! round's compressed G2 signature as 192 hex characters.
//!
//! The tool prints the message for the round, the hash-to-field elements,
//! the mapped G2 point and the affine coordinates of the key and the
//! signature, each with its limb encoding, and finally the circuit input
//! document:
//!
//! ```json
//! {
//!   "pubkey": [
//!     ["16589478066046651", "22658679592837110", ...],
//!     ...
//!   ],
//!   "signature": [...],
//!   "hash": [...]
//! }
//! ```
//!
//! A signature that parses but does not verify still produces inputs; the
//! verdict is reported as `valid signature? false`.

use anyhow::{Context, Result};
use beacon_crypto_bls12381::serde as bls_serde;
use beacon_crypto_bls12381::serde::FP_SIZE;
use beacon_crypto_bls12381::types::{PublicKey, PublicKeyBytes, Signature, SignatureBytes};
use beacon_crypto_bls12381::{api, hash};
use std::convert::TryFrom;
use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;

mod inputs;

use inputs::CircuitInputs;

#[derive(Debug, StructOpt)]
struct Opt {
    /// Beacon round number
    round: u64,
    /// Compressed G1 public key, 96 hex characters
    public_key: String,
    /// Compressed G2 signature, 192 hex characters
    signature: String,
    /// Also write the circuit input document to this file
    #[structopt(long = "out")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let public_key_bytes = decode_public_key(&opt.public_key)?;
    let signature_bytes = decode_signature(&opt.signature)?;
    let message = api::round_message(opt.round);

    println!("round:      {}", opt.round);
    println!("message:    {}", hex::encode(&message[..]));
    println!("public key: {}", hex::encode(&public_key_bytes.0[..]));
    println!("signature:  {}", hex::encode(&signature_bytes.0[..]));
    println!();

    let valid = match api::verify(&message, signature_bytes, public_key_bytes) {
        Ok(()) => true,
        Err(error) if error.is_signature_verification_error() => false,
        Err(error) => return Err(error).context("could not verify the signature"),
    };
    println!("valid signature? {}", valid);
    println!();

    let u = hash::hash_to_field_g2(hash::BLS_SIG_G2_DST, &message);
    let u_bytes = {
        let (u0_c0, u0_c1) = hash::fp2_to_bytes(&u[0]);
        let (u1_c0, u1_c1) = hash::fp2_to_bytes(&u[1]);
        [[u0_c0, u0_c1], [u1_c0, u1_c1]]
    };
    println!("u[0] = {}", fp2_hex(&u_bytes[0]));
    println!("u[1] = {}", fp2_hex(&u_bytes[1]));
    let u_limbs = [
        inputs::fp2_limbs(&u_bytes[0])?,
        inputs::fp2_limbs(&u_bytes[1])?,
    ];
    println!("u_array:");
    println!("{}", serde_json::to_string_pretty(&u_limbs)?);
    println!();

    let point = hash::map_to_g2(&u);
    let (point_x, point_y) = bls_serde::g2_coordinate_bytes(&point);
    println!("map to G2:");
    println!("x = {}", fp2_hex(&point_x));
    println!("y = {}", fp2_hex(&point_y));
    let point_limbs = [inputs::fp2_limbs(&point_x)?, inputs::fp2_limbs(&point_y)?];
    println!("{}", serde_json::to_string_pretty(&point_limbs)?);
    println!();

    let public_key =
        PublicKey::try_from(public_key_bytes).context("could not decode the public key")?;
    let (pk_x, pk_y) = bls_serde::g1_coordinate_bytes(&public_key);
    println!("public key:");
    println!("x = 0x{}", hex::encode(&pk_x[..]));
    println!("y = 0x{}", hex::encode(&pk_y[..]));
    let pubkey_limbs = [inputs::fp_limbs(&pk_x)?, inputs::fp_limbs(&pk_y)?];
    println!("{}", serde_json::to_string_pretty(&pubkey_limbs)?);
    println!();

    let signature =
        Signature::try_from(signature_bytes).context("could not decode the signature")?;
    let (sig_x, sig_y) = bls_serde::g2_coordinate_bytes(&signature);
    println!("signature:");
    println!("x = {}", fp2_hex(&sig_x));
    println!("y = {}", fp2_hex(&sig_y));
    let signature_limbs = [inputs::fp2_limbs(&sig_x)?, inputs::fp2_limbs(&sig_y)?];
    println!("{}", serde_json::to_string_pretty(&signature_limbs)?);
    println!();

    let document = CircuitInputs {
        pubkey: pubkey_limbs,
        signature: signature_limbs,
        hash: u_limbs,
    };
    let rendered = serde_json::to_string_pretty(&document)?;
    println!("circuit inputs:");
    println!("{}", rendered);
    if let Some(path) = &opt.out {
        fs::write(path, &rendered)
            .with_context(|| format!("could not write {}", path.display()))?;
    }
    Ok(())
}

fn decode_public_key(hex_string: &str) -> Result<PublicKeyBytes> {
    let bytes = hex::decode(hex_string).context("the public key is not valid hex")?;
    PublicKeyBytes::try_from(&bytes[..]).context("could not parse the public key")
}

fn decode_signature(hex_string: &str) -> Result<SignatureBytes> {
    let bytes = hex::decode(hex_string).context("the signature is not valid hex")?;
    SignatureBytes::try_from(&bytes[..]).context("could not parse the signature")
}

/// Formats Fp2 coordinate bytes as `0x<c0> + I * 0x<c1>`.
fn fp2_hex(value: &[[u8; FP_SIZE]; 2]) -> String {
    format!(
        "0x{} + I * 0x{}",
        hex::encode(&value[0][..]),
        hex::encode(&value[1][..])
    )
}
