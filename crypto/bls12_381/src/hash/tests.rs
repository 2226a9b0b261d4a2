//! Tests for hashing to the curve
use super::*;
use miracl_core::bls12381::ecp2::ECP2;

/// sha256 of the round number 1 as 8 big endian bytes.
const ROUND_1_MESSAGE: &str = "cd2662154e6d76b2b2b92e70c0cac3ccf534f9b74eb5b89819ec509083d00a50";

/// Field elements for `ROUND_1_MESSAGE` under the proof of possession tag,
/// per RFC 9380 hash_to_field with count 2.
const ROUND_1_U0_C0: &str = "11644f1d15c458e2abbcec480e4bd87a3372ea10d7e14f0158be7d6a1e31a3d9f970df19e4135c420a9fa5460fda4f3c";
const ROUND_1_U0_C1: &str = "0357043fb4c2e1098b18e2178bb319f92771aee313c9d1acc56ad56784e42268e1741fb9dfdec0b45024f9f7e91eb124";
const ROUND_1_U1_C0: &str = "187ce45ce1442e6d22adaaafb728a0288a8caf6964ec68d1f256722dd3f2ba58852ffab35683ea265b4d43cce0c8f36a";
const ROUND_1_U1_C1: &str = "10fa2b10fa6a8690d66f9ab60f9fedd9e2b7ee316ef9d6ba57054b506e44d000836e85e270219764fc6532032681b845";

const G2_GENERATOR_X_C0: &str = "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8";
const G2_GENERATOR_X_C1: &str = "13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e";

#[test]
fn hash_to_field_should_match_test_vectors() {
    let msg = hex::decode(ROUND_1_MESSAGE).expect("Invalid test vector hex encoding");
    let u = hash_to_field_g2(BLS_SIG_G2_DST, &msg);
    let (c0, c1) = fp2_to_bytes(&u[0]);
    assert_eq!(ROUND_1_U0_C0, hex::encode(&c0[..]), "u[0].c0 does not match");
    assert_eq!(ROUND_1_U0_C1, hex::encode(&c1[..]), "u[0].c1 does not match");
    let (c0, c1) = fp2_to_bytes(&u[1]);
    assert_eq!(ROUND_1_U1_C0, hex::encode(&c0[..]), "u[1].c0 does not match");
    assert_eq!(ROUND_1_U1_C1, hex::encode(&c1[..]), "u[1].c1 does not match");
}

#[test]
fn hash_to_g2_should_be_the_mapped_field_elements() {
    let msg = hex::decode(ROUND_1_MESSAGE).expect("Invalid test vector hex encoding");
    assert_eq!(
        hash_to_g2(BLS_SIG_G2_DST, &msg),
        map_to_g2(&hash_to_field_g2(BLS_SIG_G2_DST, &msg))
    );
}

#[test]
fn hash_to_g2_should_be_deterministic() {
    assert_eq!(
        hash_to_g2(BLS_SIG_G2_DST, b"abc"),
        hash_to_g2(BLS_SIG_G2_DST, b"abc")
    );
}

#[test]
fn hash_to_g2_should_separate_domains() {
    assert_ne!(
        hash_to_g2(b"domain one", b"abc"),
        hash_to_g2(b"domain two", b"abc")
    );
}

#[test]
fn hash_to_g2_should_separate_messages() {
    assert_ne!(
        hash_to_g2(BLS_SIG_G2_DST, b"abc"),
        hash_to_g2(BLS_SIG_G2_DST, b"abd")
    );
}

#[test]
fn g2_from_miracl_should_preserve_the_generator() {
    assert_eq!(
        g2_from_miracl(&ECP2::generator()),
        G2Affine::one().into_projective()
    );
}

#[test]
fn fp2_to_bytes_should_match_the_generator_x_coordinate() {
    let (c0, c1) = fp2_to_bytes(&ECP2::generator().getx());
    assert_eq!(G2_GENERATOR_X_C0, hex::encode(&c0[..]));
    assert_eq!(G2_GENERATOR_X_C1, hex::encode(&c1[..]));
}
