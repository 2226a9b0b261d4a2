//! Hashing to BLS12-381 primitives

use crate::serde::FP_SIZE;
use group::{CurveAffine, EncodedPoint};
use pairing::bls12_381::{G2Affine, G2};

#[cfg(test)]
mod tests;

/// Domain separation tag of the proof of possession ciphersuite,
/// `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_`.
pub const BLS_SIG_G2_DST: &[u8; 43] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

pub fn hash_to_g2(domain: &[u8], msg: &[u8]) -> G2 {
    map_to_g2(&hash_to_field_g2(domain, msg))
}

/// The two field elements a message hashes to, before mapping to the curve.
pub fn hash_to_field_g2(dst: &[u8], msg: &[u8]) -> [miracl_core::bls12381::fp2::FP2; 2] {
    use miracl_core::bls12381::ecp;
    use miracl_core::hmac;
    hash_to_field2_bls12381(hmac::MC_SHA2, ecp::HASH_TYPE, dst, msg, 2)
}

// Based on MIRACL's TestHTP.rs.
fn hash_to_field2_bls12381(
    hash: usize,
    hlen: usize,
    dst: &[u8],
    msg: &[u8],
    ctr: usize,
) -> [miracl_core::bls12381::fp2::FP2; 2] {
    use miracl_core::bls12381::big::BIG;
    use miracl_core::bls12381::dbig::DBIG;
    use miracl_core::bls12381::fp::FP;
    use miracl_core::bls12381::fp2::FP2;
    use miracl_core::bls12381::rom;
    use miracl_core::hmac;

    let mut uu: [FP2; 2] = [FP2::new(), FP2::new()];

    let qq = BIG::new_ints(&rom::MODULUS);
    let kk = qq.nbits();
    let rr = BIG::new_ints(&rom::CURVE_ORDER);
    let mm = rr.nbits();
    let ll = ceil(kk + ceil(mm, 2), 8);
    let mut okm: [u8; 512] = [0; 512];
    hmac::xmd_expand(hash, hlen, &mut okm, 2 * ll * ctr, &dst, &msg);
    let mut fd: [u8; 256] = [0; 256];
    for i in 0..ctr {
        for j in 0..ll {
            fd[j] = okm[2 * i * ll + j];
        }
        let mut dx = DBIG::frombytes(&fd[0..ll]);
        let w1 = FP::new_big(&dx.dmod(&qq));
        for j in 0..ll {
            fd[j] = okm[(2 * i + 1) * ll + j];
        }
        let mut dx = DBIG::frombytes(&fd[0..ll]);
        let w2 = FP::new_big(&dx.dmod(&qq));
        uu[i].copy(&FP2::new_fps(&w1, &w2));
    }
    uu
}

// Returns ceil(a/b). Assumes a>0.
fn ceil(a: usize, b: usize) -> usize {
    (a - 1) / b + 1
}

// Hash to curve via MIRACL.
// This follows https://datatracker.ietf.org/doc/draft-irtf-cfrg-hash-to-curve/
pub fn map_to_g2(u: &[miracl_core::bls12381::fp2::FP2; 2]) -> G2 {
    use miracl_core::bls12381::ecp2::ECP2;

    let mut p = ECP2::map2point(&u[0]);
    let p1 = ECP2::map2point(&u[1]);
    p.add(&p1);
    p.cfp();
    p.affine();

    g2_from_miracl(&p)
}

// Conversions from Miracl.
pub fn g2_from_miracl(p: &miracl_core::bls12381::ecp2::ECP2) -> G2 {
    // MIRACL writes each Fp2 coordinate as c0 <> c1, pairing expects c1 <> c0.
    // Thankfully both libraries encode field elements in big-endian.
    let (x_c0, x_c1) = fp2_to_bytes(&p.getx());
    let (y_c0, y_c1) = fp2_to_bytes(&p.gety());

    // pairing: 3-bit tag <> x-coord <> y-coord
    // A tag of 000 means an uncompressed, finite point.
    let mut buf: [u8; 4 * FP_SIZE] = [0; 4 * FP_SIZE];
    buf[0..FP_SIZE].copy_from_slice(&x_c1);
    buf[FP_SIZE..2 * FP_SIZE].copy_from_slice(&x_c0);
    buf[2 * FP_SIZE..3 * FP_SIZE].copy_from_slice(&y_c1);
    buf[3 * FP_SIZE..4 * FP_SIZE].copy_from_slice(&y_c0);

    let mut pairing_p: <G2Affine as CurveAffine>::Uncompressed = EncodedPoint::empty();
    pairing_p.as_mut().copy_from_slice(&buf);
    pairing_p
        .into_affine()
        .expect("The MIRACL point is a valid group element")
        .into_projective()
}

/// Big endian bytes of an Fp2 element as `(c0, c1)`.
pub fn fp2_to_bytes(fp2: &miracl_core::bls12381::fp2::FP2) -> ([u8; FP_SIZE], [u8; FP_SIZE]) {
    use miracl_core::bls12381::fp2::FP2;

    let mut w = FP2::new_copy(fp2);
    let mut c0 = [0u8; FP_SIZE];
    let mut c1 = [0u8; FP_SIZE];
    w.geta().tobytes(&mut c0);
    w.getb().tobytes(&mut c1);
    (c0, c1)
}
