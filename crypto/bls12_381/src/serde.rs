// Serialisation and deserialisation of the pairing library BLS12-381 types.

use ff::PrimeFieldRepr;
use group::{CurveAffine, CurveProjective, EncodedPoint, GroupDecodingError};
use pairing::bls12_381::{FrRepr, G1Affine, G2Affine, G1, G2};

pub const FR_SIZE: usize = 32;
pub const FP_SIZE: usize = 48;
pub const G1_SIZE: usize = 48;
pub const G2_SIZE: usize = 96;


pub fn g1_from_bytes(bytes: &[u8; G1_SIZE]) -> Result<G1, GroupDecodingError> {
    let mut compressed: <G1Affine as CurveAffine>::Compressed = EncodedPoint::empty();
    compressed.as_mut().copy_from_slice(bytes);
    compressed
        .into_affine()
        .map(|affine| affine.into_projective())
}
pub fn g1_to_bytes(g1: &G1) -> [u8; G1_SIZE] {
    let mut bytes = [0u8; G1_SIZE];
    bytes.copy_from_slice(g1.into_affine().into_compressed().as_ref());
    bytes
}
pub fn g2_from_bytes(bytes: &[u8; G2_SIZE]) -> Result<G2, GroupDecodingError> {
    let mut compressed: <G2Affine as CurveAffine>::Compressed = EncodedPoint::empty();
    compressed.as_mut().copy_from_slice(bytes);
    compressed
        .into_affine()
        .map(|affine| affine.into_projective())
}
pub fn g2_to_bytes(g2: &G2) -> [u8; G2_SIZE] {
    let mut bytes = [0u8; G2_SIZE];
    bytes.copy_from_slice(g2.into_affine().into_compressed().as_ref());
    bytes
}
pub fn fr_to_bytes(fr: &FrRepr) -> [u8; FR_SIZE] {
    let mut ans = [0u8; FR_SIZE];
    fr.write_be(&mut ans[0..])
        .expect("The buffer is exactly the size of the representation");
    ans
}
pub fn fr_from_bytes(bytes: &[u8; FR_SIZE]) -> FrRepr {
    let mut ans = FrRepr([0; 4]);
    let mut reader = &bytes[..];
    ans.read_be(&mut reader)
        .expect("The buffer is exactly the size of the representation");
    ans
}

/// Affine coordinates of a G1 point as big endian field element bytes.
///
/// The point at infinity has no affine coordinates; it yields all
/// zero bytes rather than the flagged uncompressed encoding.
pub fn g1_coordinate_bytes(g1: &G1) -> ([u8; FP_SIZE], [u8; FP_SIZE]) {
    let affine = g1.into_affine();
    if affine.is_zero() {
        return ([0u8; FP_SIZE], [0u8; FP_SIZE]);
    }
    let uncompressed = affine.into_uncompressed();
    let bytes = uncompressed.as_ref();
    let mut x = [0u8; FP_SIZE];
    let mut y = [0u8; FP_SIZE];
    x.copy_from_slice(&bytes[0..FP_SIZE]);
    y.copy_from_slice(&bytes[FP_SIZE..2 * FP_SIZE]);
    (x, y)
}

/// Affine coordinates of a G2 point, each as `[c0, c1]` where the
/// field element is `c0 + c1 * I`.
///
/// The uncompressed encoding stores c1 before c0, so the halves are
/// swapped back here.
pub fn g2_coordinate_bytes(g2: &G2) -> ([[u8; FP_SIZE]; 2], [[u8; FP_SIZE]; 2]) {
    let affine = g2.into_affine();
    if affine.is_zero() {
        return ([[0u8; FP_SIZE]; 2], [[0u8; FP_SIZE]; 2]);
    }
    let uncompressed = affine.into_uncompressed();
    let bytes = uncompressed.as_ref();
    let mut x = [[0u8; FP_SIZE]; 2];
    let mut y = [[0u8; FP_SIZE]; 2];
    x[1].copy_from_slice(&bytes[0..FP_SIZE]);
    x[0].copy_from_slice(&bytes[FP_SIZE..2 * FP_SIZE]);
    y[1].copy_from_slice(&bytes[2 * FP_SIZE..3 * FP_SIZE]);
    y[0].copy_from_slice(&bytes[3 * FP_SIZE..4 * FP_SIZE]);
    (x, y)
}
