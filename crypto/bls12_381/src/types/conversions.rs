//! Conversions between the byte newtypes and the curve representations
use super::*;
use crate::error::CryptoError;
use std::convert::TryFrom;

impl TryFrom<&[u8]> for PublicKeyBytes {
    type Error = CryptoError;
    fn try_from(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != PublicKeyBytes::SIZE {
            return Err(CryptoError::MalformedPublicKey {
                key_bytes: Some(bytes.to_vec()),
                internal_error: format!(
                    "Expected {} bytes, got {}",
                    PublicKeyBytes::SIZE,
                    bytes.len()
                ),
            });
        }
        let mut buffer = [0u8; PublicKeyBytes::SIZE];
        buffer.copy_from_slice(bytes);
        Ok(PublicKeyBytes(buffer))
    }
}

impl TryFrom<&[u8]> for SignatureBytes {
    type Error = CryptoError;
    fn try_from(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SignatureBytes::SIZE {
            return Err(CryptoError::MalformedSignature {
                sig_bytes: bytes.to_vec(),
                internal_error: format!(
                    "Expected {} bytes, got {}",
                    SignatureBytes::SIZE,
                    bytes.len()
                ),
            });
        }
        let mut buffer = [0u8; SignatureBytes::SIZE];
        buffer.copy_from_slice(bytes);
        Ok(SignatureBytes(buffer))
    }
}

impl TryFrom<PublicKeyBytes> for PublicKey {
    type Error = CryptoError;
    fn try_from(bytes: PublicKeyBytes) -> Result<Self, CryptoError> {
        bls_serde::g1_from_bytes(&bytes.0).map_err(|e| CryptoError::MalformedPublicKey {
            key_bytes: Some(bytes.0.to_vec()),
            internal_error: e.to_string(),
        })
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = CryptoError;
    fn try_from(bytes: SignatureBytes) -> Result<Self, CryptoError> {
        bls_serde::g2_from_bytes(&bytes.0).map_err(|e| CryptoError::MalformedSignature {
            sig_bytes: bytes.0.to_vec(),
            internal_error: e.to_string(),
        })
    }
}

impl From<PublicKey> for PublicKeyBytes {
    fn from(public_key: PublicKey) -> Self {
        PublicKeyBytes(bls_serde::g1_to_bytes(&public_key))
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> Self {
        SignatureBytes(bls_serde::g2_to_bytes(&signature))
    }
}

impl From<SecretKey> for SecretKeyBytes {
    fn from(secret_key: SecretKey) -> Self {
        SecretKeyBytes(bls_serde::fr_to_bytes(&secret_key))
    }
}

impl From<SecretKeyBytes> for SecretKey {
    fn from(bytes: SecretKeyBytes) -> Self {
        bls_serde::fr_from_bytes(&bytes.0)
    }
}
