//! Error type shared by all operations of this crate
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum CryptoError {
    /// Public key could not be parsed or is otherwise invalid.
    MalformedPublicKey {
        key_bytes: Option<Vec<u8>>,
        internal_error: String,
    },
    /// Signature could not be parsed or is otherwise invalid.
    MalformedSignature {
        sig_bytes: Vec<u8>,
        internal_error: String,
    },
    /// Signature could not be verified.
    SignatureVerification {
        public_key_bytes: Vec<u8>,
        sig_bytes: Vec<u8>,
        internal_error: String,
    },
}

impl CryptoError {
    pub fn is_malformed_public_key(&self) -> bool {
        match self {
            CryptoError::MalformedPublicKey { .. } => true,
            _ => false,
        }
    }

    pub fn is_malformed_signature(&self) -> bool {
        match self {
            CryptoError::MalformedSignature { .. } => true,
            _ => false,
        }
    }

    pub fn is_signature_verification_error(&self) -> bool {
        match self {
            CryptoError::SignatureVerification { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Debug for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::MalformedPublicKey {
                key_bytes: Some(key_bytes),
                internal_error,
            } => write!(
                f,
                "Malformed public key: {}, error: {}",
                hex::encode(&key_bytes),
                internal_error,
            ),
            CryptoError::MalformedPublicKey { internal_error, .. } => {
                write!(f, "Malformed public key: {}", internal_error)
            }

            CryptoError::MalformedSignature {
                sig_bytes,
                internal_error,
            } => write!(
                f,
                "Malformed signature: [{}] error: '{}'",
                hex::encode(&sig_bytes),
                internal_error
            ),

            CryptoError::SignatureVerification {
                public_key_bytes,
                sig_bytes,
                internal_error,
            } => write!(
                f,
                "Signature could not be verified: public key {}, signature {}, error: {}",
                hex::encode(&public_key_bytes),
                hex::encode(&sig_bytes),
                internal_error,
            ),
        }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CryptoError {}

pub type CryptoResult<T> = std::result::Result<T, CryptoError>;
