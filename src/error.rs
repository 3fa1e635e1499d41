//! Error types for hashing and verification.
//!
//! Verification never surfaces these to its caller; they exist so the
//! failure kind can be logged and so hashing can report hard failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    /// The stored text is not valid base64.
    #[error("stored hash is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Fewer bytes than the fixed header.
    #[error("stored hash too short: {len} bytes")]
    MalformedHeader { len: usize },

    #[error("unsupported format marker: {0}")]
    UnsupportedVersion(u8),

    #[error("invalid salt length: {0} bytes")]
    InvalidSaltLength(usize),

    #[error("invalid subkey length: {0} bytes")]
    InvalidSubkeyLength(usize),

    #[error("iteration count must be >= 1")]
    InvalidIterationCount,

    #[error("unsupported PRF id: {0}")]
    UnsupportedPrf(u32),

    #[error("unknown PRF '{0}' (expected sha1, sha256 or sha512)")]
    UnknownPrfName(String),

    #[error("invalid hash configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("OS random generator unavailable")]
    RandomSource,

    #[error("key derivation failed")]
    KeyDerivation,
}
