//! Stored hash format.
//!
//! Provides version-aware packing and unpacking of the binary header, and
//! the base64 text form handed to callers for persistence.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use zeroize::Zeroizing;

use crate::error::HashError;

pub mod v1;

/// Length of the format marker.
pub const VER_LEN: usize = 1;
/// Length of each big-endian integer field.
pub const FIELD_LEN: usize = 4;
/// Marker, PRF id, iteration count and salt length.
pub const HEADER_LEN: usize = VER_LEN + 3 * FIELD_LEN;
/// Latest format version
pub const CURRENT_VERSION: u8 = v1::VERSION_V1;

/// A parsed password hash.
///
/// Purely structural: the PRF id is kept as written and only resolved when
/// the hash is verified.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredHash {
    version: u8,
    prf_id: u32,
    iterations: u32,
    salt: Vec<u8>,
    subkey: Zeroizing<Vec<u8>>,
}

impl StoredHash {
    /// Creates a new StoredHash at the current format version.
    pub fn new(prf_id: u32, iterations: u32, salt: Vec<u8>, subkey: Vec<u8>) -> Self {
        Self {
            version: CURRENT_VERSION,
            prf_id,
            iterations,
            salt,
            subkey: Zeroizing::new(subkey),
        }
    }

    /// Returns the format version marker.
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn prf_id(&self) -> u32 {
        self.prf_id
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Returns the derived key the candidate password must reproduce.
    pub fn subkey(&self) -> &[u8] {
        &self.subkey
    }
}

impl fmt::Debug for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredHash")
            .field("version", &self.version)
            .field("prf_id", &self.prf_id)
            .field("iterations", &self.iterations)
            .field("salt_len", &self.salt.len())
            .field("subkey_len", &self.subkey.len())
            .finish()
    }
}

/// Parses packed bytes into a StoredHash.
///
/// Dispatches on the leading marker byte.
///
/// # Errors
///
/// Returns an error if:
/// - The input is shorter than the fixed header
/// - The marker names an unsupported version
/// - The salt or subkey length is out of bounds
pub fn unpack(data: &[u8]) -> Result<StoredHash, HashError> {
    if data.len() < HEADER_LEN {
        return Err(HashError::MalformedHeader { len: data.len() });
    }

    match data[0] {
        v1::VERSION_V1 => v1::unpack(data),
        other => Err(HashError::UnsupportedVersion(other)),
    }
}

/// Serializes a StoredHash to bytes.
///
/// # Errors
///
/// Returns an error if the version is unsupported or a length floor is
/// violated.
pub fn pack(hash: &StoredHash) -> Result<Zeroizing<Vec<u8>>, HashError> {
    match hash.version() {
        v1::VERSION_V1 => v1::pack(hash),
        other => Err(HashError::UnsupportedVersion(other)),
    }
}

/// Packs and base64-encodes a StoredHash.
pub fn encode(hash: &StoredHash) -> Result<String, HashError> {
    let bytes = pack(hash)?;
    Ok(STANDARD.encode(bytes.as_slice()))
}

/// Decodes base64 text and unpacks it.
pub fn decode(text: &str) -> Result<StoredHash, HashError> {
    let bytes = Zeroizing::new(STANDARD.decode(text)?);
    unpack(&bytes)
}
