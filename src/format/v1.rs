//! Stored hash format v1.
//!
//! V1 layout, integers big-endian:
//! ```text
//! VERSION (1) | PRF_ID (4) | ITERATIONS (4) | SALT_LEN (4) | SALT (SALT_LEN) | SUBKEY (rest)
//! ```

use super::{FIELD_LEN, HEADER_LEN, StoredHash, VER_LEN};
use crate::{crypto::MIN_LEN, error::HashError};
use zeroize::Zeroizing;

/// Current format version.
pub const VERSION_V1: u8 = 1;

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut field = [0u8; FIELD_LEN];
    field.copy_from_slice(&data[offset..offset + FIELD_LEN]);
    u32::from_be_bytes(field)
}

/// Unpacks a v1 hash.
///
/// # Errors
///
/// Returns an error if the header is short or the salt or subkey length is
/// below 128 bits.
pub fn unpack(data: &[u8]) -> Result<StoredHash, HashError> {
    if data.len() < HEADER_LEN {
        return Err(HashError::MalformedHeader { len: data.len() });
    }

    let mut offset = VER_LEN;

    let prf_id = read_u32(data, offset);
    offset += FIELD_LEN;

    let iterations = read_u32(data, offset);
    offset += FIELD_LEN;

    let salt_len = read_u32(data, offset) as usize;
    offset += FIELD_LEN;

    let remaining = data.len() - offset;
    if salt_len < MIN_LEN || salt_len > remaining {
        return Err(HashError::InvalidSaltLength(salt_len));
    }

    let salt = data[offset..offset + salt_len].to_vec();
    offset += salt_len;

    let subkey_len = data.len() - offset;
    if subkey_len < MIN_LEN {
        return Err(HashError::InvalidSubkeyLength(subkey_len));
    }

    let subkey = data[offset..].to_vec();

    Ok(StoredHash::new(prf_id, iterations, salt, subkey))
}

/// Packs a StoredHash into v1 bytes.
///
/// # Errors
///
/// Returns an error if the version is not v1 or if salt/subkey have invalid
/// lengths.
pub fn pack(hash: &StoredHash) -> Result<Zeroizing<Vec<u8>>, HashError> {
    if hash.version() != VERSION_V1 {
        return Err(HashError::UnsupportedVersion(hash.version()));
    }

    let salt_len = hash.salt().len();
    if salt_len < MIN_LEN {
        return Err(HashError::InvalidSaltLength(salt_len));
    }
    let salt_field =
        u32::try_from(salt_len).map_err(|_| HashError::InvalidSaltLength(salt_len))?;

    if hash.subkey().len() < MIN_LEN {
        return Err(HashError::InvalidSubkeyLength(hash.subkey().len()));
    }

    let mut buf = Zeroizing::new(Vec::with_capacity(
        HEADER_LEN + salt_len + hash.subkey().len(),
    ));

    buf.push(VERSION_V1);

    buf.extend_from_slice(&hash.prf_id().to_be_bytes());
    buf.extend_from_slice(&hash.iterations().to_be_bytes());
    buf.extend_from_slice(&salt_field.to_be_bytes());

    buf.extend_from_slice(hash.salt());
    buf.extend_from_slice(hash.subkey());

    Ok(buf)
}
