use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use super::{ITERATIONS, MIN_LEN, Prf, SALT_LEN};
use crate::error::HashError;

/// Parameters applied to newly created hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    prf: Prf,
    iterations: u32,
    salt_len: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            prf: Prf::Sha256,
            iterations: ITERATIONS,
            // 128-bit salt
            salt_len: SALT_LEN,
        }
    }
}

impl HashConfig {
    pub fn new(prf: Prf, iterations: u32, salt_len: usize) -> Result<Self, HashError> {
        let config = Self {
            prf,
            iterations,
            salt_len,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn prf(&self) -> Prf {
        self.prf
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn validate(&self) -> Result<(), HashError> {
        if self.iterations < 1 {
            return Err(HashError::InvalidConfig("iteration count must be >= 1"));
        }
        if self.salt_len < MIN_LEN {
            return Err(HashError::InvalidConfig("salt must be at least 16 bytes"));
        }
        if u32::try_from(self.salt_len).is_err() {
            return Err(HashError::InvalidConfig("salt length does not fit the header"));
        }
        Ok(())
    }
}

/// Key-derivation capability: fills `out` with key material derived from
/// the password.
pub trait KeyDerivation {
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        prf: Prf,
        out: &mut [u8],
    ) -> Result<(), HashError>;
}

/// PBKDF2 with HMAC over the selected PRF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2;

impl KeyDerivation for Pbkdf2 {
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        prf: Prf,
        out: &mut [u8],
    ) -> Result<(), HashError> {
        let res = match prf {
            Prf::Sha1 => pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations, out),
            Prf::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, out),
            Prf::Sha512 => pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, iterations, out),
        };
        res.map_err(|_| HashError::KeyDerivation)
    }
}
