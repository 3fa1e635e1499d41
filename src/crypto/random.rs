use getrandom::fill;

use crate::error::HashError;

/// Source of salt bytes.
pub trait RandomSource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), HashError>;
}

/// Operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    /// Fill buffer with cryptographically secure random bytes
    fn fill(&self, buf: &mut [u8]) -> Result<(), HashError> {
        fill(buf).map_err(|_| HashError::RandomSource)
    }
}
