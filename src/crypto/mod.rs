//! Cryptographic collaborators for password hashing.
//!
//! Provides the PRF enumeration, the key-derivation capability and the
//! random source used for salts.

pub mod kdf;
pub mod prf;
pub mod random;

pub use kdf::{HashConfig, KeyDerivation, Pbkdf2};
pub use prf::Prf;
pub use random::{OsRandom, RandomSource};

/// Smallest accepted salt and subkey length (16 bytes / 128 bits).
pub const MIN_LEN: usize = 16;
/// Default salt length (16 bytes / 128 bits).
pub const SALT_LEN: usize = 16;
/// Length of a freshly derived subkey (32 bytes / 256 bits).
pub const SUBKEY_LEN: usize = 32;
/// Default PBKDF2 iteration count.
pub const ITERATIONS: u32 = 1000;
