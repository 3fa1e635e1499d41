//! Self-describing PBKDF2 password hashes.
//!
//! A stored hash is the base64 text of a small binary record: a format
//! marker, the PRF id, the iteration count and the salt length (each a
//! big-endian `u32`), followed by the salt and the derived subkey. The text
//! carries everything needed to verify a candidate password later.
//!
//! ```no_run
//! let stored = passproof::hash_password("welcome123")?;
//! assert!(passproof::verify_password(&stored, "welcome123"));
//! assert!(!passproof::verify_password(&stored, "welcome124"));
//! # Ok::<(), passproof::HashError>(())
//! ```

pub mod crypto;
mod error;
pub mod format;

pub use crate::crypto::{HashConfig, KeyDerivation, OsRandom, Pbkdf2, Prf, RandomSource};
pub use crate::error::HashError;
pub use crate::format::StoredHash;

use crate::crypto::SUBKEY_LEN;
use serde::Serialize;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Outcome of checking a candidate password against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Failed,
    Success,
    /// The password matched but the stored parameters are weaker than the
    /// hasher's configuration.
    SuccessRehashNeeded,
}

impl Verification {
    pub fn is_success(self) -> bool {
        !matches!(self, Verification::Failed)
    }
}

/// Public header fields of a stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashInfo {
    pub version: u8,
    pub prf: Prf,
    pub iterations: u32,
    pub salt_len: usize,
    pub subkey_len: usize,
}

/// Hashes and verifies passwords with a fixed configuration.
///
/// Salt generation and key derivation are injected so tests can substitute
/// deterministic stubs.
#[derive(Debug, Clone)]
pub struct PasswordHasher<R = OsRandom, K = Pbkdf2> {
    config: HashConfig,
    rng: R,
    kdf: K,
}

impl PasswordHasher {
    pub fn new(config: HashConfig) -> Self {
        Self::with_capabilities(config, OsRandom, Pbkdf2)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HashConfig::default())
    }
}

impl<R: RandomSource, K: KeyDerivation> PasswordHasher<R, K> {
    pub fn with_capabilities(config: HashConfig, rng: R, kdf: K) -> Self {
        Self { config, rng, kdf }
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Produces a new stored hash for `password`.
    ///
    /// # Errors
    ///
    /// Fails if the random source or the key derivation fails. No partial or
    /// weakened hash is ever returned.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        self.config.validate()?;

        let mut salt = vec![0u8; self.config.salt_len()];
        self.rng.fill(&mut salt)?;

        let mut subkey = Zeroizing::new(vec![0u8; SUBKEY_LEN]);
        self.kdf.derive(
            password.as_bytes(),
            &salt,
            self.config.iterations(),
            self.config.prf(),
            &mut subkey,
        )?;

        let stored = StoredHash::new(
            self.config.prf().id(),
            self.config.iterations(),
            salt,
            std::mem::take(&mut *subkey),
        );

        tracing::debug!(
            prf = %self.config.prf(),
            iterations = self.config.iterations(),
            salt_len = self.config.salt_len(),
            "created password hash"
        );

        format::encode(&stored)
    }

    /// Returns `true` iff `candidate` reproduces the subkey in `stored`.
    pub fn verify(&self, stored: &str, candidate: &str) -> bool {
        self.verify_detailed(stored, candidate).is_success()
    }

    /// Like [`verify`](Self::verify), also reporting whether the stored hash
    /// should be replaced with one made under the current configuration.
    ///
    /// Malformed input is never an error here: every failure collapses to
    /// [`Verification::Failed`] and its kind is only logged.
    pub fn verify_detailed(&self, stored: &str, candidate: &str) -> Verification {
        match self.check(stored, candidate) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(error = %err, "stored password hash rejected");
                Verification::Failed
            }
        }
    }

    fn check(&self, stored: &str, candidate: &str) -> Result<Verification, HashError> {
        let hash = format::decode(stored)?;
        let prf = Prf::resolve(hash.prf_id())?;
        if hash.iterations() == 0 {
            return Err(HashError::InvalidIterationCount);
        }

        let mut actual = Zeroizing::new(vec![0u8; hash.subkey().len()]);
        self.kdf.derive(
            candidate.as_bytes(),
            hash.salt(),
            hash.iterations(),
            prf,
            &mut actual,
        )?;

        if !bool::from(actual.as_slice().ct_eq(hash.subkey())) {
            tracing::debug!("password does not match stored hash");
            return Ok(Verification::Failed);
        }

        if prf != self.config.prf()
            || hash.iterations() < self.config.iterations()
            || hash.salt().len() < self.config.salt_len()
        {
            return Ok(Verification::SuccessRehashNeeded);
        }

        Ok(Verification::Success)
    }
}

/// Hashes `password` with the default configuration
/// (PBKDF2-HMAC-SHA256, 1000 iterations, 128-bit salt, 256-bit subkey).
pub fn hash_password(password: &str) -> Result<String, HashError> {
    <PasswordHasher>::default().hash(password)
}

/// Checks `candidate` against a hash produced by [`hash_password`].
///
/// Returns `false` for a wrong password and for any malformed stored hash.
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    <PasswordHasher>::default().verify(stored, candidate)
}

/// Reads the public header fields of a stored hash.
pub fn inspect(stored: &str) -> Result<HashInfo, HashError> {
    let hash = format::decode(stored)?;

    Ok(HashInfo {
        version: hash.version(),
        prf: Prf::resolve(hash.prf_id())?,
        iterations: hash.iterations(),
        salt_len: hash.salt().len(),
        subkey_len: hash.subkey().len(),
    })
}
