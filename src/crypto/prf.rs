use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HashError;

/// Pseudorandom function used inside PBKDF2.
///
/// The discriminants are the identifiers written into the stored header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prf {
    Sha1 = 0,
    #[default]
    Sha256 = 1,
    Sha512 = 2,
}

impl Prf {
    /// Maps a header identifier to its PRF.
    pub fn resolve(id: u32) -> Result<Self, HashError> {
        match id {
            0 => Ok(Prf::Sha1),
            1 => Ok(Prf::Sha256),
            2 => Ok(Prf::Sha512),
            other => Err(HashError::UnsupportedPrf(other)),
        }
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Prf::Sha1 => "sha1",
            Prf::Sha256 => "sha256",
            Prf::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prf {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(Prf::Sha1),
            "sha256" => Ok(Prf::Sha256),
            "sha512" => Ok(Prf::Sha512),
            _ => Err(HashError::UnknownPrfName(s.to_string())),
        }
    }
}
