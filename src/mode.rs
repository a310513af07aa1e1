//! Direction selector shared by every cipher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Whether a cipher call encrypts or decrypts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    /// Plaintext to ciphertext.
    #[default]
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Mode {
    /// Moves `index` by `offset` positions in a ring of `modulus` cells.
    ///
    /// Forward for [`Mode::Encrypt`], backward for [`Mode::Decrypt`]. The
    /// result is always in `0..modulus`; `offset` may be any size.
    ///
    /// # Parameters
    /// - `index`: Current position, expected in `0..modulus`.
    /// - `offset`: Distance to move.
    /// - `modulus`: Ring size, must be non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Mode;
    ///
    /// assert_eq!(Mode::Encrypt.shift(4, 1, 5), 0);
    /// assert_eq!(Mode::Decrypt.shift(0, 1, 5), 4);
    /// ```
    pub fn shift(self, index: usize, offset: u64, modulus: usize) -> usize {
        let step = (offset % modulus as u64) as usize;
        match self {
            Mode::Encrypt => (index + step) % modulus,
            Mode::Decrypt => (index + modulus - step) % modulus,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            _ => Err(CipherError::UnknownMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
