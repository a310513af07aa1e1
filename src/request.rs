//! Validated entry point for callers that receive loose user input.
//!
//! A [`CipherRequest`] bundles a cipher selector, a mode, a key string and
//! the text, exactly as a form or a config document would supply them.
//! [`CipherRequest::process`] checks the input before dispatching:
//!
//! 1. the text, trimmed of surrounding whitespace, must not be empty;
//! 2. a Caesar key must be a run of ASCII digits;
//! 3. Vigenère and Playfair keys must not be empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::caesar::caesar;
use crate::error::{CipherError, Result};
use crate::mode::Mode;
use crate::playfair::playfair;
use crate::vigenere::vigenere;

/// Cipher selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CipherKind {
    /// [`Caesar`](crate::Caesar) shift cipher.
    Caesar,
    /// [`Vigenere`](crate::Vigenere) cipher.
    Vigenere,
    /// [`Playfair`](crate::Playfair) digraph cipher.
    Playfair,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "Caesar"),
            CipherKind::Vigenere => write!(f, "Vigenère"),
            CipherKind::Playfair => write!(f, "Playfair"),
        }
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" | "vigenère" => Ok(CipherKind::Vigenere),
            "playfair" => Ok(CipherKind::Playfair),
            _ => Err(CipherError::UnknownCipher(s.to_string())),
        }
    }
}

impl TryFrom<String> for CipherKind {
    type Error = CipherError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// One cipher invocation as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CipherRequest {
    /// Which cipher to run.
    pub cipher: CipherKind,
    /// Direction; `encrypt` when omitted.
    #[serde(default)]
    pub mode: Mode,
    /// Shift (Caesar) or key (Vigenère, Playfair), unparsed.
    pub key: String,
    /// Input text.
    pub text: String,
}

impl CipherRequest {
    /// Creates a request.
    pub fn new(
        cipher: CipherKind,
        mode: Mode,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        CipherRequest {
            cipher,
            mode,
            key: key.into(),
            text: text.into(),
        }
    }

    /// Validates the request and runs the selected cipher.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the text is blank.
    /// - [`CipherError::InvalidShift`] if a Caesar key is not a non-negative
    ///   integer that fits in `u64`.
    /// - [`CipherError::MissingKey`] if a Vigenère or Playfair key is empty.
    /// - [`CipherError::InvalidKey`] if a Vigenère key has no alphabet
    ///   character.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{CipherKind, CipherRequest, Mode};
    ///
    /// let request = CipherRequest::new(CipherKind::Caesar, Mode::Encrypt, "1", "ABC");
    /// assert_eq!(request.process().unwrap(), "BCD");
    /// ```
    pub fn process(&self) -> Result<String> {
        let outcome = self.dispatch();
        if let Err(err) = &outcome {
            warn!(cipher = %self.cipher, mode = %self.mode, error = %err, "cipher request rejected");
        }
        outcome
    }

    fn dispatch(&self) -> Result<String> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        debug!(
            cipher = %self.cipher,
            mode = %self.mode,
            chars = text.chars().count(),
            "dispatching cipher request"
        );

        match self.cipher {
            CipherKind::Caesar => Ok(caesar(text, parse_shift(&self.key)?, self.mode)),
            CipherKind::Vigenere => {
                self.require_key()?;
                vigenere(text, &self.key, self.mode)
            }
            CipherKind::Playfair => {
                self.require_key()?;
                Ok(playfair(text, &self.key, self.mode))
            }
        }
    }

    fn require_key(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(CipherError::MissingKey(self.cipher));
        }
        Ok(())
    }
}

/// Parses a Caesar shift: one or more ASCII digits, nothing else.
fn parse_shift(key: &str) -> Result<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::InvalidShift(key.to_string()));
    }
    key.parse()
        .map_err(|_| CipherError::InvalidShift(key.to_string()))
}

/// Builds a [`CipherRequest`] and processes it.
///
/// # Errors
/// See [`CipherRequest::process`].
pub fn process(cipher: CipherKind, mode: Mode, key: &str, text: &str) -> Result<String> {
    CipherRequest::new(cipher, mode, key, text).process()
}
