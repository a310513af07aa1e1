//! Error types for the classicrypt library.

use thiserror::Error;

use crate::request::CipherKind;

/// Errors produced by the classicrypt library.
///
/// Only [`CipherError::InvalidKey`] can come out of a cipher itself. The
/// remaining variants are raised while validating a
/// [`CipherRequest`](crate::request::CipherRequest) or parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Vigenère key contains no character from the cipher alphabet.
    #[error("Invalid key: no characters from the cipher alphabet")]
    InvalidKey,
    /// Caesar shift is not a well-formed non-negative integer.
    #[error("Invalid shift: '{0}' is not a non-negative integer")]
    InvalidShift(String),
    /// A keyed cipher was requested with an empty key.
    #[error("Missing key for the {0} cipher")]
    MissingKey(CipherKind),
    /// Input text is empty once surrounding whitespace is removed.
    #[error("Input text is empty")]
    EmptyText,
    /// Cipher selector does not name a known cipher.
    #[error("Unknown cipher: '{0}'")]
    UnknownCipher(String),
    /// Mode selector is neither `encrypt` nor `decrypt`.
    #[error("Unknown mode: '{0}'")]
    UnknownMode(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
