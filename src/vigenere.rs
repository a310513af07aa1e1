//! Vigenère cipher: a repeating per-position shift over the cipher alphabet.
//!
//! The key cursor is the absolute character position in the text. A
//! pass-through character is copied unchanged but still consumes its key
//! position, so `"A\u{e9}A"` under key `"BC"` uses `B` for the first `A`
//! and `B` again (position 2) for the last one.

use crate::alphabet::{self, Symbol};
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::mode::Mode;

/// Vigenère cipher holding its key as alphabet offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key_indices: Vec<usize>,
}

impl Vigenere {
    /// Creates a Vigenère cipher from `key`.
    ///
    /// Key characters outside the alphabet are skipped; the rest keep
    /// their order.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if no key character belongs to
    /// the alphabet (including the empty key).
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{CipherError, Vigenere};
    ///
    /// assert!(Vigenere::new("KEY").is_ok());
    /// assert_eq!(Vigenere::new("\u{e9}\u{e8}"), Err(CipherError::InvalidKey));
    /// ```
    pub fn new(key: &str) -> Result<Self> {
        let key_indices: Vec<usize> = key.chars().filter_map(alphabet::index_of).collect();
        if key_indices.is_empty() {
            return Err(CipherError::InvalidKey);
        }
        Ok(Vigenere { key_indices })
    }

    /// Returns the key as alphabet offsets, in key order.
    pub fn key_indices(&self) -> &[usize] {
        &self.key_indices
    }

    fn transform(&self, text: &str, mode: Mode) -> String {
        let period = self.key_indices.len();
        text.chars()
            .enumerate()
            .map(|(position, c)| match alphabet::classify(c) {
                Symbol::Cipherable(index) => {
                    let offset = self.key_indices[position % period] as u64;
                    alphabet::symbol_at(mode.shift(index, offset, alphabet::LEN))
                }
                Symbol::Passthrough(c) => c,
            })
            .collect()
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Decrypt)
    }
}

/// Applies the Vigenère cipher to `text` with `key`.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` has no alphabet character.
///
/// # Examples
///
/// ```
/// use classicrypt::{vigenere, Mode};
///
/// let ciphertext = vigenere("HELLO", "KEY", Mode::Encrypt).unwrap();
/// assert_eq!(vigenere(&ciphertext, "KEY", Mode::Decrypt).unwrap(), "HELLO");
/// ```
pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String> {
    Ok(Vigenere::new(key)?.apply(text, mode))
}
