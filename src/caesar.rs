//! Caesar cipher: a fixed shift over the cipher alphabet.
//!
//! Every alphabet symbol moves by the same number of positions, wrapping
//! around the end of the alphabet. Characters outside the alphabet pass
//! through unchanged.

use crate::alphabet::{self, Symbol};
use crate::cipher::Cipher;
use crate::mode::Mode;

/// Caesar cipher with a fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u64,
}

impl Caesar {
    /// Creates a Caesar cipher that moves each symbol by `shift` positions.
    ///
    /// Shifts of [`alphabet::LEN`] or more wrap around.
    pub fn new(shift: u64) -> Self {
        Caesar { shift }
    }

    /// Returns the configured shift.
    pub fn shift(&self) -> u64 {
        self.shift
    }

    fn transform(&self, text: &str, mode: Mode) -> String {
        text.chars()
            .map(|c| match alphabet::classify(c) {
                Symbol::Cipherable(index) => {
                    alphabet::symbol_at(mode.shift(index, self.shift, alphabet::LEN))
                }
                Symbol::Passthrough(c) => c,
            })
            .collect()
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Decrypt)
    }
}

/// Applies the Caesar cipher to `text`.
///
/// # Parameters
/// - `text`: Input string; non-alphabet characters are copied as-is.
/// - `shift`: Number of alphabet positions to move each symbol.
/// - `mode`: [`Mode::Encrypt`] shifts forward, [`Mode::Decrypt`] backward.
///
/// # Examples
///
/// ```
/// use classicrypt::{caesar, Mode};
///
/// assert_eq!(caesar("ABC", 1, Mode::Encrypt), "BCD");
/// assert_eq!(caesar("BCD", 1, Mode::Decrypt), "ABC");
/// ```
pub fn caesar(text: &str, shift: u64, mode: Mode) -> String {
    Caesar::new(shift).apply(text, mode)
}
