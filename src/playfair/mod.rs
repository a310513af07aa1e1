//! Playfair cipher: digraph substitution on a 5x5 key square.
//!
//! The text is first reduced to letter pairs by [`prepare`], then each pair
//! is replaced using its two cells in the [`Matrix`] built by
//! [`build_matrix`]:
//!
//! - same row: each letter moves one column right (left to decrypt);
//! - same column: each letter moves one row down (up to decrypt);
//! - otherwise: the letters swap columns, which is its own inverse.
//!
//! Preparation is lossy, so decrypting recovers the prepared text, not the
//! original input.

mod matrix;
mod prepare;

pub use matrix::{build_matrix, Matrix, SIZE};
pub use prepare::{prepare, FILLER};

use tracing::trace;

use crate::cipher::Cipher;
use crate::mode::Mode;

/// Playfair cipher holding its key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    matrix: Matrix,
}

impl Playfair {
    /// Creates a Playfair cipher whose square is seeded by `key`.
    pub fn new(key: &str) -> Self {
        Playfair {
            matrix: build_matrix(key),
        }
    }

    /// Returns the key square.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Substitutes a single digraph.
    ///
    /// Returns `None` if either letter is not in the square.
    pub fn substitute(&self, a: char, b: char, mode: Mode) -> Option<(char, char)> {
        let (ra, ca) = self.matrix.position(a)?;
        let (rb, cb) = self.matrix.position(b)?;
        let m = &self.matrix;

        let pair = if ra == rb {
            (
                m.at(ra, mode.shift(ca, 1, SIZE)),
                m.at(rb, mode.shift(cb, 1, SIZE)),
            )
        } else if ca == cb {
            (
                m.at(mode.shift(ra, 1, SIZE), ca),
                m.at(mode.shift(rb, 1, SIZE), cb),
            )
        } else {
            (m.at(ra, cb), m.at(rb, ca))
        };
        Some(pair)
    }

    fn transform(&self, text: &str, mode: Mode) -> String {
        let prepared: Vec<char> = prepare(text).chars().collect();
        let mut result = String::with_capacity(prepared.len());
        for pair in prepared.chunks_exact(2) {
            debug_assert!(
                pair.iter().all(|&c| self.matrix.position(c).is_some()),
                "digraph {:?} outside playfair matrix",
                pair
            );
            match self.substitute(pair[0], pair[1], mode) {
                Some((a, b)) => {
                    result.push(a);
                    result.push(b);
                }
                None => {
                    // Prepared text only holds letters of the square.
                    trace!(first = %pair[0], second = %pair[1], "digraph outside playfair matrix");
                }
            }
        }
        result
    }
}

impl Cipher for Playfair {
    fn encrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Decrypt)
    }
}

/// Applies the Playfair cipher to `text` with a square seeded by `key`.
///
/// # Examples
///
/// ```
/// use classicrypt::{playfair, Mode};
///
/// let ciphertext = playfair("HELXLO", "PLAYFAIR", Mode::Encrypt);
/// assert_eq!(ciphertext, "KGYVRV");
/// assert_eq!(playfair(&ciphertext, "PLAYFAIR", Mode::Decrypt), "HELXLO");
/// ```
pub fn playfair(text: &str, key: &str, mode: Mode) -> String {
    Playfair::new(key).apply(text, mode)
}
