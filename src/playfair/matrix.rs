//! Playfair key square.
//!
//! A 5x5 grid holding the 25 letters `A`..=`Z` without `J`, seeded by the
//! key. Key letters come first in order of first appearance, then the rest
//! of the alphabet fills the remaining cells. A `J` in the key is read as
//! `I`, so the grid never holds `J`.

use std::fmt;

use tracing::trace;

/// Side length of the key square.
pub const SIZE: usize = 5;

/// Letter folded into its neighbour before lookup.
pub(crate) const MERGED: char = 'J';

/// Letter that stands in for [`MERGED`].
pub(crate) const MERGED_INTO: char = 'I';

/// Uppercases an ASCII letter and folds `J` into `I`.
pub(crate) fn normalize(c: char) -> char {
    match c.to_ascii_uppercase() {
        MERGED => MERGED_INTO,
        upper => upper,
    }
}

/// Alphabet slot (`0..26`) of an uppercase ASCII letter.
fn slot(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Playfair key square with its inverse coordinate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    grid: [[char; SIZE]; SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl Matrix {
    /// Returns the letter at (`row`, `col`). Both coordinates wrap modulo 5.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIZE][col % SIZE]
    }

    /// Returns row `row` (wrapping modulo 5).
    pub fn row(&self, row: usize) -> [char; SIZE] {
        self.grid[row % SIZE]
    }

    /// Returns the (row, column) of `letter`, or `None` when `letter` is not
    /// an uppercase letter of the square (lowercase letters and `J` included).
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        slot(letter).and_then(|s| self.positions[s])
    }

    /// Iterates over the 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flat_map(|row| row.iter().copied())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, letter) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Builds the Playfair key square for `key`.
///
/// Non-letters in the key are ignored and case does not matter. The result
/// always holds exactly 25 distinct letters.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::build_matrix;
///
/// let matrix = build_matrix("PLAYFAIR");
/// assert_eq!(matrix.row(0), ['P', 'L', 'A', 'Y', 'F']);
/// assert_eq!(matrix.position('I'), Some((1, 0)));
/// ```
pub fn build_matrix(key: &str) -> Matrix {
    let mut grid = [[' '; SIZE]; SIZE];
    let mut positions = [None; 26];
    let mut cell = 0;

    let key_letters = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(normalize);
    let candidates = key_letters.chain(('A'..='Z').filter(|&c| c != MERGED));

    for letter in candidates {
        let Some(s) = slot(letter) else { continue };
        if positions[s].is_some() {
            continue;
        }
        let (row, col) = (cell / SIZE, cell % SIZE);
        grid[row][col] = letter;
        positions[s] = Some((row, col));
        cell += 1;
    }

    let matrix = Matrix { grid, positions };
    trace!(cells = cell, "built playfair matrix");
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_playfair_key_first_row() {
        let matrix = build_matrix("PLAYFAIR");
        assert_eq!(matrix.row(0), ['P', 'L', 'A', 'Y', 'F']);
        assert_eq!(matrix.row(1), ['I', 'R', 'B', 'C', 'D']);
        assert_eq!(matrix.row(4), ['U', 'V', 'W', 'X', 'Z']);
    }

    #[test]
    fn test_key_with_spaces_and_repeats() {
        let matrix = build_matrix("playfair example");
        let rows: Vec<[char; SIZE]> = (0..SIZE).map(|r| matrix.row(r)).collect();
        assert_eq!(
            rows,
            vec![
                ['P', 'L', 'A', 'Y', 'F'],
                ['I', 'R', 'E', 'X', 'M'],
                ['B', 'C', 'D', 'G', 'H'],
                ['K', 'N', 'O', 'Q', 'S'],
                ['T', 'U', 'V', 'W', 'Z'],
            ]
        );
    }

    #[test]
    fn test_empty_key_is_plain_alphabet() {
        let letters: String = build_matrix("").letters().collect();
        assert_eq!(letters, "ABCDEFGHIKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_j_in_key_folds_to_i() {
        let matrix = build_matrix("JUMP");
        assert_eq!(matrix.row(0), ['I', 'U', 'M', 'P', 'A']);
        assert_eq!(matrix.position('J'), None);
    }

    #[test]
    fn test_always_25_distinct_letters_without_j() {
        for key in ["", "PLAYFAIR", "jjjj", "The quick brown fox jumps over the lazy dog", "123 !?"] {
            let matrix = build_matrix(key);
            let letters: Vec<char> = matrix.letters().collect();
            let unique: HashSet<char> = letters.iter().copied().collect();
            assert_eq!(letters.len(), 25, "key {:?}", key);
            assert_eq!(unique.len(), 25, "key {:?}", key);
            assert!(!unique.contains(&'J'), "key {:?}", key);
            assert!(letters.iter().all(char::is_ascii_uppercase), "key {:?}", key);
        }
    }

    #[test]
    fn test_positions_invert_grid() {
        let matrix = build_matrix("MONARCHY");
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(matrix.position(matrix.at(row, col)), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_position_rejects_non_members() {
        let matrix = build_matrix("KEY");
        assert_eq!(matrix.position('k'), None);
        assert_eq!(matrix.position('1'), None);
        assert_eq!(matrix.position('\u{c9}'), None);
    }

    #[test]
    fn test_display() {
        let rendered = build_matrix("").to_string();
        assert_eq!(
            rendered,
            "A B C D E\nF G H I K\nL M N O P\nQ R S T U\nV W X Y Z"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize('j'), 'I');
        assert_eq!(normalize('J'), 'I');
        assert_eq!(normalize('q'), 'Q');
    }
}
