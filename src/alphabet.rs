//! Fixed symbol alphabet shared by the Caesar and Vigenère ciphers.
//!
//! The alphabet is the 95 printable ASCII symbols in a fixed order:
//! uppercase letters, lowercase letters, digits, punctuation and finally a
//! single space. A symbol's position is its numeric code for the modular
//! arithmetic of both shift ciphers, so the order decides which symbol a
//! given shift lands on.
//!
//! Lookups go through a 128-entry table computed at compile time, so
//! membership and position are a single array access.

/// The ordered, duplicate-free cipher alphabet.
pub const ALPHABET: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " ",
);

/// Number of symbols in [`ALPHABET`] (N).
pub const LEN: usize = ALPHABET.len();

/// Marker for ASCII code points that are not part of the alphabet.
const UNMAPPED: u8 = u8::MAX;

static INDEX: [u8; 128] = build_index();

const fn build_index() -> [u8; 128] {
    let symbols = ALPHABET.as_bytes();
    let mut table = [UNMAPPED; 128];
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Per-character decision taken before any substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Character belongs to the alphabet at the given index.
    Cipherable(usize),
    /// Character is outside the alphabet and is emitted unchanged.
    Passthrough(char),
}

/// Returns the alphabet position of `c`, or `None` when `c` is not a member.
///
/// # Examples
///
/// ```
/// use classicrypt::alphabet;
///
/// assert_eq!(alphabet::index_of('A'), Some(0));
/// assert_eq!(alphabet::index_of('a'), Some(26));
/// assert_eq!(alphabet::index_of(' '), Some(94));
/// assert_eq!(alphabet::index_of('é'), None);
/// ```
pub fn index_of(c: char) -> Option<usize> {
    if !c.is_ascii() {
        return None;
    }
    match INDEX[c as usize] {
        UNMAPPED => None,
        index => Some(index as usize),
    }
}

/// Returns the symbol at `index`.
///
/// The index is reduced modulo [`LEN`], which makes the function total;
/// every index in `0..LEN` maps to itself.
pub fn symbol_at(index: usize) -> char {
    ALPHABET.as_bytes()[index % LEN] as char
}

/// Classifies `c` as [`Symbol::Cipherable`] or [`Symbol::Passthrough`].
pub fn classify(c: char) -> Symbol {
    match index_of(c) {
        Some(index) => Symbol::Cipherable(index),
        None => Symbol::Passthrough(c),
    }
}
