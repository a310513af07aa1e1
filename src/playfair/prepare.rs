//! Turns arbitrary text into Playfair digraphs.

use tracing::trace;

use super::matrix::normalize;

/// Letter used to split doubled letters and to pad an odd tail.
pub const FILLER: char = 'X';

/// Prepares `text` for the Playfair square.
///
/// Keeps only ASCII letters, uppercases them and folds `J` into `I`. The
/// letters are then read in pairs: a pair of equal letters becomes the letter
/// followed by [`FILLER`] and the second letter starts the next pair; a lone
/// trailing letter is padded with [`FILLER`]. The output has even length.
///
/// Digits, spaces, punctuation and case are lost.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::prepare;
///
/// assert_eq!(prepare("HELLO"), "HELXLO");
/// assert_eq!(prepare("jazz"), "IAZXZX");
/// ```
pub fn prepare(text: &str) -> String {
    let letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(normalize)
        .collect();

    let mut prepared = String::with_capacity(letters.len() * 2);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        let second = letters.get(i + 1).copied().unwrap_or(FILLER);
        prepared.push(first);
        if first == second {
            prepared.push(FILLER);
            i += 1;
        } else {
            prepared.push(second);
            i += 2;
        }
    }

    if prepared.len() != letters.len() {
        trace!(
            letters = letters.len(),
            prepared = prepared.len(),
            "inserted playfair filler"
        );
    }
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_double_letters() {
        assert_eq!(prepare("HELLO"), "HELXLO");
        assert_eq!(prepare("BALLOON"), "BALXLOON");
    }

    #[test]
    fn test_strips_non_letters_and_uppercases() {
        assert_eq!(
            prepare("Hide the gold in the tree stump"),
            "HIDETHEGOLDINTHETREXESTUMP"
        );
        assert_eq!(prepare("a-b c!d"), "ABCD");
    }

    #[test]
    fn test_folds_j() {
        assert_eq!(prepare("jazz"), "IAZXZX");
        assert_eq!(prepare("JI"), "IXIX");
    }

    #[test]
    fn test_pads_odd_tail() {
        assert_eq!(prepare("A"), "AX");
        assert_eq!(prepare("ABC"), "ABCX");
    }

    #[test]
    fn test_trailing_x_pairs_with_filler() {
        assert_eq!(prepare("X"), "XX");
        assert_eq!(prepare("XX"), "XXXX");
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(prepare(""), "");
        assert_eq!(prepare("123 !?"), "");
        assert_eq!(prepare("\u{e9}\u{df}"), "");
    }

    #[test]
    fn test_output_is_even() {
        for text in ["a", "ab", "aab", "aaa", "hello world", "mississippi"] {
            assert_eq!(prepare(text).len() % 2, 0, "text {:?}", text);
        }
    }
}
