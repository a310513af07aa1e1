//! Classical text ciphers: Caesar, Vigenère and Playfair.
//!
//! These are historical ciphers, trivially breakable, and are provided for
//! teaching and puzzles. Every operation is a pure function of its inputs:
//! a whole string goes in and a whole string comes out.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (95 printable ASCII symbols, fixed order)
//!     ├── Caesar    (one shift for every symbol)
//!     └── Vigenère  (repeating key of shifts, cursor = text position)
//! playfair::prepare       (letters only, J→I, doubles split, X padding)
//! playfair::build_matrix  (5x5 key square, A–Z without J)
//!     └── Playfair  (digraph substitution)
//! request    (input validation and dispatch by cipher name)
//! ```
//!
//! # Examples
//!
//! Shift ciphers keep characters outside the alphabet as they are:
//!
//! ```
//! use classicrypt::{caesar, vigenere, Mode};
//!
//! assert_eq!(caesar("ABC", 1, Mode::Encrypt), "BCD");
//!
//! let secret = vigenere("Attack at dawn!", "LEMON", Mode::Encrypt).unwrap();
//! assert_eq!(vigenere(&secret, "LEMON", Mode::Decrypt).unwrap(), "Attack at dawn!");
//! ```
//!
//! Playfair works on prepared letter pairs, so decryption yields the
//! prepared form of the input:
//!
//! ```
//! use classicrypt::{playfair, Mode};
//!
//! let secret = playfair("hello", "PLAYFAIR", Mode::Encrypt);
//! assert_eq!(playfair(&secret, "PLAYFAIR", Mode::Decrypt), "HELXLO");
//! ```
//!
//! Loose input, such as a shift typed as text, goes through
//! [`CipherRequest`]:
//!
//! ```
//! use classicrypt::{CipherError, CipherKind, CipherRequest, Mode};
//!
//! let request = CipherRequest::new(CipherKind::Caesar, Mode::Encrypt, "-1", "ABC");
//! assert!(matches!(request.process(), Err(CipherError::InvalidShift(_))));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod playfair;
pub mod request;

mod caesar;
mod cipher;
mod mode;
mod vigenere;

pub use caesar::{caesar, Caesar};
pub use cipher::Cipher;
pub use error::{CipherError, Result};
pub use mode::Mode;
pub use playfair::{playfair, Playfair};
pub use request::{process, CipherKind, CipherRequest};
pub use vigenere::{vigenere, Vigenere};
