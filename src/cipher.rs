//! Common shape of the classical ciphers.

use crate::mode::Mode;

/// A keyed text cipher.
///
/// Implementors hold already-validated key material, so encryption and
/// decryption cannot fail. Each call consumes a whole string and returns a
/// new one; no state carries over between calls.
pub trait Cipher {
    /// Encrypts `text`.
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts `text`.
    fn decrypt(&self, text: &str) -> String;

    /// Runs [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt)
    /// depending on `mode`.
    fn apply(&self, text: &str, mode: Mode) -> String {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }
}
