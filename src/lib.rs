//! Arbitrary-base encoding with caller-supplied alphabets.
//!
//! An [`Alphabet`] of 2 to 254 single-byte symbols compiles into a lookup
//! table once; after that it encodes bytes to text and decodes text back to
//! bytes, preserving leading zero bytes as leading leader symbols.
//!
//! ```
//! use base_x::Alphabet;
//!
//! let base58 = Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz")?;
//! assert_eq!(base58.encode(&[0, 0, 1]), "112");
//! assert_eq!(base58.decode("112")?, vec![0, 0, 1]);
//! assert_eq!(base58.decode_lenient("0OIl"), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod alphabet;
pub mod alphabets;
mod config;
mod encoding;
mod errors;
pub mod prelude;

pub use alphabet::{Alphabet, INVALID_DIGIT};
pub use config::{AlphabetConfig, AlphabetsConfig};
pub use errors::{
    AlphabetError, AlphabetNotFoundError, DecodeError, Direction, InvariantFault,
    MAX_ALPHABET_LEN, find_closest_alphabet,
};

/// Encodes bytes with `alphabet`.
///
/// Text is not bytes: it must be converted explicitly with `as_bytes()`.
///
/// ```compile_fail
/// use base_x::alphabets::BASE58;
///
/// base_x::encode("text", &BASE58);
/// ```
///
/// ```compile_fail
/// use base_x::alphabets::BASE58;
///
/// base_x::encode(String::from("text"), &BASE58);
/// ```
///
/// # Panics
///
/// Panics on an [`InvariantFault`]; see [`try_encode`].
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encoding::encode(data, alphabet)
}

/// Encodes bytes with `alphabet`, returning a sizing fault as a value.
///
/// ```compile_fail
/// use base_x::alphabets::BASE58;
///
/// base_x::try_encode("text", &BASE58);
/// ```
pub fn try_encode(data: &[u8], alphabet: &Alphabet) -> Result<String, InvariantFault> {
    encoding::try_encode(data, alphabet)
}

/// Decodes text with `alphabet`.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    encoding::decode(encoded, alphabet)
}

/// Decodes text with `alphabet`, returning `None` for characters outside it.
pub fn decode_lenient(encoded: &str, alphabet: &Alphabet) -> Option<Vec<u8>> {
    encoding::decode_lenient(encoded, alphabet)
}

#[cfg(test)]
mod tests;
