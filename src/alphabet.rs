use std::fmt;
use std::str::FromStr;

use crate::encoding;
use crate::errors::{AlphabetError, DecodeError, InvariantFault, MAX_ALPHABET_LEN};

/// Digit-map entry for characters that are not part of the alphabet.
pub const INVALID_DIGIT: u8 = 255;

/// A compiled radix alphabet.
///
/// Holds a 256-entry lookup table from character code to digit value, plus
/// the constants the radix conversion needs: the base, the leader symbol
/// (digit zero, used for leading zero bytes), and the two log-ratio factors
/// that bound scratch buffer sizes.
///
/// An `Alphabet` never changes after construction and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    digit_map: [u8; 256],
    leader: char,
    /// `ln(256) / ln(base)`: upper bound on output digits per input byte
    digits_per_byte: f64,
    /// `ln(base) / ln(256)`: upper bound on output bytes per input digit
    bytes_per_digit: f64,
}

impl Alphabet {
    /// Compiles an alphabet from its symbols, in digit order.
    ///
    /// Every symbol must be a character in `U+0000..=U+00FF` so it can index
    /// the lookup table directly.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the alphabet has more than 254 symbols, or fewer than 2
    /// - a symbol lies outside the single-byte range
    /// - a symbol appears twice
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        let len = symbols.len();

        if len > MAX_ALPHABET_LEN {
            return Err(AlphabetError::TooLong { len });
        }
        if len < 2 {
            return Err(AlphabetError::TooShort { len });
        }

        let mut digit_map = [INVALID_DIGIT; 256];
        for (i, &symbol) in symbols.iter().enumerate() {
            let code = u8::try_from(u32::from(symbol))
                .map_err(|_| AlphabetError::NonByteSymbol { symbol })?;

            let slot = &mut digit_map[usize::from(code)];
            if *slot != INVALID_DIGIT {
                return Err(AlphabetError::Ambiguous { symbol });
            }
            // len <= 254, so every index fits below the sentinel
            *slot = i as u8;
        }

        let base = len as f64;
        Ok(Alphabet {
            leader: symbols[0],
            symbols,
            digit_map,
            digits_per_byte: 256f64.ln() / base.ln(),
            bytes_per_digit: base.ln() / 256f64.ln(),
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for digit zero.
    ///
    /// Each leading zero byte encodes as one leader.
    pub fn leader(&self) -> char {
        self.leader
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        let code = u8::try_from(u32::from(c)).ok()?;
        match self.digit_map[usize::from(code)] {
            INVALID_DIGIT => None,
            digit => Some(digit),
        }
    }

    /// Upper bound on the digits needed to encode `len` non-zero-prefixed bytes.
    pub fn max_encoded_len(&self, len: usize) -> usize {
        (len as f64 * self.digits_per_byte).ceil() as usize + 1
    }

    /// Upper bound on the bytes produced by decoding `len` non-leader digits.
    pub fn max_decoded_len(&self, len: usize) -> usize {
        (len as f64 * self.bytes_per_digit).ceil() as usize + 1
    }

    /// Encodes bytes into a string over this alphabet.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvariantFault`] message if the scratch buffer bound
    /// turns out too small. Use [`Alphabet::try_encode`] to receive it as a
    /// value instead.
    pub fn encode(&self, data: &[u8]) -> String {
        encoding::encode(data, self)
    }

    /// Encodes bytes, reporting a sizing fault instead of panicking.
    pub fn try_encode(&self, data: &[u8]) -> Result<String, InvariantFault> {
        encoding::try_encode(data, self)
    }

    /// Decodes a string over this alphabet back into bytes.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        encoding::decode(encoded, self)
    }

    /// Decodes a string, returning `None` if any character is not in the
    /// alphabet.
    ///
    /// # Panics
    ///
    /// Panics on an [`InvariantFault`], like [`Alphabet::encode`].
    pub fn decode_lenient(&self, encoded: &str) -> Option<Vec<u8>> {
        encoding::decode_lenient(encoded, self)
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}
