use crate::alphabet::Alphabet;
use crate::errors::{DecodeError, Direction, InvariantFault};

/// Encodes bytes into a string over `alphabet`.
///
/// # Panics
///
/// Panics if the scratch buffer bound is violated. See [`try_encode`].
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    match try_encode(data, alphabet) {
        Ok(encoded) => encoded,
        Err(fault) => panic!("{}", fault),
    }
}

/// Encodes bytes into a string over `alphabet`.
///
/// The input is read as a big-endian base-256 number. Each leading zero
/// byte becomes one leader symbol; the rest is converted by schoolbook
/// multiply-and-add into a base-N scratch buffer.
pub fn try_encode(data: &[u8], alphabet: &Alphabet) -> Result<String, InvariantFault> {
    encode_bounded(data, alphabet, |len| alphabet.max_encoded_len(len))
}

/// Encodes with the scratch size taken from `bound(significant byte count)`.
fn encode_bounded(
    data: &[u8],
    alphabet: &Alphabet,
    bound: impl Fn(usize) -> usize,
) -> Result<String, InvariantFault> {
    if data.is_empty() {
        return Ok(String::new());
    }

    // Skip & count leading zeroes
    let zeroes = data.iter().take_while(|&&b| b == 0).count();
    let source = &data[zeroes..];

    let base = alphabet.base() as u32;
    let size = bound(source.len());
    // Big-endian base-N digits, filled from the back
    let mut scratch = vec![0u8; size];
    let mut length = 0;

    for &byte in source {
        let mut carry = u32::from(byte);

        // Apply "scratch = scratch * 256 + byte"
        let mut i = 0;
        for digit in scratch.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 256 * u32::from(*digit);
            *digit = (carry % base) as u8;
            carry /= base;
            i += 1;
        }

        if carry != 0 {
            return Err(InvariantFault {
                direction: Direction::Encode,
                base: base as usize,
                scratch_len: size,
            });
        }
        length = i;
    }

    let written = &scratch[size - length..];
    let significant = written.iter().position(|&d| d != 0).unwrap_or(written.len());
    let digits = &written[significant..];

    let mut encoded = String::with_capacity(zeroes + digits.len());
    encoded.extend(std::iter::repeat_n(alphabet.leader(), zeroes));
    encoded.extend(digits.iter().map(|&d| alphabet.symbols()[usize::from(d)]));

    Ok(encoded)
}

/// Decodes a string over `alphabet` back into bytes.
///
/// Fails on the first character outside the alphabet without looking at the
/// rest of the input.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    decode_bounded(encoded, alphabet, |len| alphabet.max_decoded_len(len))
}

/// Decodes with the scratch size taken from `bound(significant digit count)`.
fn decode_bounded(
    encoded: &str,
    alphabet: &Alphabet,
    bound: impl Fn(usize) -> usize,
) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    // Skip & count leading leaders
    let leader = alphabet.leader();
    let zeroes = encoded.chars().take_while(|&c| c == leader).count();
    let offset = zeroes * leader.len_utf8();
    let rest = &encoded[offset..];

    let base = alphabet.base() as u32;
    let size = bound(rest.chars().count());
    // Big-endian base-256 bytes, filled from the back
    let mut scratch = vec![0u8; size];
    let mut length = 0;

    for (position, c) in rest.char_indices() {
        let mut carry = match alphabet.decode_char(c) {
            Some(digit) => u32::from(digit),
            None => {
                return Err(DecodeError::InvalidCharacter {
                    char: c,
                    position: offset + position,
                    base: base as usize,
                });
            }
        };

        // Apply "scratch = scratch * base + digit"
        let mut i = 0;
        for byte in scratch.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += base * u32::from(*byte);
            *byte = carry as u8;
            carry >>= 8;
            i += 1;
        }

        if carry != 0 {
            return Err(InvariantFault {
                direction: Direction::Decode,
                base: base as usize,
                scratch_len: size,
            }
            .into());
        }
        length = i;
    }

    let written = &scratch[size - length..];
    let significant = written.iter().position(|&b| b != 0).unwrap_or(written.len());
    let bytes = &written[significant..];

    let mut decoded = Vec::with_capacity(zeroes + bytes.len());
    decoded.resize(zeroes, 0u8);
    decoded.extend_from_slice(bytes);

    Ok(decoded)
}

/// Decodes a string, returning `None` instead of an error for characters
/// outside the alphabet.
///
/// # Panics
///
/// Panics if the scratch buffer bound is violated.
pub fn decode_lenient(encoded: &str, alphabet: &Alphabet) -> Option<Vec<u8>> {
    match decode(encoded, alphabet) {
        Ok(decoded) => Some(decoded),
        Err(DecodeError::InvalidCharacter { .. }) => None,
        Err(DecodeError::Fault(fault)) => panic!("{}", fault),
    }
}
