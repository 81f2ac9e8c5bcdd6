//! Predefined alphabets.
//!
//! Each constant holds the symbol string; each static is the compiled
//! [`Alphabet`], built on first use and shared for the life of the process.
//!
//! ```
//! use base_x::alphabets::BASE58;
//!
//! assert_eq!(BASE58.encode(&[42, 12, 34]), "F89f");
//! ```

use std::sync::LazyLock;

use crate::alphabet::Alphabet;

pub const BASE2_CHARS: &str = "01";
pub const BASE8_CHARS: &str = "01234567";
pub const BASE11_CHARS: &str = "0123456789a";
pub const BASE16_CHARS: &str = "0123456789abcdef";
/// Crockford-style: no I, L, O or U
pub const BASE32_CHARS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
/// z-base-32, ordered for human readability
pub const ZBASE32_CHARS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";
pub const BASE36_CHARS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
/// Bitcoin alphabet: no 0, O, I or l
pub const BASE58_CHARS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BASE62_CHARS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Standard base64 symbols, used as a plain radix (no padding, no chunking)
pub const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
/// URL and filename safe
pub const BASE67_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.!~";

/// Every predefined alphabet as `(name, symbols)`, in ascending base order.
pub const PREDEFINED: &[(&str, &str)] = &[
    ("base2", BASE2_CHARS),
    ("base8", BASE8_CHARS),
    ("base11", BASE11_CHARS),
    ("base16", BASE16_CHARS),
    ("base32", BASE32_CHARS),
    ("zbase32", ZBASE32_CHARS),
    ("base36", BASE36_CHARS),
    ("base58", BASE58_CHARS),
    ("base62", BASE62_CHARS),
    ("base64", BASE64_CHARS),
    ("base67", BASE67_CHARS),
];

fn predefined(chars: &'static str) -> Alphabet {
    match Alphabet::new(chars) {
        Ok(alphabet) => alphabet,
        Err(e) => panic!("predefined alphabet {:?} is malformed: {}", chars, e),
    }
}

pub static BASE2: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE2_CHARS));
pub static BASE8: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE8_CHARS));
pub static BASE11: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE11_CHARS));
pub static BASE16: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE16_CHARS));
pub static BASE32: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE32_CHARS));
pub static ZBASE32: LazyLock<Alphabet> = LazyLock::new(|| predefined(ZBASE32_CHARS));
pub static BASE36: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE36_CHARS));
pub static BASE58: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE58_CHARS));
pub static BASE62: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE62_CHARS));
pub static BASE64: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE64_CHARS));
pub static BASE67: LazyLock<Alphabet> = LazyLock::new(|| predefined(BASE67_CHARS));
