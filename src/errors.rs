use std::fmt;

/// Largest number of symbols an alphabet may hold.
///
/// Digit value 255 is reserved in the lookup table to mark unmapped
/// characters, so an alphabet tops out at 254 symbols.
pub const MAX_ALPHABET_LEN: usize = 254;

/// Errors raised while building an [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// More than [`MAX_ALPHABET_LEN`] symbols
    TooLong { len: usize },
    /// Fewer than two symbols, which gives no usable radix
    TooShort { len: usize },
    /// The same symbol appears more than once
    Ambiguous { symbol: char },
    /// The symbol's code point does not fit in a byte
    NonByteSymbol { symbol: char },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::TooLong { len } => write!(
                f,
                "alphabet can only have {} characters or less, got {}",
                MAX_ALPHABET_LEN, len
            ),
            AlphabetError::TooShort { len } => {
                write!(f, "alphabet needs at least 2 characters, got {}", len)
            }
            AlphabetError::Ambiguous { symbol } => write!(f, "'{}' is ambiguous", symbol),
            AlphabetError::NonByteSymbol { symbol } => write!(
                f,
                "'{}' (U+{:04X}) is outside the single-byte range U+0000..U+00FF",
                symbol, *symbol as u32
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Which radix conversion tripped an [`InvariantFault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => write!(f, "encode"),
            Direction::Decode => write!(f, "decode"),
        }
    }
}

/// A carry was left over after the scratch buffer ran out.
///
/// The scratch buffer is sized from a logarithmic upper bound, so this can
/// only happen if that bound is wrong. It marks a defect in the converter,
/// never bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantFault {
    pub direction: Direction,
    pub base: usize,
    pub scratch_len: usize,
}

impl fmt::Display for InvariantFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "non-zero carry during base-{} {} (scratch buffer of {} digits exhausted)",
            self.base, self.direction, self.scratch_len
        )
    }
}

impl std::error::Error for InvariantFault {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        base: usize,
    },
    /// The converter's size bound failed; see [`InvariantFault`]
    Fault(InvariantFault),
}

impl DecodeError {
    /// The radix of the alphabet that rejected the input.
    pub fn base(&self) -> usize {
        match self {
            DecodeError::InvalidCharacter { base, .. } => *base,
            DecodeError::Fault(fault) => fault.base,
        }
    }
}

impl From<InvariantFault> for DecodeError {
    fn from(fault: InvariantFault) -> Self {
        DecodeError::Fault(fault)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                base,
            } => {
                if use_color {
                    write!(
                        f,
                        "\x1b[1;31merror:\x1b[0m non-base{} character '{}' at position {}",
                        base,
                        c.escape_debug(),
                        position
                    )
                } else {
                    write!(
                        f,
                        "error: non-base{} character '{}' at position {}",
                        base,
                        c.escape_debug(),
                        position
                    )
                }
            }
            DecodeError::Fault(fault) => {
                if use_color {
                    write!(f, "\x1b[1;31minternal error:\x1b[0m {}", fault)
                } else {
                    write!(f, "internal error: {}", fault)
                }
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Fault(fault) => Some(fault),
            DecodeError::InvalidCharacter { .. } => None,
        }
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not registered
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        if let Some(suggestion) = &self.suggestion {
            writeln!(f)?;
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base-x --list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `base-x --list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();

    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest registered alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("base58", "base58"), 0);
        assert_eq!(levenshtein_distance("base58", "base32"), 2);
        assert_eq!(levenshtein_distance("bas58", "base58"), 1);
        assert_eq!(levenshtein_distance("", "base58"), 6);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec![
            "base58".to_string(),
            "base62".to_string(),
            "zbase32".to_string(),
        ];

        assert_eq!(
            find_closest_alphabet("bse58", &names),
            Some("base58".to_string())
        );
        assert_eq!(
            find_closest_alphabet("zbase23", &names),
            Some("zbase32".to_string())
        );
        assert_eq!(find_closest_alphabet("crockford", &names), None);
        assert_eq!(find_closest_alphabet("base58", &[]), None);
    }

    #[test]
    fn test_alphabet_error_messages() {
        let err = AlphabetError::Ambiguous { symbol: 'a' };
        assert_eq!(err.to_string(), "'a' is ambiguous");

        let err = AlphabetError::TooLong { len: 255 };
        assert!(err.to_string().contains("254 characters or less"));

        let err = AlphabetError::NonByteSymbol { symbol: '€' };
        assert!(err.to_string().contains("U+20AC"));
    }

    #[test]
    fn test_decode_error_display_names_base() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::InvalidCharacter {
            char: '0',
            position: 3,
            base: 58,
        };
        let display = err.to_string();
        assert!(display.contains("non-base58 character '0' at position 3"));
        assert_eq!(err.base(), 58);

        let fault = InvariantFault {
            direction: Direction::Decode,
            base: 58,
            scratch_len: 4,
        };
        let err = DecodeError::from(fault.clone());
        assert!(err.to_string().contains("internal error"));
        assert!(err.to_string().contains("non-zero carry during base-58 decode"));
        assert_ne!(
            err,
            DecodeError::InvalidCharacter {
                char: '0',
                position: 0,
                base: 58
            }
        );

        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_alphabet_not_found_error() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = AlphabetNotFoundError::new("bas58", Some("base58".to_string()));
        let display = format!("{}", err);

        assert!(display.contains("alphabet 'bas58' not found"));
        assert!(display.contains("did you mean 'base58'?"));
        assert!(display.contains("base-x --list"));

        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }
}
