//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base_x::prelude::*;
//!
//! let encoded = encode(&[42, 12, 34], &BASE58);
//! assert_eq!(decode(&encoded, &BASE58).unwrap(), vec![42, 12, 34]);
//! ```

pub use crate::{
    // Core types
    Alphabet,
    AlphabetError,
    // Config
    AlphabetsConfig,
    DecodeError,
    InvariantFault,

    // Predefined alphabets
    alphabets::{
        BASE2, BASE8, BASE11, BASE16, BASE32, BASE36, BASE58, BASE62, BASE64, BASE67, ZBASE32,
    },

    // Encoding/decoding
    decode,
    decode_lenient,
    encode,
    try_encode,
};
