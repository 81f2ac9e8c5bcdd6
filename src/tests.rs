use crate::{Alphabet, AlphabetsConfig, DecodeError, decode, decode_lenient, encode, try_encode};

fn get_alphabet(name: &str) -> Alphabet {
    let config = AlphabetsConfig::load_default().unwrap();
    config.alphabet(name).unwrap()
}

#[test]
fn test_encode_decode_empty() {
    let alphabet = get_alphabet("base58");
    let encoded = encode(b"", &alphabet);
    assert_eq!(encoded, "");
    assert_eq!(decode(&encoded, &alphabet).unwrap(), b"");
}

#[test]
fn test_encode_decode_zero() {
    let alphabet = get_alphabet("base62");
    let data = &[0u8];
    let encoded = encode(data, &alphabet);
    assert_eq!(encoded, "0");
    let decoded = decode(&encoded, &alphabet).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_encode_decode_hello_world() {
    for name in ["base2", "base11", "base36", "base58", "base67"] {
        let alphabet = get_alphabet(name);
        let data = b"Hello, World!";
        let encoded = encode(data, &alphabet);
        let decoded = decode(&encoded, &alphabet).unwrap();
        assert_eq!(decoded, data, "{}", name);
    }
}

#[test]
fn test_encode_decode_binary() {
    let alphabet = get_alphabet("zbase32");
    let data = &[0u8, 1, 2, 3, 255, 254, 253];
    let encoded = encode(data, &alphabet);
    assert!(encoded.starts_with('y'));
    let decoded = decode(&encoded, &alphabet).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_encode_decode_leading_zeros() {
    let alphabet = get_alphabet("base64");
    let data = &[0u8, 0, 0, 1, 2, 3];
    let encoded = encode(data, &alphabet);
    assert!(encoded.starts_with("AAA"));
    assert!(!encoded.starts_with("AAAA"));
    let decoded = decode(&encoded, &alphabet).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_radix_base64_differs_from_rfc4648() {
    // Plain radix conversion: no 6-bit chunking, no padding
    let alphabet = get_alphabet("base64");
    let encoded = encode(b"hello", &alphabet);
    assert!(!encoded.contains('='));
    assert_ne!(encoded, "aGVsbG8=");
}

#[test]
fn test_decode_invalid_character() {
    let alphabet = get_alphabet("base58");
    let result = decode("0OIl", &alphabet);
    assert!(matches!(
        result,
        Err(DecodeError::InvalidCharacter {
            char: '0',
            position: 0,
            base: 58
        })
    ));
    assert_eq!(decode_lenient("0OIl", &alphabet), None);
}

#[test]
fn test_try_encode_matches_encode() {
    let alphabet = get_alphabet("base36");
    let data = b"\x00\x00radix";
    assert_eq!(try_encode(data, &alphabet).unwrap(), encode(data, &alphabet));
}

#[test]
fn test_free_functions_match_methods() {
    let alphabet = get_alphabet("base8");
    let data = vec![7u8, 0, 255];
    assert_eq!(encode(&data, &alphabet), alphabet.encode(&data));
    let encoded = alphabet.encode(&data);
    assert_eq!(
        decode(&encoded, &alphabet).unwrap(),
        alphabet.decode(&encoded).unwrap()
    );
    assert_eq!(
        decode_lenient(&encoded, &alphabet),
        alphabet.decode_lenient(&encoded)
    );
}

#[test]
fn test_text_must_be_converted_explicitly() {
    let alphabet = get_alphabet("base58");
    assert_eq!(encode("a".as_bytes(), &alphabet), "2g");
}

#[test]
fn test_encoded_length_within_bound() {
    let alphabet = get_alphabet("base11");
    for len in 1..64 {
        let data = vec![0xa5u8; len];
        let encoded = encode(&data, &alphabet);
        assert!(encoded.chars().count() <= alphabet.max_encoded_len(len));
        let decoded = decode(&encoded, &alphabet).unwrap();
        assert!(decoded.len() <= alphabet.max_decoded_len(encoded.chars().count()));
        assert_eq!(decoded, data);
    }
}
