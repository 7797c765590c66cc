//! Base62 encoding over the alphabet `0-9A-Za-z`

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Longest Base62 rendering of a `u64` (62^11 > 2^64)
const MAX_U64_DIGITS: usize = 11;

/// Encode an unsigned integer, most significant digit first.
///
/// `0` encodes to `"0"`.
pub fn encode_u64(value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buffer = [0u8; MAX_U64_DIGITS];
    let mut index = buffer.len();
    let mut current = value;
    while current > 0 {
        index -= 1;
        buffer[index] = ALPHABET[(current % BASE) as usize];
        current /= BASE;
    }

    buffer[index..].iter().copied().map(char::from).collect()
}

/// Encode bytes interpreted as an unsigned big-endian integer of any width.
///
/// Empty and all-zero input encode to `"0"`. Leading zero bytes do not
/// produce leading zero digits.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut number: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    if number.is_empty() {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while !number.is_empty() {
        // Schoolbook long division of the base-256 number by 62
        let mut remainder: u32 = 0;
        let mut quotient = Vec::with_capacity(number.len());
        for &byte in &number {
            let acc = remainder * 256 + u32::from(byte);
            let q = acc / BASE as u32;
            remainder = acc % BASE as u32;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }
        digits.push(ALPHABET[remainder as usize]);
        number = quotient;
    }

    digits.iter().rev().copied().map(char::from).collect()
}

/// Whether `s` is a non-empty Base62 string
pub fn is_base62(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}
