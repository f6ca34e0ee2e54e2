//! Line normalization
//!
//! Every byte of a raw line is mapped to exactly one output byte: ASCII
//! letters are lowercased, apostrophes pass through, and everything else
//! (digits, punctuation, hyphens, whitespace, non-ASCII bytes) becomes a
//! space. The output is always ASCII and has the same length as the input.

/// Map a single raw byte to its normalized form
#[inline]
pub fn normalize_byte(byte: u8) -> u8 {
    if byte.is_ascii_alphabetic() {
        byte.to_ascii_lowercase()
    } else if byte == b'\'' {
        byte
    } else {
        b' '
    }
}

/// Normalize a raw line into a new string
pub fn normalize_line(raw: &[u8]) -> String {
    raw.iter().map(|&b| normalize_byte(b) as char).collect()
}

/// Normalize a caller-owned buffer in place
pub fn normalize_in_place(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = normalize_byte(*byte);
    }
}
