//! Check-digit verification for book identifiers.

/// Number of digits in an ISBN-13.
pub const ISBN13_LEN: usize = 13;

/// Check digit for the first twelve digits of an ISBN-13.
///
/// Returns `None` unless `body` is exactly twelve ASCII digits.
pub fn isbn13_check_digit(body: &str) -> Option<u8> {
    if body.len() != ISBN13_LEN - 1 || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum: u32 = body
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 { digit } else { digit * 3 }
        })
        .sum();

    Some(((10 - sum % 10) % 10) as u8)
}

/// Whether `s` is a 13-digit ISBN with a correct check digit.
///
/// Malformed input yields `false`, never an error.
pub fn is_valid_isbn13(s: &str) -> bool {
    if s.len() != ISBN13_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let check = s.as_bytes()[ISBN13_LEN - 1] - b'0';
    isbn13_check_digit(&s[..ISBN13_LEN - 1]) == Some(check)
}
