//! Modulus-10 (Luhn) check digit.

/// Computes the Luhn check digit for a string of ASCII digits.
///
/// Digits are walked from the right; every digit at an even distance from the
/// end is doubled and folded back into a single digit. The check digit is
/// whatever brings the sum up to the next multiple of ten.
///
/// Returns `None` if the payload is empty or holds anything but `0-9`.
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    for (i, b) in payload.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let mut d = u32::from(b - b'0');
        if i % 2 == 0 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }

    Some(((10 - sum % 10) % 10) as u8)
}
