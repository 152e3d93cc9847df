//! Binary Digit Strings
//!
//! Renders a field value as binary digits, most significant first. The
//! output is variable length: digits stop at the lowest set bit, and a
//! zero value is the single digit "0" rather than a full-width string.

/// Encode `value` over a `width`-bit field
pub fn binary_digits(value: u64, width: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = String::new();
    let mut rest = value;
    for shamt in (0..width).rev() {
        if rest == 0 {
            break;
        }
        let mask = 1u64 << shamt;
        if rest & mask != 0 {
            digits.push('1');
            rest &= !mask;
        } else {
            digits.push('0');
        }
    }
    digits
}
