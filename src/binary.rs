//! Display helpers for encoded symbols
//!
//! The binary rendering spells out each byte's bits as a digit string
//! (84 becomes "1010100"). It is a presentation format only and is never
//! parsed back into symbols.

/// Bits of `value`, most significant first, without leading zeros
pub fn to_binary_digits(value: u8) -> String {
    format!("{:b}", value)
}

pub fn format_binary(values: &[u8]) -> Vec<String> {
    values.iter().map(|&v| to_binary_digits(v)).collect()
}

/// Render symbols as a bracketed, comma separated list: `[84, 101, 115]`
pub fn format_decimal(values: &[u8]) -> String {
    let body = values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}
