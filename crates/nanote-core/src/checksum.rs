use crate::errors::NanoteError;

/// Single-digit checksum: `(sum of digits + 1) mod 10`.
///
/// Guards against random corruption of the index field only. Leading zeros do
/// not change the sum, so a padded and an unpadded index agree.
pub fn calculate_checksum(digits: &str) -> Result<u8, NanoteError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NanoteError::InvalidInputType {
            field: "digits",
            value: digits.to_string(),
        });
    }
    let sum: u64 = digits.bytes().map(|b| u64::from(b - b'0')).sum();
    Ok(((sum + 1) % 10) as u8)
}

/// True when `checksum` is exactly one decimal digit equal to the checksum of `digits`.
///
/// Malformed arguments yield `false`.
pub fn validate_checksum(digits: &str, checksum: &str) -> bool {
    let mut chars = checksum.chars();
    let expected = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10),
        _ => None,
    };
    match (expected, calculate_checksum(digits)) {
        (Some(expected), Ok(actual)) => expected == u32::from(actual),
        _ => false,
    }
}
