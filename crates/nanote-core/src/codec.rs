use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::catalog::Charset;
use crate::errors::NanoteError;

/// Reads `text` as a number in base `|charset| + 1`, one digit per character.
///
/// A character's digit is its 1-based position in the charset, so no
/// character ever produces a zero digit.
pub fn b10_encode(text: &str, charset: &Charset) -> Result<BigUint, NanoteError> {
    let base = BigUint::from(charset.base());
    let mut value = BigUint::zero();
    for c in text.chars() {
        let position = charset
            .position(c)
            .ok_or_else(|| NanoteError::NoCoveringCharset {
                unsupported: c.to_string(),
            })?;
        value = value * &base + BigUint::from(position + 1);
    }
    Ok(value)
}

/// Inverse of [`b10_encode`].
///
/// Zero digits cannot come out of an encoder and are skipped. Zero decodes to
/// the empty string.
pub fn b10_decode(value: &BigUint, charset: &Charset) -> String {
    if charset.is_empty() {
        return String::new();
    }
    let base = BigUint::from(charset.base());
    let mut quotient = value.clone();
    let mut symbols = Vec::new();
    while !quotient.is_zero() {
        let digit = &quotient % &base;
        quotient = &quotient / &base;
        if let Some(symbol) = digit
            .to_usize()
            .and_then(|d| d.checked_sub(1))
            .and_then(|position| charset.symbol(position))
        {
            symbols.push(symbol);
        }
    }
    symbols.iter().rev().collect()
}
