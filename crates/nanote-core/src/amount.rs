use num_bigint::BigUint;
use regex::Regex;

use crate::checksum::{calculate_checksum, validate_checksum};
use crate::errors::NanoteError;
use crate::protocol::Protocol;

/// Digits of an encoded amount: `<value + offset><index><checksum>`, zero-padded
/// on the left to at least `fraction_digits + 1` digits.
///
/// The raw and display presentations share these digits; the display form only
/// adds a decimal point in front of the last `fraction_digits` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    digits: String,
    fraction_digits: usize,
}

/// Metadata and value carried by a validated amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFields {
    /// Encoded value with the minimum offset removed.
    pub value: BigUint,
    /// Catalog index of the charset.
    pub index: usize,
    /// Checksum digit of the index field.
    pub checksum: u8,
}

impl Amount {
    /// Lays out `value` and `index` according to `protocol`.
    pub fn format(value: &BigUint, index: usize, protocol: &Protocol) -> Result<Self, NanoteError> {
        if index >= protocol.index_capacity() {
            return Err(NanoteError::IndexOutOfRange {
                index,
                len: protocol.index_capacity(),
            });
        }
        let index_digits = format!("{:0width$}", index, width = protocol.index_width());
        let checksum = calculate_checksum(&index_digits)?;

        let mut digits = (value + protocol.offset()).to_string();
        digits.push_str(&index_digits);
        digits.push(char::from(b'0' + checksum));
        let digits = format!("{:0>width$}", digits, width = protocol.min_digits());

        Ok(Self {
            digits,
            fraction_digits: protocol.fraction_digits(),
        })
    }

    /// Parses the display form: one or more digits, a point, then exactly
    /// `fraction_digits` digits.
    pub fn parse_display(amount: &str, protocol: &Protocol) -> Result<Self, NanoteError> {
        let pattern = format!(r"^[0-9]+\.[0-9]{{{}}}$", protocol.fraction_digits());
        let re = Regex::new(&pattern).expect("invalid regex");
        if !re.is_match(amount) {
            return Err(NanoteError::MalformedAmount {
                value: amount.to_string(),
                reason: "expected digits, a decimal point and the fractional digits",
            });
        }
        Ok(Self {
            digits: amount.replacen('.', "", 1),
            fraction_digits: protocol.fraction_digits(),
        })
    }

    /// Parses the raw form: decimal digits only, at least `fraction_digits + 1` of them.
    pub fn parse_raw(amount: &str, protocol: &Protocol) -> Result<Self, NanoteError> {
        let re = Regex::new(r"^[0-9]+$").expect("invalid regex");
        if !re.is_match(amount) {
            return Err(NanoteError::MalformedAmount {
                value: amount.to_string(),
                reason: "expected decimal digits only",
            });
        }
        if amount.len() < protocol.min_digits() {
            return Err(NanoteError::MalformedAmount {
                value: amount.to_string(),
                reason: "shorter than the minimum amount width",
            });
        }
        Ok(Self {
            digits: amount.to_string(),
            fraction_digits: protocol.fraction_digits(),
        })
    }

    /// Digit-only form.
    pub fn raw(&self) -> &str {
        &self.digits
    }

    /// Form with the decimal point in front of the fractional digits.
    pub fn display(&self) -> String {
        let split = self.digits.len() - self.fraction_digits;
        format!("{}.{}", &self.digits[..split], &self.digits[split..])
    }

    /// Splits off checksum and index, validates the checksum and removes the
    /// minimum offset from the value.
    pub fn fields(&self, protocol: &Protocol) -> Result<AmountFields, NanoteError> {
        let width = protocol.index_width();
        if self.digits.len() < width + 2 {
            return Err(NanoteError::MalformedAmount {
                value: self.digits.clone(),
                reason: "too short to hold an index and a checksum",
            });
        }
        let (head, checksum_digit) = self.digits.split_at(self.digits.len() - 1);
        let (value_digits, index_digits) = head.split_at(head.len() - width);

        if !validate_checksum(index_digits, checksum_digit) {
            return Err(NanoteError::ChecksumMismatch {
                expected: calculate_checksum(index_digits)?,
                found: checksum_digit.as_bytes()[0] - b'0',
            });
        }
        let checksum = checksum_digit.as_bytes()[0] - b'0';

        let index = index_digits
            .parse::<usize>()
            .map_err(|_| NanoteError::MalformedAmount {
                value: self.digits.clone(),
                reason: "unreadable charset index",
            })?;
        let shifted = value_digits
            .parse::<BigUint>()
            .map_err(|_| NanoteError::MalformedAmount {
                value: self.digits.clone(),
                reason: "unreadable value digits",
            })?;
        if shifted < *protocol.offset() {
            return Err(NanoteError::BelowMinimumOffset {
                value: value_digits.to_string(),
            });
        }

        Ok(AmountFields {
            value: shifted - protocol.offset(),
            index,
            checksum,
        })
    }
}
