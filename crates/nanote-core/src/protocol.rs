use num_bigint::BigUint;
use num_traits::{One, Zero};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::NanoteError;

/// Floor below which the Nano network layer ignores an amount: 0.0001 Nano in raw units.
pub const MINIMUM_RAW: &str = "100000000000000000000000000";
/// Decimal width of the charset index field.
pub const CHARSET_INDEX_WIDTH: usize = 3;
/// Digits after the decimal point of a display amount (1 Nano = 10^30 raw).
pub const FRACTION_DIGITS: usize = 30;

const MAX_INDEX_WIDTH: usize = 6;
const MAX_FRACTION_DIGITS: usize = 64;

/// Serializable protocol constants, as read from a configuration file.
///
/// `minimum_raw` is a decimal string because it does not fit a machine word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProtocolConfig {
    /// Minimum amount in raw units (decimal string, no leading zeros).
    pub minimum_raw: String,
    /// Width of the zero-padded charset index field.
    pub index_width: usize,
    /// Number of fractional digits in the display form.
    pub fraction_digits: usize,
}

impl ProtocolConfig {
    /// Reads a JSON protocol document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, NanoteError> {
        serde_json::from_str(json).map_err(|err| NanoteError::InvalidProtocol {
            field: "config",
            value: err.to_string(),
        })
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            minimum_raw: MINIMUM_RAW.to_string(),
            index_width: CHARSET_INDEX_WIDTH,
            fraction_digits: FRACTION_DIGITS,
        }
    }
}

/// Validated protocol constants used by the amount formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protocol {
    minimum_raw: BigUint,
    offset: BigUint,
    index_width: usize,
    fraction_digits: usize,
}

impl Protocol {
    /// The checksum-protected Nano protocol: 0.0001 Nano floor, 3-digit index, 30 decimals.
    pub fn nano() -> Self {
        let minimum_raw = pow10(26);
        let offset = &minimum_raw / pow10(CHARSET_INDEX_WIDTH + 1);
        Self {
            minimum_raw,
            offset,
            index_width: CHARSET_INDEX_WIDTH,
            fraction_digits: FRACTION_DIGITS,
        }
    }

    /// Validates configuration values and derives the value offset.
    pub fn from_config(config: &ProtocolConfig) -> Result<Self, NanoteError> {
        let re = Regex::new(r"^(0|[1-9][0-9]*)$").expect("invalid regex");
        if !re.is_match(&config.minimum_raw) {
            return Err(NanoteError::InvalidProtocol {
                field: "minimum_raw",
                value: config.minimum_raw.clone(),
            });
        }
        if config.index_width == 0 || config.index_width > MAX_INDEX_WIDTH {
            return Err(NanoteError::InvalidProtocol {
                field: "index_width",
                value: config.index_width.to_string(),
            });
        }
        // The value part must keep at least one digit in front of index and checksum,
        // and padding is bounded.
        if config.fraction_digits <= config.index_width
            || config.fraction_digits > MAX_FRACTION_DIGITS
        {
            return Err(NanoteError::InvalidProtocol {
                field: "fraction_digits",
                value: config.fraction_digits.to_string(),
            });
        }

        let minimum_raw = config
            .minimum_raw
            .parse::<BigUint>()
            .map_err(|_| NanoteError::InvalidProtocol {
                field: "minimum_raw",
                value: config.minimum_raw.clone(),
            })?;
        let shift = pow10(config.index_width + 1);
        if !(&minimum_raw % &shift).is_zero() {
            return Err(NanoteError::InvalidProtocol {
                field: "minimum_raw",
                value: config.minimum_raw.clone(),
            });
        }
        let offset = &minimum_raw / shift;

        Ok(Self {
            minimum_raw,
            offset,
            index_width: config.index_width,
            fraction_digits: config.fraction_digits,
        })
    }

    /// Serializable form of these constants.
    pub fn config(&self) -> ProtocolConfig {
        ProtocolConfig {
            minimum_raw: self.minimum_raw.to_string(),
            index_width: self.index_width,
            fraction_digits: self.fraction_digits,
        }
    }

    /// Minimum amount in raw units.
    pub fn minimum_raw(&self) -> &BigUint {
        &self.minimum_raw
    }

    /// Amount added to every encoded value: `minimum_raw / 10^(index_width + 1)`.
    pub fn offset(&self) -> &BigUint {
        &self.offset
    }

    /// Width of the charset index field.
    pub fn index_width(&self) -> usize {
        self.index_width
    }

    /// Fractional digits of the display form.
    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// Minimum digit count of a formatted amount.
    pub fn min_digits(&self) -> usize {
        self.fraction_digits + 1
    }

    /// Number of distinct indexes the index field can carry (`10^index_width`).
    pub fn index_capacity(&self) -> usize {
        10usize.pow(self.index_width as u32)
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::nano()
    }
}

fn pow10(exp: usize) -> BigUint {
    let mut value = BigUint::one();
    let ten = BigUint::from(10u32);
    for _ in 0..exp {
        value *= &ten;
    }
    value
}
