//! Reversible encoding of short text messages into Nano transaction amounts.
//!
//! A message is written in the smallest charset of a fixed catalog that holds
//! all of its characters, read as a big number in base `|charset| + 1`,
//! raised above the protocol's minimum amount and followed by the charset
//! index and a checksum digit. The result is an ordinary 30-decimal amount:
//!
//! ```rust
//! use nanote_core::Engine;
//!
//! let engine = Engine::new(false);
//! let amount = engine.encode("e")?;
//! assert_eq!(amount, "0.000100000000000000000000020001");
//! assert_eq!(engine.decode(&amount)?, "e");
//! # Ok::<(), nanote_core::NanoteError>(())
//! ```
//!
//! Sending and receiving the transaction is left to the caller.
#![deny(missing_docs)]

/// Amount layout: value, charset index, checksum and decimal point.
pub mod amount;
/// Charset catalog generation.
pub mod catalog;
/// Single-digit checksum over the charset index.
pub mod checksum;
/// Arbitrary-precision conversion between text and numbers.
pub mod codec;
/// Encoding engine owning the catalog.
pub mod engine;
/// Error types.
pub mod errors;
/// Protocol constants and their configuration.
pub mod protocol;
/// Minimal charset lookup.
pub mod selector;

pub use amount::{Amount, AmountFields};
pub use catalog::{Catalog, Charset};
pub use checksum::{calculate_checksum, validate_checksum};
pub use codec::{b10_decode, b10_encode};
pub use engine::{DecodedAmount, Engine, EngineConfig};
pub use errors::NanoteError;
pub use protocol::{Protocol, ProtocolConfig, CHARSET_INDEX_WIDTH, FRACTION_DIGITS, MINIMUM_RAW};
pub use selector::shortest_charset;
