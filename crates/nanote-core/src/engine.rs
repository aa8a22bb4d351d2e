use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::amount::{Amount, AmountFields};
use crate::catalog::{Catalog, Charset};
use crate::checksum;
use crate::codec;
use crate::errors::NanoteError;
use crate::protocol::{Protocol, ProtocolConfig};
use crate::selector;

/// Engine construction options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log charset choices and failure reasons.
    pub verbose: bool,
    /// Protocol constants.
    pub protocol: ProtocolConfig,
}

/// A decoded amount together with the metadata it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAmount {
    /// Value, index and checksum fields.
    pub fields: AmountFields,
    /// Charset found at the carried index.
    pub charset: Charset,
    /// Decoded message.
    pub text: String,
}

/// Encodes text into amounts and back.
///
/// The catalog is built once in the constructor and never mutated, so an
/// engine can be shared between threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    protocol: Protocol,
    verbose: bool,
}

impl Engine {
    /// Creates an engine for the Nano protocol.
    pub fn new(verbose: bool) -> Self {
        Self::build(Protocol::nano(), verbose)
    }

    /// Creates an engine from configuration, rejecting protocols whose index
    /// field cannot address the whole catalog.
    pub fn with_config(config: &EngineConfig) -> Result<Self, NanoteError> {
        let protocol = Protocol::from_config(&config.protocol)?;
        let engine = Self::build(protocol, config.verbose);
        if engine.catalog.len() > engine.protocol.index_capacity() {
            return Err(NanoteError::InvalidProtocol {
                field: "index_width",
                value: engine.protocol.index_width().to_string(),
            });
        }
        Ok(engine)
    }

    fn build(protocol: Protocol, verbose: bool) -> Self {
        let catalog = Catalog::generate();
        if verbose {
            debug!(charsets = catalog.len(), "generated charset catalog");
        }
        Self {
            catalog,
            protocol,
            verbose,
        }
    }

    /// Charset catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Protocol constants.
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Whether diagnostics are logged.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Encodes `text` as a display amount such as `0.000100000000000000000000020001`.
    pub fn encode(&self, text: &str) -> Result<String, NanoteError> {
        self.encode_amount(text).map(|amount| amount.display())
    }

    /// Encodes `text` as a raw amount (digits only).
    pub fn encode_raw(&self, text: &str) -> Result<String, NanoteError> {
        self.encode_amount(text)
            .map(|amount| amount.raw().to_string())
    }

    /// Encodes UTF-8 bytes; anything else is `InvalidInputType`.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<Amount, NanoteError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.encode_amount(text),
            Err(_) => self.report(
                "encode",
                Err(NanoteError::InvalidInputType {
                    field: "text",
                    value: String::from_utf8_lossy(bytes).into_owned(),
                }),
            ),
        }
    }

    /// Encodes `text` into an [`Amount`] that offers both presentations.
    pub fn encode_amount(&self, text: &str) -> Result<Amount, NanoteError> {
        self.report("encode", self.try_encode(text))
    }

    fn try_encode(&self, text: &str) -> Result<Amount, NanoteError> {
        let (index, charset) = self
            .shortest_charset(text)
            .and_then(|index| self.catalog.get(index).map(|charset| (index, charset)))
            .ok_or_else(|| NanoteError::NoCoveringCharset {
                unsupported: self.catalog.unsupported(text),
            })?;
        if self.verbose {
            debug!(index, charset = %charset, "encoding with charset");
        }
        let value = codec::b10_encode(text, charset)?;
        Amount::format(&value, index, &self.protocol)
    }

    /// Decodes a display amount.
    pub fn decode(&self, amount: &str) -> Result<String, NanoteError> {
        self.inspect(amount).map(|decoded| decoded.text)
    }

    /// Decodes a raw amount.
    pub fn decode_raw(&self, amount: &str) -> Result<String, NanoteError> {
        self.inspect_raw(amount).map(|decoded| decoded.text)
    }

    /// Decodes a display amount, keeping the carried metadata.
    pub fn inspect(&self, amount: &str) -> Result<DecodedAmount, NanoteError> {
        let result = Amount::parse_display(amount, &self.protocol)
            .and_then(|amount| self.decode_amount(&amount));
        self.report("decode", result)
    }

    /// Decodes a raw amount, keeping the carried metadata.
    pub fn inspect_raw(&self, amount: &str) -> Result<DecodedAmount, NanoteError> {
        let result = Amount::parse_raw(amount, &self.protocol)
            .and_then(|amount| self.decode_amount(&amount));
        self.report("decode", result)
    }

    fn decode_amount(&self, amount: &Amount) -> Result<DecodedAmount, NanoteError> {
        let fields = amount.fields(&self.protocol)?;
        let charset = self
            .catalog
            .get(fields.index)
            .ok_or(NanoteError::IndexOutOfRange {
                index: fields.index,
                len: self.catalog.len(),
            })?;
        if self.verbose {
            debug!(index = fields.index, charset = %charset, "decoding with charset");
        }
        let text = codec::b10_decode(&fields.value, charset);
        Ok(DecodedAmount {
            charset: charset.clone(),
            text,
            fields,
        })
    }

    /// Index of the smallest charset covering `text`, if any.
    pub fn shortest_charset(&self, text: &str) -> Option<usize> {
        selector::shortest_charset(&self.catalog, text)
    }

    /// See [`checksum::calculate_checksum`].
    pub fn calculate_checksum(&self, digits: &str) -> Result<u8, NanoteError> {
        checksum::calculate_checksum(digits)
    }

    /// See [`checksum::validate_checksum`].
    pub fn validate_checksum(&self, digits: &str, digit: &str) -> bool {
        checksum::validate_checksum(digits, digit)
    }

    /// See [`codec::b10_encode`].
    pub fn b10_encode(&self, text: &str, charset: &Charset) -> Result<BigUint, NanoteError> {
        codec::b10_encode(text, charset)
    }

    /// See [`codec::b10_decode`].
    pub fn b10_decode(&self, value: &BigUint, charset: &Charset) -> String {
        codec::b10_decode(value, charset)
    }

    fn report<T>(
        &self,
        operation: &'static str,
        result: Result<T, NanoteError>,
    ) -> Result<T, NanoteError> {
        if self.verbose {
            if let Err(err) = &result {
                warn!(operation, reason = err.code(), "{}", err);
            }
        }
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn verbose_does_not_change_results() {
        let quiet = Engine::new(false);
        let verbose = Engine::new(true);
        assert_eq!(quiet.encode("hello"), verbose.encode("hello"));
        assert_eq!(quiet.decode("1.5"), verbose.decode("1.5"));
    }

    #[test]
    fn narrow_index_field_is_rejected() {
        let config = EngineConfig {
            verbose: false,
            protocol: ProtocolConfig {
                index_width: 2,
                ..ProtocolConfig::default()
            },
        };
        assert!(matches!(
            Engine::with_config(&config),
            Err(NanoteError::InvalidProtocol { field: "index_width", .. })
        ));
    }

    #[test]
    fn wider_index_field_reports_missing_charsets() {
        let config = EngineConfig {
            verbose: false,
            protocol: ProtocolConfig {
                index_width: 4,
                ..ProtocolConfig::default()
            },
        };
        let engine = Engine::with_config(&config).unwrap();
        let amount = Amount::format(&BigUint::from(1u32), 1000, engine.protocol()).unwrap();
        assert_eq!(
            engine.decode(&amount.display()),
            Err(NanoteError::IndexOutOfRange {
                index: 1000,
                len: 1000
            })
        );
        assert_eq!(engine.decode(&engine.encode("e").unwrap()).unwrap(), "e");
    }

    #[test]
    fn oversized_fraction_digits_fail_construction() {
        let config = EngineConfig {
            verbose: false,
            protocol: ProtocolConfig {
                fraction_digits: usize::MAX,
                ..ProtocolConfig::default()
            },
        };
        assert!(matches!(
            Engine::with_config(&config),
            Err(NanoteError::InvalidProtocol { field: "fraction_digits", .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_an_input_type_error() {
        let engine = Engine::default();
        assert!(matches!(
            engine.encode_bytes(&[0x66, 0xff, 0x6f]),
            Err(NanoteError::InvalidInputType { field: "text", .. })
        ));
        assert_eq!(
            engine.encode_bytes(b"e").unwrap().display(),
            "0.000100000000000000000000020001"
        );
    }

    #[test]
    fn inspect_exposes_metadata() {
        let engine = Engine::default();
        let decoded = engine.inspect("0.000100000000000000000000020001").unwrap();
        assert_eq!(decoded.fields.index, 0);
        assert_eq!(decoded.fields.checksum, 1);
        assert_eq!(decoded.fields.value, BigUint::from(2u32));
        assert_eq!(decoded.charset.to_string(), " etaoinsrhl");
        assert_eq!(decoded.text, "e");
    }
}
