//! Subcommand implementations.

pub mod charsets;
pub mod decode;
pub mod encode;
pub mod inspect;

use nanote_core::{Engine, EngineConfig, NanoteError, ProtocolConfig};
use thiserror::Error;

/// Errors raised while preparing the engine from a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a protocol document.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path given on the command line.
        path: String,
        /// Parse failure reported by the protocol loader.
        source: NanoteError,
    },
}

/// Builds the engine, applying the protocol file when one is given.
pub fn load_engine(config: Option<&str>, verbose: bool) -> Result<Engine, Box<dyn std::error::Error>> {
    let protocol = match config {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_string(),
                source,
            })?;
            ProtocolConfig::from_json(&json).map_err(|source| ConfigError::Parse {
                path: path.to_string(),
                source,
            })?
        }
        None => ProtocolConfig::default(),
    };

    let engine = Engine::with_config(&EngineConfig { verbose, protocol })?;
    Ok(engine)
}
