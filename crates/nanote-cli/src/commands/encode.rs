//! Encode command implementation.

use nanote_core::Engine;
use serde_json::json;
use std::io::{self, Read};

pub fn run(
    engine: &Engine,
    text: Option<String>,
    raw: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read text from the argument or stdin
    let amount = match text {
        Some(text) => engine.encode_amount(&text)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            engine.encode_bytes(strip_line_ending(&buffer))?
        }
    };

    if json_output {
        let fields = amount.fields(engine.protocol())?;
        let output = json!({
            "amount": amount.display(),
            "raw": amount.raw(),
            "charset_index": fields.index,
            "checksum": fields.checksum,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if raw {
        println!("{}", amount.raw());
    } else {
        println!("{}", amount.display());
    }
    Ok(())
}

fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_line_ending() {
        assert_eq!(strip_line_ending(b"hi\r\n"), b"hi");
        assert_eq!(strip_line_ending(b"hi\n\n"), b"hi\n");
        assert_eq!(strip_line_ending(b"hi"), b"hi");
    }
}
