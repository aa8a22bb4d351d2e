//! Inspect command implementation.

use nanote_core::Engine;
use serde_json::json;

pub fn run(
    engine: &Engine,
    amount: String,
    raw: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = if raw {
        engine.inspect_raw(amount.trim())?
    } else {
        engine.inspect(amount.trim())?
    };

    if json_output {
        let output = json!({
            "amount": amount.trim(),
            "charset_index": decoded.fields.index,
            "checksum": decoded.fields.checksum,
            "charset": decoded.charset.to_string(),
            "value": decoded.fields.value.to_string(),
            "text": decoded.text,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{:<15} {}", "CHARSET_INDEX", decoded.fields.index);
        println!("{:<15} {}", "CHECKSUM", decoded.fields.checksum);
        println!("{:<15} {:?}", "CHARSET", decoded.charset.to_string());
        println!("{:<15} {}", "VALUE", decoded.fields.value);
        println!("{:<15} {}", "TEXT", decoded.text);
    }
    Ok(())
}
