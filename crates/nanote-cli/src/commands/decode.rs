//! Decode command implementation.

use nanote_core::Engine;
use serde_json::json;

pub fn run(
    engine: &Engine,
    amount: String,
    raw: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if raw {
        engine.decode_raw(amount.trim())?
    } else {
        engine.decode(amount.trim())?
    };

    if json_output {
        let output = json!({ "amount": amount.trim(), "text": text });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
