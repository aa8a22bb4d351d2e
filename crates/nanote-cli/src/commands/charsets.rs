//! Charsets command implementation.

use crate::output;
use nanote_core::Engine;
use serde_json::json;

pub fn run(
    engine: &Engine,
    json_output: bool,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = limit.unwrap_or(usize::MAX);

    if !json_output {
        output::print_table_header();
    }
    for (index, charset) in engine.catalog().iter().enumerate().take(limit) {
        if json_output {
            let row = json!({ "index": index, "len": charset.len(), "charset": charset.to_string() });
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{}", output::format_table_row(index, charset));
        }
    }
    Ok(())
}
