//! Parse command implementation.

use crate::output;
use defname_canonical::parser;

pub fn run(descriptor: String) -> Result<(), Box<dyn std::error::Error>> {
    let tree = parser::parse_complete(&descriptor)
        .map_err(|e| format!("Invalid descriptor: {}", e))?;

    println!("{}", output::format_json(&serde_json::to_value(&tree)?));
    Ok(())
}
