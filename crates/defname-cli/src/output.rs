//! Output formatting utilities.

use defname_canonical::CanonicalName;
use serde_json::{json, Value};

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// JSON view of a canonical name and its definitions reference.
pub fn name_json(name: &CanonicalName) -> Value {
    json!({
        "name": name.as_str(),
        "ref": name.reference(),
    })
}
